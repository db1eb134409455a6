//! Inventory ingestion: JSON files or the built-in sample bank.

use qguard_core::error::AnalysisResult;
use qguard_core::types::{
    Algorithm, AssetCategory, CriticalityTier, CryptoAsset, DataSensitivity, ExposureSurface,
};
use std::path::Path;
use tracing::info;

/// Load an inventory from a JSON array of asset records.
pub fn load_inventory(path: impl AsRef<Path>) -> AnalysisResult<Vec<CryptoAsset>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let inventory: Vec<CryptoAsset> = serde_json::from_str(&content)?;
    info!(path = %path.display(), assets = inventory.len(), "Inventory loaded");
    Ok(inventory)
}

fn sample(
    id: &str,
    name: &str,
    algorithm: &str,
    key_size_bits: u32,
    category: AssetCategory,
    criticality: CriticalityTier,
    data_sensitivity: DataSensitivity,
    exposure: ExposureSurface,
) -> CryptoAsset {
    CryptoAsset {
        id: id.into(),
        name: name.into(),
        category,
        algorithm: Algorithm::from(algorithm.to_string()),
        key_size_bits,
        criticality,
        data_sensitivity,
        exposure,
    }
}

/// A representative mid-size bank inventory, used when no file is given.
pub fn sample_inventory() -> Vec<CryptoAsset> {
    use AssetCategory::*;
    use CriticalityTier as C;
    use DataSensitivity as S;
    use ExposureSurface::*;

    vec![
        sample("core-tls", "Core Banking TLS", "RSA-2048", 2048, CoreBanking, C::Critical, S::Critical, External),
        sample("pay-gw", "Payment Gateway", "RSA-4096", 4096, PaymentProcessing, C::Critical, S::Critical, External),
        sample("cust-auth", "Customer Auth Keys", "ECC-256", 256, CustomerAuthentication, C::High, S::High, Public),
        sample("mob-sign", "Mobile App Signing", "ECC-384", 384, MobileBanking, C::High, S::High, Public),
        sample("data-rest", "Data-at-Rest Encryption", "AES-256", 256, DataStorage, C::Critical, S::Critical, Internal),
        sample("api-gw", "API Gateway", "RSA-2048", 2048, ApiSecurity, C::Medium, S::Medium, External),
        sample("atm-link", "ATM Communication", "3DES", 168, AtmNetwork, C::High, S::High, Internal),
        sample("int-mail", "Internal Email", "RSA-2048", 2048, InternalCommunications, C::Low, S::Low, Internal),
        sample("db-enc", "Database Encryption", "AES-128", 128, DataStorage, C::High, S::High, Internal),
        sample("doc-sign", "Digital Signatures", "SHA-256", 256, CoreBanking, C::Critical, S::Critical, Internal),
    ]
}
