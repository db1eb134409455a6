use crate::config_loader::QguardConfig;
use crate::types::*;

fn asset(id: &str, algorithm: Algorithm) -> CryptoAsset {
    CryptoAsset {
        id: id.into(),
        name: format!("asset {id}"),
        category: AssetCategory::CoreBanking,
        algorithm,
        key_size_bits: 2048,
        criticality: CriticalityTier::High,
        data_sensitivity: DataSensitivity::High,
        exposure: ExposureSurface::External,
    }
}

#[test]
fn algorithm_round_trips_through_canonical_name() {
    for name in [
        "RSA-2048", "RSA-4096", "ECC-256", "ECC-384", "AES-128", "AES-256", "SHA-256", "SHA-3",
        "DES", "3DES",
    ] {
        let algo = Algorithm::from(name.to_string());
        assert!(algo.is_known(), "{name} should resolve");
        assert_eq!(algo.canonical_name(), name);
    }
}

#[test]
fn unknown_algorithm_falls_through_to_other() {
    let algo = Algorithm::from("FOO-999".to_string());
    assert_eq!(algo, Algorithm::Other("FOO-999".into()));
    assert!(!algo.is_known());
    assert_eq!(algo.canonical_name(), "FOO-999");
}

#[test]
fn algorithm_parse_is_case_insensitive() {
    assert_eq!(Algorithm::from("rsa-2048".to_string()), Algorithm::Rsa2048);
    assert_eq!(Algorithm::from(" aes-256 ".to_string()), Algorithm::Aes256);
}

#[test]
fn algorithm_serde_uses_display_names() {
    let json = serde_json::to_string(&Algorithm::TripleDes).unwrap();
    assert_eq!(json, "\"3DES\"");
    let back: Algorithm = serde_json::from_str("\"3DES\"").unwrap();
    assert_eq!(back, Algorithm::TripleDes);
}

#[test]
fn risk_class_orders_by_severity() {
    assert!(RiskClass::Critical > RiskClass::High);
    assert!(RiskClass::High > RiskClass::Medium);
    assert!(RiskClass::Medium > RiskClass::Low);
    assert!(RiskClass::Low > RiskClass::Minimal);
}

#[test]
fn asset_validation_rejects_empty_id() {
    let mut a = asset("a1", Algorithm::Rsa2048);
    a.id = "  ".into();
    assert!(a.validate().is_err());
}

#[test]
fn asset_validation_rejects_zero_key_size() {
    let mut a = asset("a1", Algorithm::Rsa2048);
    a.key_size_bits = 0;
    let err = a.validate().unwrap_err();
    assert!(err.to_string().contains("a1"));
}

#[test]
fn asset_validation_accepts_well_formed_record() {
    assert!(asset("a1", Algorithm::Aes256).validate().is_ok());
}

#[test]
fn parameters_validate_advancement_range() {
    let mut p = GlobalParameters::default();
    assert!(p.validate().is_ok());
    p.advancement_factor = 0.4;
    assert!(p.validate().is_err());
    p.advancement_factor = 2.5;
    assert!(p.validate().is_err());
    p.advancement_factor = f64::NAN;
    assert!(p.validate().is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = QguardConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let back: QguardConfig = toml::from_str(&text).unwrap();
    assert_eq!(back.analysis.advancement_factor, 1.0);
    assert_eq!(back.parameters(), GlobalParameters::default());
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = QguardConfig::load("/nonexistent/qguard.toml").unwrap();
    assert_eq!(config.general.log_level, "info");
}
