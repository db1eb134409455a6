mod inventory;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use qguard_compliance::{assess_all, assess_framework_named};
use qguard_core::config_loader::QguardConfig;
use qguard_cost::{compare_scenarios, project_costs_named};
use qguard_risk::run_analysis;

#[derive(Parser, Debug)]
#[command(name = "qguard", version, about = "QGuard — Quantum Cryptography Risk Suite for Banks")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "qguard.toml")]
    config: String,

    /// Inventory JSON file (defaults to the built-in sample bank)
    #[arg(short, long)]
    inventory: Option<String>,

    /// Assess a single framework instead of all eight
    #[arg(short, long)]
    framework: Option<String>,

    /// Cost scenario to project (aggressive | standard | conservative)
    #[arg(short, long, default_value = "standard")]
    scenario: String,

    /// Log level (overrides config file)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Emit the full analysis as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Generate a default config file and exit
    #[arg(long)]
    generate_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let config = QguardConfig::default();
        config.save(&cli.config)?;
        println!("Default configuration written to {}", cli.config);
        return Ok(());
    }

    let config = QguardConfig::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        QguardConfig::default()
    });

    // RUST_LOG wins over the flag and the config file.
    let log_level = cli.log_level.as_deref().unwrap_or(&config.general.log_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("QGuard v{}", env!("CARGO_PKG_VERSION"));

    let params = config.parameters();
    let inventory_path = cli.inventory.or_else(|| config.general.inventory_path.clone());
    let assets = match inventory_path {
        Some(path) => inventory::load_inventory(&path)
            .with_context(|| format!("failed to load inventory from {path}"))?,
        None => {
            info!("No inventory given, using the built-in sample bank");
            inventory::sample_inventory()
        }
    };

    let run = run_analysis(&assets, &params)?;
    let compliance = match &cli.framework {
        Some(name) => vec![assess_framework_named(&run.scored, name)?],
        None => assess_all(&run.scored),
    };
    let projection = project_costs_named(&run.scored, &cli.scenario, &params)?;
    let comparison = compare_scenarios(&run.scored, &params);

    if cli.json {
        let output = serde_json::json!({
            "scored_assets": &run.scored,
            "summary": &run.summary,
            "compliance": &compliance,
            "cost_projection": &projection,
            "scenario_comparison": &comparison,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("QGuard analysis — {}", chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"));
    println!();
    print!("{}", render::render_summary(&run));
    println!();
    print!("{}", render::render_compliance(&compliance));
    println!();
    print!("{}", render::render_costs(&projection));
    println!();
    print!("{}", render::render_comparison(&comparison));

    Ok(())
}
