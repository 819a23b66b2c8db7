use besu_genesis::utils::error::ErrorSeverity;
use besu_genesis::utils::{logger, validation::Validate};
use besu_genesis::{GenesisAssembler, GenesisConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "besu-genesis")]
#[command(about = "Assembles contract sections for a ledger genesis file")]
struct Args {
    /// Path to the genesis TOML configuration file
    #[arg(short, long, default_value = "genesis-config.toml")]
    config: String,

    /// Write the assembled sections to this JSON file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON (for CI log collectors)
    #[arg(long)]
    log_json: bool,

    /// Show what would be assembled without producing output
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting genesis section assembly");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match GenesisConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be produced");
        return Ok(());
    }

    let assembler = GenesisAssembler::new(&config);

    match assembler.assemble_json() {
        Ok(json) => match &args.output {
            Some(path) => {
                std::fs::write(path, json)?;
                tracing::info!("✅ Genesis sections assembled successfully!");
                tracing::info!("📁 Output saved to: {}", path);
                println!("✅ Genesis sections assembled successfully!");
                println!("📁 Output saved to: {}", path);
            }
            None => {
                println!("{}", json);
            }
        },
        Err(e) => {
            tracing::error!(
                "❌ Assembly failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &GenesisConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Network: {} (chain id {})",
        config.network.name, config.network.chain_id
    );

    if let Some(description) = &config.network.description {
        println!("  Description: {}", description);
    }

    println!("  Contracts: {}", config.contract_count());
    for table in config.configured_contracts() {
        println!("    - {}", table);
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
