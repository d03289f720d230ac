use clap::Parser;
use fapesp_opportunities::utils::error::ErrorSeverity;
use fapesp_opportunities::utils::{logger, validation::Validate};
use fapesp_opportunities::{CliArgs, OpportunityError, OpportunityRecord, OutputFormat, SettingsStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    match args.format {
        OutputFormat::Json if !args.verbose => logger::init_json_logger(),
        _ => logger::init_cli_logger(args.verbose),
    }

    let store = SettingsStore::new(args.config_path());
    tracing::debug!("Using settings file: {}", store.path().display());

    let config = match store.ensure_defaults().and_then(|written| {
        if written {
            tracing::info!("Wrote default settings to {}", store.path().display());
        }
        store.load()
    }) {
        Ok(mut config) => {
            args.apply_overrides(&mut config);
            config
        }
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if args.show_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let engine = match fapesp_opportunities::engine(&config) {
        Ok(engine) => engine,
        Err(e) => exit_with(&e),
    };

    match engine.run().await {
        Ok(records) => match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            OutputFormat::Text => print_cards(&records, &config.url),
        },
        Err(e) => {
            tracing::error!(
                "Search failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }

    Ok(())
}

fn print_cards(records: &[OpportunityRecord], source_url: &str) {
    if records.is_empty() {
        println!("No open opportunities matched your filters.");
        println!("Listing page: {}", source_url);
        return;
    }

    for (i, record) in records.iter().enumerate() {
        println!("--- Opportunity {} ---", i + 1);
        println!("{}", record.title);
        if !record.body.is_empty() {
            println!("{}", record.body);
        }
        println!("{}", record.link);
        println!("{} - {}", record.city, record.institute);
        println!("End date: {}", record.end_date);
        println!();
    }
    println!("Listing page: {}", source_url);
}

fn exit_with(e: &OpportunityError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
