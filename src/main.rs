use clap::Parser;
use docs_profile::core::ConfigProvider;
use docs_profile::utils::error::ErrorSeverity;
use docs_profile::utils::{logger, validation::Validate};
use docs_profile::{CliConfig, DocsError, HttpSiteSource, LocalStorage, ProfileEngine};

fn fail(e: &DocsError) -> ! {
    tracing::error!(
        "❌ docs-profile failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting docs-profile");
    tracing::debug!("CLI args: {:?}", cli);

    let config = match cli.resolve().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let source = match HttpSiteSource::new(config.base_url(), config.timeout_seconds()) {
        Ok(source) => source,
        Err(e) => fail(&e),
    };
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = ProfileEngine::new(source, storage, config);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Latest version: {}", report.latest);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
