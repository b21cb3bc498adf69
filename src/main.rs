use anyhow::Context;
use clap::Parser;
use jobraptor::utils::logger;
use jobraptor::{CliConfig, Console, JobRaptor, JobSpyApiScraper, LocalStorage, RaptorError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting jobraptor");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_app_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let scraper = JobSpyApiScraper::from_config(&config.scraper)
        .context("failed to create the scraper HTTP client")?;
    let storage = LocalStorage::new(config.export.output_dir.clone());
    let app = JobRaptor::new(scraper, storage);

    tracing::info!("Scraper endpoint: {}", config.scraper.endpoint);

    let mut console = Console::stdio();
    match app.run(&mut console) {
        Ok(()) => Ok(()),
        Err(RaptorError::InputClosed) => {
            tracing::info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ jobraptor stopped: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
