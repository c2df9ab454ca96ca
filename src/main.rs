use clap::Parser;
use movie_catalog::utils::logger;
use movie_catalog::{CliConfig, Command, Shell};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入配置 (logger 尚未初始化，直接輸出到 stderr)
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!(
        "Starting movie-catalog with {} movies ({:?} output)",
        settings.catalog.len(),
        settings.format
    );
    tracing::info!("Type 'help' for the list of commands");

    let stdout = io::stdout();
    let presenter = settings.format.presenter(stdout.lock());
    let mut shell = Shell::new(settings.catalog, presenter);

    shell.execute(Command::List)?;
    let summary = shell.run(io::stdin().lock())?;

    tracing::debug!(
        "Processed {} commands ({} rejected)",
        summary.commands,
        summary.failures
    );
    Ok(())
}
