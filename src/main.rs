use clap::Parser;
use qa2csv::utils::error::ErrorSeverity;
use qa2csv::utils::{logger, validation::Validate};
use qa2csv::{CliConfig, EtlEngine, LocalStorage, QaCsvPipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let pipeline = QaCsvPipeline::new(LocalStorage::new("."), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            println!(
                "✅ Wrote {} rows to {}",
                summary.rows_written,
                summary.output_path.display()
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
