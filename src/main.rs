use clap::Parser;
use major_finder::core::export::{self, Report};
use major_finder::utils::{logger, validation::Validate};
use major_finder::{Advisor, CliConfig, LocalStorage, OutputFormat};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting major-finder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證輸入
    if let Err(e) = config.validate() {
        tracing::error!("❌ Input validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let mut advisor = Advisor::new(config.clone());
    if config.export {
        advisor = advisor.with_export(&storage, &config.filename);
    }

    let outcome = match advisor.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                "❌ Recommendation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match config.format {
        OutputFormat::Text => {
            print!("{}", export::render_text(&outcome.recommendation));
            if let Some(path) = &outcome.export_path {
                println!("\n📁 Scores saved to: {}", path);
            }
        }
        OutputFormat::Json => {
            let report = Report::new(&outcome.recommendation, advisor.engine().weights(), None);
            match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(e.exit_code());
                }
            }
        }
    }
}
