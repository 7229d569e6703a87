use clap::Parser;
use major_finder::config::toml_config::TomlConfig;
use major_finder::core::export::{self, Report};
use major_finder::domain::ports::InputSource;
use major_finder::utils::{logger, validation::Validate};
use major_finder::{Advisor, LocalStorage, OutputFormat};

#[derive(Parser)]
#[command(name = "toml-advisor")]
#[command(about = "Major and minor recommendation driven by a TOML student file")]
struct Args {
    /// Path to TOML student file
    #[arg(short, long, default_value = "student.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the export setting from the file
    #[arg(long)]
    export: Option<bool>,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based advisor");
    tracing::info!("📁 Loading student file from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load student file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 應用命令列覆蓋設定
    if let Some(enabled) = args.export {
        let export = config.export.get_or_insert_with(|| {
            major_finder::config::toml_config::ExportConfig {
                enabled,
                output_path: None,
                filename: None,
            }
        });
        export.enabled = enabled;
        tracing::info!("🔧 Export overridden to: {}", enabled);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Student file validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Student file loaded and validated successfully");

    let storage = LocalStorage::new(config.output_path().to_string());
    let filename = config.filename().to_string();
    let export_enabled = config.export_enabled();

    let mut advisor = Advisor::new(config);
    if export_enabled {
        advisor = advisor.with_export(&storage, &filename);
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
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match args.format {
        OutputFormat::Text => {
            if let Some(name) = advisor.source().student_name() {
                println!("👤 {}", name);
            }
            print!("{}", export::render_text(&outcome.recommendation));
            if let Some(path) = &outcome.export_path {
                println!("\n📁 Scores saved to: {}", path);
            }
        }
        OutputFormat::Json => {
            let report = Report::new(
                &outcome.recommendation,
                advisor.engine().weights(),
                advisor.source().student_name(),
            );
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
