use clap::Parser;
use crop_yield::app::report;
use crop_yield::config::toml_config::LogFormat;
use crop_yield::utils::error::{ErrorSeverity, YieldError};
use crop_yield::utils::{logger, validation::Validate};
use crop_yield::{CliConfig, PredictionService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置，日誌格式取決於配置檔
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting crop-yield CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    let service = match PredictionService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    match service.predict(&cli.raw_input()).await {
        Ok(prediction) => {
            tracing::info!("✅ Prediction complete");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                print!("{}", report::render_text(&prediction));
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Prediction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }

    Ok(())
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &YieldError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
