use clap::Parser;
use numerology_service::config::{Command, ValidationFile};
use numerology_service::utils::error::ErrorSeverity;
use numerology_service::utils::{logger, validation::Validate};
use numerology_service::{
    BatchProcessor, CliConfig, NumerologyEngine, NumerologyError, Reading, ValidationRules,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting numerology CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let rules = match &config.config {
        Some(path) => ValidationFile::rules_from_file(path).unwrap_or_else(|e| exit_with(&e)),
        None => ValidationRules::default(),
    };
    let engine = NumerologyEngine::new();

    match &config.command {
        Command::Batch {
            input,
            output,
            format,
        } => {
            let processor = BatchProcessor::new(&engine, &rules);
            match processor.run_file(input, output.as_deref(), *format) {
                Ok(summary) => {
                    eprintln!(
                        "✅ Processed {} rows ({} rejected)",
                        summary.processed, summary.rejected
                    );
                }
                Err(e) => exit_with(&e),
            }
        }
        command => {
            if let Some((domain, raw)) = command.single_reading() {
                if let Err(e) = rules.check(domain, raw) {
                    exit_with(&e);
                }
                let reading = engine.compute(domain, raw);
                print_reading(&reading, config.json)?;
            }
        }
    }

    Ok(())
}

fn print_reading(reading: &Reading, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reading)?);
    } else {
        println!("🔢 {} ({})", reading.input, reading.domain);
        println!("✨ Destiny number: {}", reading.destiny_number);
        println!("📖 {}", reading.interpretation);
    }
    Ok(())
}

fn exit_with(e: &NumerologyError) -> ! {
    tracing::error!(
        "❌ Numerology CLI failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
