use clap::Parser;
use numerology_service::api;
use numerology_service::utils::{logger, validation::Validate};
use numerology_service::ServerConfig;

#[derive(Parser)]
#[command(name = "numerology-server")]
#[command(about = "Token-authenticated numerology REST API")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "numerology.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the port from the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = match ServerConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_server_logger(args.verbose, config.json_logs());

    tracing::info!("🚀 Starting numerology server");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(port) = args.port {
        config
            .server
            .get_or_insert_with(|| numerology_service::config::toml_config::HttpConfig {
                host: None,
                port: None,
                cors_allowed_origins: None,
            })
            .port = Some(port);
        tracing::info!("🔧 Port overridden to: {}", port);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.check {
        println!("✅ Configuration is valid");
        return Ok(());
    }

    api::start_server(config).await?;
    Ok(())
}
