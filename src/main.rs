use graylog_config::config::{
    Config, ConfigError, ConfigRecord, EnvConfig, LoggerSettings, RecordConfig,
};
use std::{env, process};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn parse_config_path() -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix("--config=").map(str::to_string))
}

fn init_tracing(settings: &LoggerSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.max_level().to_string()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(settings.use_colored_console_logs);

    if settings.enable_json_formatter {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&str>) -> Result<Box<dyn Config>, ConfigError> {
    match path {
        Some(path) => Ok(Box::new(RecordConfig::new(ConfigRecord::load(path)?))),
        None => Ok(Box::new(EnvConfig::new())),
    }
}

fn main() {
    // Load .env file if it exists (ignore error if not found)
    dotenvy::dotenv().ok();

    let config_path = parse_config_path();

    let settings = match load_config(config_path.as_deref())
        .and_then(|config| LoggerSettings::resolve(config.as_ref()))
    {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid logging configuration: {}", e);
            process::exit(1);
        }
    };

    init_tracing(&settings);

    info!(
        source = config_path.as_deref().unwrap_or("environment"),
        app = %settings.app_name,
        env = %settings.log_env_name,
        transport = %settings.handler_type,
        endpoint = %settings.endpoint(),
        tls_timeout = ?settings.tls_timeout,
        skip_tls_verify = settings.skip_tls_verify,
        log_level = settings.log_level,
        "Logging configuration is valid"
    );
}
