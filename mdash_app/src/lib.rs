use figment::{
    Figment,
    providers::{Env, Format, Toml},
};

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "MDASH_CONFIG";

/// Configuration file read when [`CONFIG_PATH_VAR`] is not set.
pub const DEFAULT_CONFIG_FILE: &str = "mdash.toml";

/// Prefix of environment variables overriding the configuration file.
/// Nested keys are separated by `__`, e.g. `MDASH_DEVICE__API_KEY`.
pub const ENV_PREFIX: &str = "MDASH_";

pub trait ContextProvider<Config> {
    fn new(config: Config) -> impl Future<Output = Self>;
}

/// Install the JSON log subscriber. The level is taken from `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        .with_ansi(false)
        // the supervisor adds its own timestamps.
        .without_time()
        .with_target(false)
        .init();
}

/// The configuration sources, file first, environment on top.
#[must_use]
pub fn figment() -> Figment {
    let path = std::env::var(CONFIG_PATH_VAR)
        .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Extract the configuration from the TOML file and the environment.
///
/// # Errors
/// If the merged sources do not match `Config`.
pub fn load_config<'a, Config: serde::Deserialize<'a>>()
-> Result<Config, figment::Error> {
    figment().extract()
}

/// Initialize logging and build the application context from the
/// configuration.
///
/// # Errors
/// If the configuration cannot be extracted.
pub async fn create_app_context<'a, A, Config: serde::Deserialize<'a>>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    init_tracing();

    let config: Config = load_config()?;
    tracing::debug!("Configuration loaded");

    let context = A::new(config).await;

    Ok(context)
}
