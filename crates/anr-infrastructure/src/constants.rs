//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "ANR";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "anr.toml";

/// Environment variable consulted for the log filter
pub const LOG_ENV_VAR: &str = "ANR_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for the Groq API key when the
/// configuration file does not carry one
pub const GROQ_API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

/// Default HTTP bind address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8000;
