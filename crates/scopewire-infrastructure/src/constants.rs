//! Infrastructure layer constants
//!
//! Domain-level constants (binding sigils, plan format version) live in
//! `scopewire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "scopewire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "scopewire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SCOPEWIRE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a log filter directive
pub const LOG_FILTER_ENV: &str = "SCOPEWIRE_LOG";

/// [`LOG_FILTER_ENV`] without the configuration prefix
pub const LOG_FILTER_KEY: &str = "log";

/// File stem used for rolling log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "scopewire";
