#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_TRANSPORT_URL: &str = "https://www.rome2rio.com";
pub const DEFAULT_HOTELS_URL: &str = "https://www.booking.com";
pub const DEFAULT_ATTRACTIONS_URL: &str = "https://en.wikipedia.org";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_MAX_ATTRACTIONS: usize = 5;
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;
