pub use self::colors::SpinColor;
pub use self::config::{APP_NAME, APP_VERSION, Config, Options};
pub use self::errors::ConfigError;

pub mod frames;

mod colors;
mod config;
mod errors;
