mod settings;

pub use settings::{CurrencyConfig, LoggingConfig, Settings};
