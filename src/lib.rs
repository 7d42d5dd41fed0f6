pub mod cli;
pub mod config;
pub mod form;
pub mod observability;

pub use config::Config;

rust_i18n::i18n!("locales", fallback = "es");
