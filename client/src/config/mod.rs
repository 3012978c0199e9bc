mod client_config;
mod symbol_config;

pub use client_config::{CONFIG_FILE, Config, get_config_manager};
pub use symbol_config::SymbolConfig;
