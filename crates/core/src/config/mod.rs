//! Configuration management for lazy

mod settings;
pub mod toolchain_config;
pub mod wait_config;

// Re-export main types
pub use settings::{CONFIG_FILE_NAME, Config};
pub use toolchain_config::ToolchainConfig;
pub use wait_config::WaitConfig;
