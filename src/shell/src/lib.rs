pub mod config;
pub mod permission_provider;
pub mod settings_store;
pub mod shell;

pub use shell::Shell;
