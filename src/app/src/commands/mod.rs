pub mod permission;
pub mod settings;
pub mod toast;
