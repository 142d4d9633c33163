use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{info, warn};
use qr_provision::{
    Shell, config::AppConfig, permission_provider::PolicyPermissionProvider,
    settings_store::IniSettingsStore,
};
use qr_provision_core::PermissionState;
use std::io::Write;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::get();

    info!(
        "settings: {:?}, camera: {:?}, transient notices: {}",
        config.settings.path, config.camera.access, config.notices.transient
    );

    let shell = Shell::new(
        PolicyPermissionProvider::new(config.camera.access),
        IniSettingsStore::new(&config.settings.path),
        config.notices.transient,
    );

    let view = shell
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .context("failed to run scanner")?;

    if view.permission == PermissionState::Denied {
        warn!("scanner stopped: camera permission denied");
    }

    info!("good bye");

    Ok(())
}
