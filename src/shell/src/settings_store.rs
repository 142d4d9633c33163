//! Credential settings storage
//!
//! The core writes every credential field through its own request, so the
//! store sees three independent `set` calls per scan that may run
//! concurrently.

use anyhow::{Context, Result, anyhow};
use ini::Ini;
use log::debug;
#[cfg(feature = "mock")]
use mockall::automock;
use qr_provision_core::SettingKey;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tokio::task::spawn_blocking;
use trait_variant::make;

/// INI section holding the provisioned client
pub const CLIENT_SECTION: &str = "client";

#[make(Send + Sync)]
#[cfg_attr(feature = "mock", automock)]
pub trait SettingsStore {
    async fn set(&self, key: SettingKey, value: String) -> Result<()>;
    async fn get(&self, key: SettingKey) -> Result<Option<String>>;
}

/// Settings persisted in an INI file
///
/// Every write is a full read-modify-write of the file. File access runs on
/// the blocking thread pool, serialized by a shared lock so concurrent
/// setters keep each other's values.
pub struct IniSettingsStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl IniSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run `f` on the loaded settings file while holding the lock
    async fn with_file<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Path, &mut Ini) -> Result<T> + Send + 'static,
    {
        let path = self.path.clone();
        let lock = self.lock.clone();

        spawn_blocking(move || {
            let _guard = lock
                .lock()
                .map_err(|_| anyhow!("failed to lock settings: poisoned"))?;

            let mut ini = load(&path)?;
            f(path.as_path(), &mut ini)
        })
        .await
        .context("settings task failed")?
    }
}

fn load(path: &Path) -> Result<Ini> {
    match Ini::load_from_file(path) {
        Ok(ini) => Ok(ini),
        Err(ini::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            debug!("settings file {path:?} missing, starting empty");
            Ok(Ini::new())
        }
        Err(e) => Err(e).context(format!("failed to read settings: {path:?}")),
    }
}

impl SettingsStore for IniSettingsStore {
    async fn set(&self, key: SettingKey, value: String) -> Result<()> {
        self.with_file(move |path, ini| {
            ini.with_section(Some(CLIENT_SECTION)).set(key.as_str(), value);

            ini.write_to_file(path)
                .context(format!("failed to write settings: {path:?}"))?;

            debug!("stored {key} in {path:?}");

            Ok(())
        })
        .await
    }

    async fn get(&self, key: SettingKey) -> Result<Option<String>> {
        self.with_file(move |_, ini| {
            Ok(ini
                .get_from(Some(CLIENT_SECTION), key.as_str())
                .map(str::to_string))
        })
        .await
    }
}
