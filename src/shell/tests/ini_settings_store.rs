use qr_provision::settings_store::{CLIENT_SECTION, IniSettingsStore, SettingsStore};
use qr_provision_core::SettingKey;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn set_creates_missing_file() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let path = temp_dir.path().join("settings.ini");
    let store = IniSettingsStore::new(&path);

    store
        .set(SettingKey::ClientId, "id".to_string())
        .await
        .expect("failed to set client id");

    let ini = ini::Ini::load_from_file(&path).expect("failed to load settings");
    assert_eq!(ini.get_from(Some(CLIENT_SECTION), "client_id"), Some("id"));
}

#[tokio::test]
async fn get_returns_none_for_unset_key() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let store = IniSettingsStore::new(temp_dir.path().join("settings.ini"));

    let value = store
        .get(SettingKey::ServerAddress)
        .await
        .expect("failed to get server address");

    assert_eq!(value, None);
}

#[tokio::test]
async fn set_overwrites_previous_value() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let store = IniSettingsStore::new(temp_dir.path().join("settings.ini"));

    store
        .set(SettingKey::ServerAddress, "old:1".to_string())
        .await
        .unwrap();
    store
        .set(SettingKey::ServerAddress, "new:8443".to_string())
        .await
        .unwrap();

    assert_eq!(
        store.get(SettingKey::ServerAddress).await.unwrap().as_deref(),
        Some("new:8443")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 3)]
async fn concurrent_setters_keep_all_values() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let store = Arc::new(IniSettingsStore::new(temp_dir.path().join("settings.ini")));

    let handles: Vec<_> = SettingKey::ALL
        .into_iter()
        .map(|key| {
            let store = store.clone();
            tokio::spawn(async move { store.set(key, format!("value of {key}")).await })
        })
        .collect();

    for handle in handles {
        handle
            .await
            .expect("setter task panicked")
            .expect("setter failed");
    }

    for key in SettingKey::ALL {
        assert_eq!(
            store.get(key).await.unwrap(),
            Some(format!("value of {key}"))
        );
    }
}

#[tokio::test]
async fn unreadable_file_is_reported() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    // a directory cannot be parsed as settings file
    let store = IniSettingsStore::new(temp_dir.path());

    assert!(store.get(SettingKey::ClientId).await.is_err());
    assert!(
        store
            .set(SettingKey::ClientId, "id".to_string())
            .await
            .is_err()
    );
}
