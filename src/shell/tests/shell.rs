use qr_provision::{
    Shell,
    config::CameraAccess,
    permission_provider::PolicyPermissionProvider,
    settings_store::{IniSettingsStore, SettingsStore},
};
use qr_provision_core::{
    PERMISSION_DENIED_MESSAGE, INVALID_CODE_PERSISTENT_MESSAGE, PermissionState, SettingKey,
    SubmissionState,
};
use std::path::Path;
use tempfile::TempDir;

async fn run_shell(
    access: CameraAccess,
    transient_notices: bool,
    settings_path: &Path,
    input: &'static str,
) -> qr_provision_core::Model {
    let shell = Shell::new(
        PolicyPermissionProvider::new(access),
        IniSettingsStore::new(settings_path),
        transient_notices,
    );

    shell
        .run(input.as_bytes())
        .await
        .expect("shell run failed")
}

#[tokio::test]
async fn granted_scan_stores_credentials() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let path = temp_dir.path().join("settings.ini");

    let view = run_shell(CameraAccess::Granted, true, &path, "id:secret:host:8443\n").await;

    assert_eq!(view.permission, PermissionState::Granted);
    assert_eq!(view.submission, SubmissionState::Idle);
    assert_eq!(view.error_message, None);

    let store = IniSettingsStore::new(&path);
    assert_eq!(
        store.get(SettingKey::ServerAddress).await.unwrap().as_deref(),
        Some("host:8443")
    );
    assert_eq!(
        store.get(SettingKey::ClientId).await.unwrap().as_deref(),
        Some("id")
    );
    assert_eq!(
        store.get(SettingKey::ClientSecret).await.unwrap().as_deref(),
        Some("secret")
    );
}

#[tokio::test]
async fn prompted_permission_allows_scanning() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let path = temp_dir.path().join("settings.ini");

    let view = run_shell(CameraAccess::Prompt, true, &path, "id:secret:host\n").await;

    assert_eq!(view.permission, PermissionState::Granted);
    assert!(path.exists());
}

#[tokio::test]
async fn blocked_permission_never_reads_scans() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let path = temp_dir.path().join("settings.ini");

    let view = run_shell(CameraAccess::Blocked, true, &path, "id:secret:host\n").await;

    assert_eq!(view.permission, PermissionState::Denied);
    assert_eq!(view.error_message.as_deref(), Some(PERMISSION_DENIED_MESSAGE));
    assert!(!path.exists());
}

#[tokio::test]
async fn declined_prompt_denies() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let path = temp_dir.path().join("settings.ini");

    let view = run_shell(CameraAccess::PromptDenied, true, &path, "id:secret:host\n").await;

    assert_eq!(view.permission, PermissionState::Denied);
    assert!(!path.exists());
}

#[tokio::test]
async fn invalid_scan_stores_nothing() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let path = temp_dir.path().join("settings.ini");

    let view = run_shell(CameraAccess::Granted, false, &path, "id::host\n\n").await;

    assert_eq!(
        view.error_message.as_deref(),
        Some(INVALID_CODE_PERSISTENT_MESSAGE)
    );
    assert_eq!(view.submission, SubmissionState::Idle);
    assert!(!path.exists());
}

#[tokio::test]
async fn valid_scan_after_invalid_one_is_stored() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let path = temp_dir.path().join("settings.ini");

    let view = run_shell(CameraAccess::Granted, true, &path, "garbage\nid:secret:host\n").await;

    assert_eq!(view.error_message, None);
    assert_eq!(
        IniSettingsStore::new(&path)
            .get(SettingKey::ClientId)
            .await
            .unwrap()
            .as_deref(),
        Some("id")
    );
}

#[cfg(feature = "mock")]
mod mocked_store {
    use super::*;
    use qr_provision::settings_store::MockSettingsStore;
    use std::{
        io,
        pin::Pin,
        sync::Arc,
        task::{Context, Poll},
    };
    use tokio::{
        io::{AsyncRead, AsyncReadExt, BufReader, ReadBuf},
        sync::Semaphore,
    };

    /// End of input that opens `gate` for the pending setters once reached
    struct OpenGateAtEof(Arc<Semaphore>);

    impl AsyncRead for OpenGateAtEof {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            self.0.add_permits(SettingKey::ALL.len());
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn scan_during_pending_submission_is_dropped() {
        let gate = Arc::new(Semaphore::new(0));
        let mut store = MockSettingsStore::new();
        let setter_gate = gate.clone();
        store.expect_set().times(3).returning(move |_, _| {
            let gate = setter_gate.clone();
            Box::pin(async move {
                gate.acquire()
                    .await
                    .expect("gate closed")
                    .forget();
                Ok(())
            })
        });

        let shell = Shell::new(
            PolicyPermissionProvider::new(CameraAccess::Granted),
            store,
            true,
        );

        // the second scan is read before the first submission may settle
        let input = "first:secret:host\nsecond:secret:host\n"
            .as_bytes()
            .chain(OpenGateAtEof(gate));

        let view = shell
            .run(BufReader::new(input))
            .await
            .expect("shell run failed");

        assert_eq!(view.submission, SubmissionState::Idle);
        assert_eq!(view.error_message, None);
    }

    #[tokio::test]
    async fn failing_store_leaves_scanner_ready() {
        let mut store = MockSettingsStore::new();
        store
            .expect_set()
            .times(3)
            .returning(|key, _| {
                Box::pin(async move {
                    if key == SettingKey::ClientSecret {
                        anyhow::bail!("failed to write settings: disk full")
                    }
                    Ok(())
                })
            });

        let shell = Shell::new(
            PolicyPermissionProvider::new(CameraAccess::Granted),
            store,
            true,
        );

        let view = shell
            .run("id:secret:host\n".as_bytes())
            .await
            .expect("shell run failed");

        assert_eq!(view.permission, PermissionState::Granted);
        assert_eq!(view.submission, SubmissionState::Idle);
        assert_eq!(view.error_message, None);
    }
}
