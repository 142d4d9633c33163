use anyhow::{Context, Result, bail};
use std::{env, path::PathBuf, str::FromStr, sync::OnceLock};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Credential settings file
    pub settings: SettingsConfig,

    /// Camera permission behavior of the platform
    pub camera: CameraConfig,

    /// Notice presentation capabilities of the platform
    pub notices: NoticeConfig,
}

#[derive(Clone, Debug)]
pub struct SettingsConfig {
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug)]
pub struct CameraConfig {
    pub access: CameraAccess,
}

#[derive(Clone, Copy, Debug)]
pub struct NoticeConfig {
    pub transient: bool,
}

/// How the platform answers camera permission queries and requests
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraAccess {
    /// Already granted
    Granted,
    /// Not granted yet, a request grants it
    Prompt,
    /// Not granted yet, a request is declined
    PromptDenied,
    /// Not granted and the user cannot be asked again
    Blocked,
}

impl FromStr for CameraAccess {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "prompt" => Ok(Self::Prompt),
            "prompt-denied" => Ok(Self::PromptDenied),
            "blocked" => Ok(Self::Blocked),
            other => bail!(
                "unknown camera permission '{other}' (expected granted, prompt, prompt-denied or blocked)"
            ),
        }
    }
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables.
    ///
    /// # Panics
    /// Panics if configuration loading fails. The shell cannot run without
    /// valid configuration.
    pub fn get() -> &'static Self {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        APP_CONFIG.get_or_init(|| {
            Self::load_internal().expect("failed to load application configuration")
        })
    }

    fn load_internal() -> Result<Self> {
        let settings = SettingsConfig::load();
        let camera = CameraConfig::load()?;
        let notices = NoticeConfig::load()?;

        Ok(Self {
            settings,
            camera,
            notices,
        })
    }
}

impl SettingsConfig {
    fn load() -> Self {
        let path = env::var("SETTINGS_PATH").unwrap_or_else(|_| "settings.ini".to_string());

        Self {
            path: PathBuf::from(path),
        }
    }
}

impl CameraConfig {
    fn load() -> Result<Self> {
        let access = env::var("CAMERA_PERMISSION")
            .unwrap_or_else(|_| "prompt".to_string())
            .parse::<CameraAccess>()
            .context("failed to parse CAMERA_PERMISSION")?;

        Ok(Self { access })
    }
}

impl NoticeConfig {
    fn load() -> Result<Self> {
        let transient = parse_bool(
            &env::var("TRANSIENT_NOTICES").unwrap_or_else(|_| "true".to_string()),
        )
        .context("failed to parse TRANSIENT_NOTICES")?;

        Ok(Self { transient })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_access_parses_known_values() {
        assert_eq!("granted".parse::<CameraAccess>().unwrap(), CameraAccess::Granted);
        assert_eq!("Prompt".parse::<CameraAccess>().unwrap(), CameraAccess::Prompt);
        assert_eq!(
            " prompt-denied ".parse::<CameraAccess>().unwrap(),
            CameraAccess::PromptDenied
        );
        assert_eq!("BLOCKED".parse::<CameraAccess>().unwrap(), CameraAccess::Blocked);
    }

    #[test]
    fn camera_access_rejects_unknown_values() {
        let err = "maybe".parse::<CameraAccess>().unwrap_err();
        assert!(err.to_string().contains("unknown camera permission 'maybe'"));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for value in ["1", "true", "YES", "on"] {
            assert!(parse_bool(value).unwrap(), "{value} should be true");
        }
        for value in ["0", "false", "No", "off"] {
            assert!(!parse_bool(value).unwrap(), "{value} should be false");
        }
        assert!(parse_bool("sometimes").is_err());
    }
}
