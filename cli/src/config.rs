use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

pub struct Config {
    pub db_path: PathBuf,
    pub data_dir: PathBuf,
}

/// Edamam API access: application id/key pair plus the account user sent in
/// the `Edamam-Account-User` header.
#[derive(Debug, Clone, Deserialize)]
pub struct EdamamCredentials {
    pub app_id: String,
    pub app_key: String,
    pub account_user: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from("", "", "nosh").context("Could not determine home directory")?;

        let data_dir = proj_dirs.data_dir().to_path_buf();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let db_path = data_dir.join("nosh.db");

        Ok(Config { db_path, data_dir })
    }

    /// Load Edamam credentials from the environment, falling back to
    /// `credentials.json` in the data directory.
    pub fn load_credentials(&self) -> Result<EdamamCredentials> {
        if let (Ok(app_id), Ok(app_key), Ok(account_user)) = (
            std::env::var("EDAMAM_APP_ID"),
            std::env::var("EDAMAM_APP_KEY"),
            std::env::var("EDAMAM_ACCOUNT_USER"),
        ) {
            return Ok(EdamamCredentials {
                app_id,
                app_key,
                account_user,
            });
        }

        let path = self.data_dir.join("credentials.json");
        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("Invalid credentials file: {}", path.display()));
        }

        bail!(
            "No Edamam credentials found. Set EDAMAM_APP_ID, EDAMAM_APP_KEY and \
             EDAMAM_ACCOUNT_USER, or create {} with fields app_id, app_key, account_user",
            path.display()
        )
    }
}
