//! Saved panel credentials (`ptero login` / `ptero logout`).
//!
//! Stored as YAML under the user's config directory, readable by the
//! owner only on unix.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub url: String,
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<config_dir>/ptero/credentials.yaml`, or `./.ptero-credentials.yaml`
    /// when the platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("ptero").join("credentials.yaml"))
            .unwrap_or_else(|| PathBuf::from(".ptero-credentials.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Credentials>, String> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read {}: {}", self.path.display(), e))?;
        let credentials = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", self.path.display(), e))?;
        Ok(Some(credentials))
    }

    pub fn save(&self, credentials: &Credentials) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
            }
        }
        let content = serde_yaml::to_string(credentials)
            .map_err(|e| format!("Failed to serialize credentials: {}", e))?;
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))?;
        restrict_permissions(&self.path)?;

        tracing::info!(path = %self.path.display(), "Saved credentials");
        Ok(())
    }

    /// Returns whether a file was removed.
    pub fn remove(&self) -> Result<bool, String> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .map_err(|e| format!("Failed to remove {}: {}", self.path.display(), e))?;
        tracing::info!(path = %self.path.display(), "Removed credentials");
        Ok(true)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), String> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| format!("Failed to restrict permissions on {}: {}", path.display(), e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), String> {
    Ok(())
}
