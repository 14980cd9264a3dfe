use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_COOKIE_NAME,
    DEFAULT_SIGN_IN_PATH, MIN_JWT_SECRET_LENGTH,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config dir unless absolute
    pub jwt_public_key_path: Option<String>,
    /// Cookie that carries the session token between page loads
    pub cookie_name: String,
    /// Where anonymous visitors are sent to sign in
    pub sign_in_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            sign_in_path: String::from(DEFAULT_SIGN_IN_PATH),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        self.validate_cookie_name()?;

        if !self.sign_in_path.starts_with('/') || self.sign_in_path.starts_with("//") {
            return Err(ConfigError::auth(format!(
                "auth.sign_in_path must be a local path starting with '/', got '{}'",
                self.sign_in_path
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(secret), _) => {
                if secret.len() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
            }
            (None, Some(_)) => {
                let key_path = self.public_key_path(config_dir).ok_or_else(|| {
                    ConfigError::auth("auth.jwt_public_key_path cannot be empty")
                })?;
                if !key_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        key_path.display()
                    )));
                }
            }
            (None, None) => {
                return Err(ConfigError::auth(
                    "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
                ));
            }
        }

        Ok(())
    }

    /// Absolute location of the RS256 public key, if configured.
    pub fn public_key_path(&self, config_dir: &Path) -> Option<PathBuf> {
        let raw = self.jwt_public_key_path.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let path = Path::new(raw);
        Some(if path.is_absolute() {
            path.to_path_buf()
        } else {
            config_dir.join(path)
        })
    }

    /// Algorithm name for logging; never the key material.
    pub fn algorithm_label(&self) -> &'static str {
        if self.jwt_secret.is_some() {
            "HS256"
        } else if self.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        }
    }

    fn validate_cookie_name(&self) -> ConfigErrorResult<()> {
        let valid = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ConfigError::auth(format!(
                "auth.cookie_name must be non-empty ASCII letters, digits, '_' or '-', got '{}'",
                self.cookie_name
            )));
        }
        Ok(())
    }
}
