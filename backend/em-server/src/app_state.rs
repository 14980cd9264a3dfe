use crate::ShutdownCoordinator;
use crate::error::{Result as ServerErrorResult, ServerError};

use em_auth::{AuthError, Claims, JwtAlgorithm, JwtValidator, SessionCookie};
use em_config::{AuthConfig, SiteConfig};
use em_core::Identity;

use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state for every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when auth is disabled: tokens are then trusted unverified
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub session_cookie: SessionCookie,
    pub sign_in_path: String,
    pub site_title: String,
    pub metrics: Option<PrometheusHandle>,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        jwt_validator: Option<Arc<JwtValidator>>,
        auth: &AuthConfig,
        site: &SiteConfig,
    ) -> Self {
        Self {
            pool,
            jwt_validator,
            session_cookie: SessionCookie::new(auth.cookie_name.clone()),
            sign_in_path: auth.sign_in_path.clone(),
            site_title: site.title.clone(),
            metrics: None,
            shutdown: ShutdownCoordinator::new(),
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Build the validator `auth` asks for; `None` when auth is disabled.
    pub fn validator_from_config(
        auth: &AuthConfig,
        config_dir: &Path,
    ) -> ServerErrorResult<Option<Arc<JwtValidator>>> {
        if !auth.enabled {
            log::warn!("Authentication DISABLED - session tokens are accepted without signature checks");
            return Ok(None);
        }

        let algorithm = if let Some(ref secret) = auth.jwt_secret {
            JwtAlgorithm::HS256 {
                secret: secret.as_bytes().to_vec(),
            }
        } else if let Some(key_path) = auth.public_key_path(config_dir) {
            let public_key_pem =
                std::fs::read_to_string(&key_path).map_err(|e| ServerError::JwtKeyFile {
                    path: key_path.display().to_string(),
                    source: e,
                })?;
            JwtAlgorithm::RS256 { public_key_pem }
        } else {
            return Err(ServerError::Config(em_config::ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )));
        };

        let validator = JwtValidator::from_algorithm(&algorithm)?;
        log::info!("JWT: {} authentication enabled", algorithm.name());

        Ok(Some(Arc::new(validator)))
    }

    /// Verify `token` and return its claims.
    #[track_caller]
    pub fn verify_claims(&self, token: &str) -> em_auth::Result<Claims> {
        match &self.jwt_validator {
            Some(validator) => validator.validate(token),
            None => {
                let claims = Claims::peek_unverified(token)?;
                if claims.is_expired_at(Utc::now().timestamp()) {
                    return Err(AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                Ok(claims)
            }
        }
    }

    #[track_caller]
    pub fn verify_token(&self, token: &str) -> em_auth::Result<Identity> {
        self.verify_claims(token).map(Claims::into_identity)
    }
}
