pub mod auth_change;
pub mod auth_service;
pub mod auth_subscription;
pub mod http_auth_service;
