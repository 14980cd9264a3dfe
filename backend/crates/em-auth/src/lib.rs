pub mod claims;
pub mod error;
pub mod jwt_algorithm;
pub mod jwt_validator;
pub mod session_cookie;
pub mod token_source;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_validator::JwtValidator;
pub use session_cookie::SessionCookie;
pub use token_source::{bearer_token, cookie_value, request_token};

#[cfg(test)]
mod tests;
