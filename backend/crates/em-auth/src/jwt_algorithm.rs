/// Key material for verifying session tokens
#[derive(Debug, Clone)]
pub enum JwtAlgorithm {
    /// Shared secret of the hosted auth project
    HS256 { secret: Vec<u8> },
    /// PEM public key, for projects that sign with asymmetric keys
    RS256 { public_key_pem: String },
}

impl JwtAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HS256 { .. } => "HS256",
            Self::RS256 { .. } => "RS256",
        }
    }
}
