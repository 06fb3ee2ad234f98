//! Identity Provider Adapter
//!
//! Verifies HS256 session tokens minted by the external identity provider.

use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AuthSettings;
use crate::domain::IdentityProvider;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user identity)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Resolves identities from signed bearer tokens.
pub struct JwtIdentityProvider {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(secret: &str, issuer: Option<&str>) -> Self {
        let mut validation = Validation::default();
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn from_settings(settings: &AuthSettings) -> Self {
        Self::new(&settings.jwt_secret, settings.issuer.as_deref())
    }
}

impl IdentityProvider for JwtIdentityProvider {
    fn resolve(&self, bearer_token: &str) -> Option<String> {
        match decode::<Claims>(bearer_token, &self.key, &self.validation) {
            Ok(data) if !data.claims.sub.is_empty() => Some(data.claims.sub),
            Ok(_) => {
                debug!("Token has an empty subject");
                None
            }
            Err(e) => {
                match e.kind() {
                    ErrorKind::ExpiredSignature => debug!("Token expired"),
                    _ => debug!(error = %e, "Invalid token"),
                }
                None
            }
        }
    }
}
