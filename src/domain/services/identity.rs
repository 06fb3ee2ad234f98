//! Identity provider contract.

/// Resolves the caller's identity from the credential presented with a request.
///
/// The provider itself (sign-in, sessions, token minting) lives outside this
/// service; implementations only verify what they are handed.
pub trait IdentityProvider: Send + Sync {
    /// Returns the identity for a bearer credential, or `None` when the
    /// credential is missing, expired or forged.
    fn resolve(&self, bearer_token: &str) -> Option<String>;
}
