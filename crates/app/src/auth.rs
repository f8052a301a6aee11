use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_types::Role;

/// JWT claims issued by the HR backend at login.
///
/// The client never holds the signing key, so only the claim payload is
/// inspected here; signature verification happens server-side on every API
/// call. Expiry is still enforced locally so a stale token fails fast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Employee id.
    pub sub: i64,
    pub role: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
}

/// Why a stored credential could not be used.
///
/// Both variants end the session the same way (token discarded, back through
/// login); they are distinguished so logs and notices can name the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    Expired,
    Malformed(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Expired => write!(f, "credential expired"),
            CredentialError::Malformed(reason) => write!(f, "malformed credential: {}", reason),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Decode the claim payload of `token`.
pub fn decode_claims(token: &str) -> Result<Claims, CredentialError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Claim extraction only; there is no key on the client to verify with.
    validation.insecure_disable_signature_validation();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => CredentialError::Expired,
            _ => CredentialError::Malformed(err.to_string()),
        })
}

/// Extract the role from `token`.
///
/// A token whose claims cannot be decoded is an error; a token that decodes
/// cleanly but carries an unrecognized role string is NOT — it normalizes to
/// [`Role::Unknown`] and fails authorization downstream instead.
pub fn decode_role(token: &str) -> Result<Role, CredentialError> {
    let claims = decode_claims(token)?;
    Ok(Role::from_str_or_default(&claims.role))
}
