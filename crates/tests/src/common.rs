use app::auth::Claims;
use app::store::{keys, MemoryStore, SessionStore};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use shared_types::Role;

/// Signing key for fixture tokens. The client-side decoder never verifies
/// signatures, so the value is arbitrary.
const TEST_SECRET: &[u8] = b"fixture-secret";

/// Mint a token carrying `role` that expires an hour from now.
pub fn mint_token(role: &str) -> String {
    mint_token_with_exp(role, (Utc::now() + Duration::hours(1)).timestamp())
}

/// Mint a token carrying `role` with an explicit expiry timestamp.
pub fn mint_token_with_exp(role: &str, exp: i64) -> String {
    let claims = Claims {
        sub: 1,
        role: role.to_string(),
        exp,
        iat: Utc::now().timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("fixture token")
}

/// Mint a token whose payload has no role claim at all.
pub fn mint_token_without_role() -> String {
    #[derive(serde::Serialize)]
    struct RoleLess {
        sub: i64,
        exp: i64,
    }
    encode(
        &Header::default(),
        &RoleLess {
            sub: 1,
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        },
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("fixture token")
}

/// A store seeded the way the login flow leaves it: token plus the
/// lower-cased role mirror.
pub fn logged_in_store(role: Role) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(keys::TOKEN, &mint_token(role.as_str()));
    store.set(keys::ROLE, role.as_str());
    store
}
