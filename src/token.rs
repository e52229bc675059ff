//! The expiring access token and its allow-list check.
//!
//! The token is a base64-encoded JSON payload `{name, exp}` with a fixed
//! 24 hour lifetime. It is reversible and unsigned: an obfuscation-grade
//! credential for casually gating non-sensitive content, NOT a security
//! boundary. A holder can forge any payload, including the expiry.
//! Anything needing real access control must replace this with a signed
//! claim format.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::FamilyData;
use crate::settings::{AuthMode, Settings};

/// Token lifetime: 24 hours in milliseconds.
pub const TOKEN_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// The claims carried by a token. `exp` is a unix epoch in milliseconds.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub name: String,
    pub exp: i64,
}

/// Issue a token for the given name, expiring [`TOKEN_TTL_MS`] from now.
pub fn issue_token(name: &str) -> String {
    issue_token_at(name, Utc::now().timestamp_millis())
}

/// Issue with an explicit issuance time, so expiry is testable.
pub fn issue_token_at(name: &str, now_ms: i64) -> String {
    let claims = TokenClaims {
        name: name.to_string(),
        exp: now_ms + TOKEN_TTL_MS,
    };
    // Serializing this shape cannot fail.
    let payload = serde_json::to_string(&claims).unwrap_or_default();
    STANDARD.encode(payload)
}

/// Decode a token back to its claims. Any decode or parse failure yields
/// `None`; callers treat that uniformly as "unauthenticated".
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let bytes = STANDARD.decode(token).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// A token is valid iff it decodes and the current time is strictly
/// before its expiry. Malformed, forged-but-expired and expired tokens
/// are indistinguishable to the caller.
pub fn verify_token(token: &str) -> bool {
    verify_token_at(token, Utc::now().timestamp_millis())
}

/// Verify against an explicit clock.
pub fn verify_token_at(token: &str, now_ms: i64) -> bool {
    decode_claims(token).is_some_and(|claims| now_ms < claims.exp)
}

/// The login allow-list check, selected by the configured auth mode:
/// `specific` admits exactly the one configured name, `all` admits any
/// name appearing in the dataset (exact equality, not fuzzy).
pub fn name_is_allowed(name: &str, settings: &Settings, data: &FamilyData) -> bool {
    match settings.auth_mode {
        AuthMode::Specific => name == settings.specific_name,
        AuthMode::All => data.people().any(|person| person.name == name),
    }
}
