//! Session token issuance.
//!
//! Tokens are HS256 JWTs signed with a single process-wide secret taken
//! from configuration. The service keeps no record of issued tokens;
//! anyone holding the secret can verify signature and expiry offline.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::directory::Account;

/// Issuer claim carried by every token.
pub const TOKEN_ISSUER: &str = "auth.transmi";
/// Header `typ` value marking the token format.
pub const TOKEN_TYPE: &str = "JWS";
/// Validity window, also reported as `expires_in` on registration.
pub const TOKEN_TTL_SECS: i64 = 86_400;

/// Claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    /// Account id rendered as a string.
    pub user_id: String,
    pub username: String,
    /// Expiry, Unix timestamp in seconds.
    pub exp: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("token signing or validation failed: {0}")]
pub struct TokenError(#[from] jsonwebtoken::errors::Error);

/// Signs and verifies session tokens with the shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Mint a token asserting the account's identity, valid for 24 hours.
    pub fn issue(&self, account: &Account) -> Result<String, TokenError> {
        let exp = (Utc::now() + Duration::seconds(TOKEN_TTL_SECS)).timestamp() as usize;
        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            user_id: account.id.to_string(),
            username: account.username.clone(),
            exp,
        };

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some(TOKEN_TYPE.to_string());

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Validate signature, expiry, and issuer, returning the claims.
    ///
    /// No endpoint consumes tokens today; this exists so holders of the
    /// shared secret can check what the service hands out.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: 1,
            username: "alice".to_string(),
            secret: "pw1".to_string(),
        }
    }

    #[test]
    fn issued_claims_carry_identity_and_expiry() {
        let issuer = TokenIssuer::new("test-secret".to_string());
        let before = Utc::now().timestamp();

        let token = issuer.issue(&account()).expect("issue");
        let claims = issuer.verify(&token).expect("verify");

        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.user_id, "1");
        assert_eq!(claims.username, "alice");

        let expected = before + TOKEN_TTL_SECS;
        let drift = claims.exp as i64 - expected;
        assert!(
            (0..=5).contains(&drift),
            "exp should be 24h out, drift was {drift}s"
        );
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let issuer = TokenIssuer::new("test-secret".to_string());
        let token = issuer.issue(&account()).expect("issue");

        let other = TokenIssuer::new("different-secret".to_string());
        assert!(other.verify(&token).is_err());
    }
}
