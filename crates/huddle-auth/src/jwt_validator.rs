use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

const CLOCK_SKEW_LEEWAY_SECS: u64 = 30;

/// Verifies bearer tokens from the identity provider and extracts claims.
///
/// Built once at startup from the auth config and shared across requests.
/// Issuer and audience checks are opt-in through the `expect_*` builders;
/// expiry and not-before are always enforced.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

fn base_validation(algorithm: Algorithm) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.leeway = CLOCK_SKEW_LEEWAY_SECS;
    validation
}

impl JwtValidator {
    /// HS256 validator over a shared secret.
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: base_validation(Algorithm::HS256),
            algorithm: Algorithm::HS256,
        }
    }

    /// RS256 validator over a PEM-encoded RSA public key.
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = match DecodingKey::from_rsa_pem(public_key_pem.as_bytes()) {
            Ok(key) => key,
            Err(e) => {
                return Err(AuthError::InvalidToken {
                    message: format!("Invalid RSA public key: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Self {
            decoding_key,
            validation: base_validation(Algorithm::RS256),
            algorithm: Algorithm::RS256,
        })
    }

    /// Require a specific `iss` claim
    pub fn expect_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    /// Require a specific `aud` claim
    pub fn expect_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self
    }

    /// Decode and verify a token, then run the claim-shape checks.
    ///
    /// Expiry gets its own variant so the boundary can tell clients to
    /// re-authenticate; everything else is an opaque decode failure.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        use jsonwebtoken::errors::ErrorKind;

        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                return Err(AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => {
                return Err(AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        claims.validate()?;
        Ok(claims)
    }

    /// Configured algorithm name, for the startup log line.
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
