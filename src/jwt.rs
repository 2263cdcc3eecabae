use chrono::{Duration, Utc};
use entity::users::Role;
use jsonwebtoken::{errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: Uuid, role: Role, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user,
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    #[inline]
    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }
}

/// HS256 signer and verifier for bearer tokens.
#[derive(Clone)]
pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Jwt {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn get_claims(&self, token: &str) -> Result<Claims, JwtError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }
}

impl std::fmt::Debug for Jwt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Jwt").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let jwt = Jwt::new(b"secret");
        let claims = Claims::new(Uuid::new_v4(), Role::Teacher, Duration::days(1));

        let token = jwt.encode(&claims).unwrap();
        let decoded = jwt.get_claims(&token).unwrap();

        assert_eq!(decoded, claims);
        assert!(decoded.is_teacher());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let claims = Claims::new(Uuid::new_v4(), Role::Student, Duration::days(1));
        let token = Jwt::new(b"other").encode(&claims).unwrap();

        assert!(Jwt::new(b"secret").get_claims(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = Jwt::new(b"secret");
        let claims = Claims::new(Uuid::new_v4(), Role::Student, Duration::days(-1));
        let token = jwt.encode(&claims).unwrap();

        assert!(jwt.get_claims(&token).is_err());
    }
}
