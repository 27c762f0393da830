use crate::domain::model::Identity;
use crate::domain::ports::CallerVerifier;
use crate::utils::error::{NumerologyError, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// 由登入服務簽發的 HS256 權杖內容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: u64,
}

impl Claims {
    /// 依 userId → mobileNumber → googleId → sub 的順序取主體
    pub fn subject(&self) -> Option<String> {
        self.user_id
            .map(|id| id.to_string())
            .or_else(|| self.mobile_number.clone())
            .or_else(|| self.google_id.clone())
            .or_else(|| self.sub.clone())
            .filter(|s| !s.is_empty())
    }
}

/// 驗證 `Authorization: Bearer <token>`
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl CallerVerifier for JwtVerifier {
    fn verify_caller(&self, authorization: Option<&str>) -> Result<Identity> {
        let token = authorization
            .map(|value| value.trim())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| NumerologyError::unauthenticated("No authentication token, access denied"))?;

        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            NumerologyError::unauthenticated("Token verification failed, authorization denied")
        })?;

        data.claims
            .subject()
            .map(Identity::new)
            .ok_or_else(|| NumerologyError::unauthenticated("Token does not identify a caller"))
    }
}
