use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::models::Identity;
use crate::state::StateStore;
use crate::types::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub role: Role,
    pub tenant: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn for_identity(identity: &Identity) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            sub: identity.id,
            name: identity.name.clone(),
            role: identity.role,
            tenant: identity.tenant.clone(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("JWT secret not configured")]
    MissingSecret,
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid JWT token: {0}")]
    TokenValidation(String),
}

pub fn generate_token(claims: &Claims) -> Result<String, AuthError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

pub fn validate_token(token: &str) -> Result<Claims, AuthError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| AuthError::TokenValidation(e.to_string()))?;

    Ok(token_data.claims)
}

/// The fixed identity behind each demo role
pub fn demo_identity(role: Role) -> Identity {
    match role {
        Role::SuperAdmin => Identity {
            id: Uuid::from_u128(0x8c2f1a4e_9d3b_4f62_a517_0b64c9e2d801),
            name: "Avery Stone".to_string(),
            email: "avery@platform-gateway.test".to_string(),
            role,
            tenant: None,
        },
        Role::TenantOwner => Identity {
            id: Uuid::from_u128(0x3b7d9c15_62e8_4a0f_bd24_7f19a8e35c42),
            name: "Jordan Reyes".to_string(),
            email: "jordan@acme-robotics.test".to_string(),
            role,
            tenant: Some("Acme Robotics".to_string()),
        },
        Role::User => Identity {
            id: Uuid::from_u128(0xd40a6e83_17f5_4b9c_8e61_2c95b0d47a13),
            name: "Sam Okafor".to_string(),
            email: "sam@acme-robotics.test".to_string(),
            role,
            tenant: Some("Acme Robotics".to_string()),
        },
    }
}

/// Auto-login: make sure the store carries a valid token for the active role.
/// Re-mints when the token is missing, expired, or minted for another role.
pub async fn ensure_demo_session(store: &StateStore) -> Result<Identity, AuthError> {
    let role = store.demo_role().await;
    let identity = demo_identity(role);

    let needs_mint = match store.auth_token().await {
        Some(token) => match validate_token(&token) {
            Ok(claims) => claims.role != role,
            Err(e) => {
                tracing::debug!("stored demo token rejected, re-minting: {}", e);
                true
            }
        },
        None => true,
    };

    if needs_mint {
        let token = generate_token(&Claims::for_identity(&identity))?;
        store.set_auth_token(Some(token)).await;
        tracing::info!("auto-logged-in as {} ({})", identity.name, role);
    }

    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ClientState, StateStore};

    #[test]
    fn token_round_trips_for_each_role() {
        for role in Role::ALL {
            let identity = demo_identity(*role);
            let token = generate_token(&Claims::for_identity(&identity)).unwrap();
            let claims = validate_token(&token).unwrap();
            assert_eq!(claims.sub, identity.id);
            assert_eq!(claims.role, *role);
        }
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            validate_token("not-a-token"),
            Err(AuthError::TokenValidation(_))
        ));
    }

    #[tokio::test]
    async fn ensure_demo_session_mints_and_keeps_token() {
        let store = StateStore::in_memory(ClientState::default());
        assert!(store.auth_token().await.is_none());

        ensure_demo_session(&store).await.unwrap();
        let minted = store.auth_token().await.unwrap();

        // Second call keeps the still-valid token
        ensure_demo_session(&store).await.unwrap();
        assert_eq!(store.auth_token().await.unwrap(), minted);
    }

    #[tokio::test]
    async fn role_switch_re_mints_the_token() {
        let store = StateStore::in_memory(ClientState::default());
        ensure_demo_session(&store).await.unwrap();
        let first = store.auth_token().await.unwrap();

        store.set_demo_role(Role::User).await;
        let identity = ensure_demo_session(&store).await.unwrap();
        assert_eq!(identity.role, Role::User);
        assert_ne!(store.auth_token().await.unwrap(), first);
    }
}
