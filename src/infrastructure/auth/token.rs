//! User tokens configured as SHA-256 digests
//!
//! Secrets never appear in configuration; only their hex digest does. An
//! incoming token is hashed and looked up by digest.

use std::collections::{HashMap, HashSet};

use sha2::{Digest, Sha256};

use crate::config::TokenConfig;
use crate::domain::{DomainError, GlobalPermission};

/// A user resolved from a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    login: String,
    permissions: HashSet<GlobalPermission>,
}

impl AuthenticatedUser {
    pub fn new(login: impl Into<String>, permissions: impl IntoIterator<Item = GlobalPermission>) -> Self {
        Self {
            login: login.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn has_permission(&self, permission: GlobalPermission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// Hex SHA-256 of a token, as expected in `auth.tokens[].token_sha256`
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Resolves tokens to users
#[derive(Debug, Clone, Default)]
pub struct TokenAuthenticator {
    users_by_digest: HashMap<String, AuthenticatedUser>,
}

impl TokenAuthenticator {
    pub fn new(tokens: &[TokenConfig]) -> Result<Self, DomainError> {
        let mut users_by_digest = HashMap::new();

        for token in tokens {
            let digest = token.token_sha256.trim().to_lowercase();

            let valid_digest = hex::decode(&digest).is_ok_and(|bytes| bytes.len() == 32);
            if !valid_digest {
                return Err(DomainError::configuration(format!(
                    "Token for '{}' is not a hex SHA-256 digest",
                    token.login
                )));
            }

            let user = AuthenticatedUser::new(token.login.clone(), token.permissions.iter().copied());
            if users_by_digest.insert(digest, user).is_some() {
                return Err(DomainError::configuration(format!(
                    "Token for '{}' is configured more than once",
                    token.login
                )));
            }
        }

        Ok(Self { users_by_digest })
    }

    pub fn authenticate(&self, token: &str) -> Option<&AuthenticatedUser> {
        self.users_by_digest.get(&hash_token(token))
    }

    pub fn len(&self) -> usize {
        self.users_by_digest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users_by_digest.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_config(login: &str, secret: &str, permissions: Vec<GlobalPermission>) -> TokenConfig {
        TokenConfig {
            login: login.to_string(),
            token_sha256: hash_token(secret),
            permissions,
        }
    }

    #[test]
    fn test_hash_token_is_hex_sha256() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_authenticate_known_token() {
        let authenticator = TokenAuthenticator::new(&[token_config(
            "admin",
            "s3cret",
            vec![GlobalPermission::SystemAdmin],
        )])
        .unwrap();

        let user = authenticator.authenticate("s3cret").unwrap();
        assert_eq!(user.login(), "admin");
        assert!(user.has_permission(GlobalPermission::SystemAdmin));
        assert!(!user.has_permission(GlobalPermission::Scan));
    }

    #[test]
    fn test_authenticate_unknown_token() {
        let authenticator =
            TokenAuthenticator::new(&[token_config("admin", "s3cret", vec![])]).unwrap();

        assert!(authenticator.authenticate("wrong").is_none());
    }

    #[test]
    fn test_uppercase_digest_accepted() {
        let mut config = token_config("admin", "s3cret", vec![]);
        config.token_sha256 = config.token_sha256.to_uppercase();

        let authenticator = TokenAuthenticator::new(&[config]).unwrap();
        assert!(authenticator.authenticate("s3cret").is_some());
    }

    #[test]
    fn test_invalid_digest_rejected() {
        let mut config = token_config("admin", "s3cret", vec![]);
        config.token_sha256 = "not-a-digest".to_string();

        assert!(matches!(
            TokenAuthenticator::new(&[config]),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let result = TokenAuthenticator::new(&[
            token_config("a", "same", vec![]),
            token_config("b", "same", vec![]),
        ]);

        assert!(result.is_err());
    }
}
