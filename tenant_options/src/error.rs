//! Erreurs des chemins stricts (parsing strict, configuration).
//!
//! Les extracteurs eux-mêmes ne renvoient jamais d'erreur.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenantOptionsError {
    /// Jeton final sans partenaire dans la valeur du cookie de session.
    #[error("unpaired token {token:?} at position {position} in session cookie")]
    UnpairedToken { token: String, position: usize },

    #[error("invalid cookie name {0:?}")]
    InvalidCookieName(String),

    #[error("invalid tenant cookie config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TenantOptionsError>;
