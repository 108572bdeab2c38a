//! Noms des cookies lus par la console.

use serde::Deserialize;

use crate::error::{Result, TenantOptionsError};

pub const DEFAULT_SESSION_COOKIE: &str = "session";
pub const DEFAULT_TENANT_COOKIE: &str = "tenant";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TenantCookieConfig {
    /// Cookie portant les paires (label, tenant).
    pub session_cookie: String,
    /// Cookie portant le tenant sélectionné.
    pub tenant_cookie: String,
}

impl Default for TenantCookieConfig {
    fn default() -> Self {
        Self {
            session_cookie: DEFAULT_SESSION_COOKIE.to_owned(),
            tenant_cookie: DEFAULT_TENANT_COOKIE.to_owned(),
        }
    }
}

impl TenantCookieConfig {
    /// Charge une config JSON ; les champs absents gardent leur valeur par défaut.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_name(&self.session_cookie)?;
        check_name(&self.tenant_cookie)
    }
}

fn check_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.contains(|c: char| c == '=' || c == ';' || c.is_whitespace());
    if invalid {
        return Err(TenantOptionsError::InvalidCookieName(name.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = TenantCookieConfig::default();
        assert_eq!(config.session_cookie, "session");
        assert_eq!(config.tenant_cookie, "tenant");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = TenantCookieConfig::from_json(r#"{"tenant_cookie": "crdb_tenant"}"#)
            .expect("valid config");
        assert_eq!(config.session_cookie, "session");
        assert_eq!(config.tenant_cookie, "crdb_tenant");
    }

    #[test]
    fn test_from_json_rejects_bad_names() {
        for raw in [
            r#"{"session_cookie": ""}"#,
            r#"{"session_cookie": "a=b"}"#,
            r#"{"tenant_cookie": "a;b"}"#,
            r#"{"tenant_cookie": "a b"}"#,
        ] {
            let err = TenantCookieConfig::from_json(raw).unwrap_err();
            assert!(
                matches!(err, TenantOptionsError::InvalidCookieName(_)),
                "unexpected error for {raw}: {err:?}"
            );
        }
    }

    #[test]
    fn test_from_json_malformed() {
        let err = TenantCookieConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, TenantOptionsError::Config(_)));
    }
}
