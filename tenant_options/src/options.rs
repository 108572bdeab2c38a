//! Instantané des tenants visibles par la console : liste + tenant courant.

use serde::Serialize;

use crate::config::TenantCookieConfig;
use crate::jar::CookieJar;
use crate::session::SessionCookie;
use crate::tenant::{current_tenant_from_jar, TenantId};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TenantOptions {
    pub tenants: Vec<TenantId>,
    pub current: Option<TenantId>,
}

impl TenantOptions {
    pub fn from_jar(jar: &CookieJar<'_>, config: &TenantCookieConfig) -> Self {
        let tenants = SessionCookie::from_jar(jar, &config.session_cookie)
            .map(SessionCookie::into_tenant_ids)
            .unwrap_or_default();
        let current = current_tenant_from_jar(jar, &config.tenant_cookie);
        Self { tenants, current }
    }

    pub fn from_cookies(cookies: &str, config: &TenantCookieConfig) -> Self {
        Self::from_jar(&CookieJar::new(cookies), config)
    }

    /// Le sélecteur de tenant n'a de sens qu'à partir de deux tenants.
    pub fn is_multi_tenant(&self) -> bool {
        self.tenants.len() > 1
    }

    /// Tenant courant, sinon le premier de la liste.
    pub fn selected(&self) -> Option<&TenantId> {
        self.current.as_ref().or_else(|| self.tenants.first())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tenants.iter().any(|tenant| tenant == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cookies_default_names() {
        let options = TenantOptions::from_cookies(
            "tenant=app; session=1,system&2,app",
            &TenantCookieConfig::default(),
        );
        assert_eq!(options.tenants, vec![TenantId::from("system"), TenantId::from("app")]);
        assert_eq!(options.current, Some(TenantId::from("app")));
        assert!(options.is_multi_tenant());
        assert!(options.contains("system"));
        assert!(!options.contains("other"));
    }

    #[test]
    fn test_selected_falls_back_to_first_tenant() {
        let options =
            TenantOptions::from_cookies("session=1,system&2,app", &TenantCookieConfig::default());
        assert_eq!(options.current, None);
        assert_eq!(options.selected(), Some(&TenantId::from("system")));
    }

    #[test]
    fn test_empty_cookies() {
        let options = TenantOptions::from_cookies("", &TenantCookieConfig::default());
        assert_eq!(options, TenantOptions::default());
        assert_eq!(options.selected(), None);
        assert!(!options.is_multi_tenant());
    }

    #[test]
    fn test_custom_cookie_names() {
        let config = TenantCookieConfig {
            session_cookie: "crdb_session".into(),
            tenant_cookie: "crdb_tenant".into(),
        };
        let options = TenantOptions::from_cookies(
            "session=x,ignored; crdb_session=m,t1; tenant=no; crdb_tenant=t1",
            &config,
        );
        assert_eq!(options.tenants, vec![TenantId::from("t1")]);
        assert_eq!(options.current, Some(TenantId::from("t1")));
        assert!(!options.is_multi_tenant());
    }

    #[test]
    fn test_serialized_shape() {
        let options = TenantOptions::from_cookies(
            "tenant=t2; session=a,t1,b,t2",
            &TenantCookieConfig::default(),
        );
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "tenants": ["t1", "t2"], "current": "t2" })
        );
    }
}
