//! Identifiant de tenant et lecture du cookie `tenant`.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TENANT_COOKIE;
use crate::jar::CookieJar;

/// Identifiant opaque d'un tenant ; aucun format n'est vérifié.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for TenantId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TenantId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Tenant courant lu dans le cookie `name`, valeur reprise telle quelle.
pub fn current_tenant_from_jar(jar: &CookieJar<'_>, name: &str) -> Option<TenantId> {
    let value = jar.find(name);
    if value.is_none() {
        debug!("no {name} cookie, no current tenant");
    }
    value.map(TenantId::from)
}

/// Tenant courant d'après le cookie `tenant`.
pub fn current_tenant_from_cookies(cookies: &str) -> Option<TenantId> {
    current_tenant_from_jar(&CookieJar::new(cookies), DEFAULT_TENANT_COOKIE)
}
