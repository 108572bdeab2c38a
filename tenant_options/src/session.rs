//! Cookie `session` : suite de paires `label,tenant` séparées par `,` ou `&`.
//!
//! Exemple : `session=1234,system&5678,app` donne les tenants `system` et `app`.

use log::{debug, warn};

use crate::config::DEFAULT_SESSION_COOKIE;
use crate::error::{Result, TenantOptionsError};
use crate::jar::CookieJar;
use crate::tenant::TenantId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionPair {
    pub label: String,
    pub tenant_id: TenantId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCookie {
    pairs: Vec<SessionPair>,
    unpaired: Option<String>,
}

impl SessionCookie {
    /// Parsing tolérant : un jeton final sans partenaire est conservé à part
    /// et n'apparaît pas dans les tenants.
    pub fn parse(value: &str) -> Self {
        let cookie = Self::split_pairs(value);
        if let Some(token) = &cookie.unpaired {
            warn!(
                "session cookie: dropping unpaired token {token:?} at position {}",
                cookie.pairs.len() * 2
            );
        }
        cookie
    }

    /// Comme [`SessionCookie::parse`], mais un jeton sans partenaire est une erreur.
    pub fn parse_strict(value: &str) -> Result<Self> {
        let cookie = Self::split_pairs(value);
        match cookie.unpaired {
            Some(token) => Err(TenantOptionsError::UnpairedToken {
                token,
                position: cookie.pairs.len() * 2,
            }),
            None => Ok(cookie),
        }
    }

    pub fn from_jar(jar: &CookieJar<'_>, name: &str) -> Option<Self> {
        let value = jar.find(name);
        if value.is_none() {
            debug!("no {name} cookie, no tenant list");
        }
        value.map(Self::parse)
    }

    pub fn from_cookies(cookies: &str) -> Option<Self> {
        Self::from_jar(&CookieJar::new(cookies), DEFAULT_SESSION_COOKIE)
    }

    pub fn pairs(&self) -> &[SessionPair] {
        &self.pairs
    }

    pub fn unpaired(&self) -> Option<&str> {
        self.unpaired.as_deref()
    }

    pub fn tenant_ids(&self) -> impl Iterator<Item = &TenantId> + '_ {
        self.pairs.iter().map(|pair| &pair.tenant_id)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|pair| pair.label.as_str())
    }

    pub fn into_tenant_ids(self) -> Vec<TenantId> {
        self.pairs.into_iter().map(|pair| pair.tenant_id).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn split_pairs(value: &str) -> Self {
        // valeur vide : aucun jeton, rien à signaler
        if value.is_empty() {
            return Self::default();
        }

        let mut tokens = value.split([',', '&']);
        let mut pairs = Vec::new();
        let mut unpaired = None;
        while let Some(label) = tokens.next() {
            match tokens.next() {
                Some(id) => pairs.push(SessionPair {
                    label: label.to_owned(),
                    tenant_id: TenantId::from(id),
                }),
                None => unpaired = Some(label.to_owned()),
            }
        }
        Self { pairs, unpaired }
    }
}

/// Tenants listés dans le cookie `session`, dans l'ordre ; vide si le cookie manque.
pub fn tenants_from_cookies(cookies: &str) -> Vec<TenantId> {
    SessionCookie::from_cookies(cookies)
        .map(SessionCookie::into_tenant_ids)
        .unwrap_or_default()
}
