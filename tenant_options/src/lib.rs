//! Options de tenant lues dans les cookies de la console d'administration.
//!
//! Deux valeurs sont extraites d'une chaîne `document.cookie` passée en
//! paramètre : la liste des tenants (cookie `session`) et le tenant courant
//! (cookie `tenant`). Aucune fonction ne lit l'environnement elle-même.

pub mod config;
pub mod error;
pub mod jar;
pub mod options;
pub mod session;
pub mod tenant;

pub use config::TenantCookieConfig;
pub use error::{Result, TenantOptionsError};
pub use jar::CookieJar;
pub use options::TenantOptions;
pub use session::{tenants_from_cookies, SessionCookie, SessionPair};
pub use tenant::{current_tenant_from_cookies, TenantId};
