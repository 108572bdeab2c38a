//! Helpers navigateur (cookies, logs).

pub mod logger;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Renvoie la chaîne complète des cookies, relue à chaque appel.
/// `None` hors d'un document HTML.
pub fn get_cookies() -> Option<String> {
    let document = window()?.document()?;
    let html_doc = document.dyn_into::<HtmlDocument>().ok()?;
    match html_doc.cookie() {
        Ok(cookies) => Some(cookies),
        Err(e) => {
            debug!("document.cookie illisible : {e:?}");
            None
        }
    }
}
