use log::info;
use tenant_options::{TenantCookieConfig, TenantOptions};
use yew::prelude::*;

use crate::utils::get_cookies;

/* ---------------- contexte partagé ----------------- */
#[derive(Clone, PartialEq)]
pub struct TenantOptionsContext {
    pub options: TenantOptions,
    /// Relit `document.cookie` et met à jour `options`.
    pub refresh: Callback<()>,
}

/// Lecture à l'instant T ; aucune mise en cache.
pub fn read_tenant_options(config: &TenantCookieConfig) -> TenantOptions {
    let cookies = get_cookies().unwrap_or_default();
    let options = TenantOptions::from_cookies(&cookies, config);
    info!(
        "tenants lus depuis les cookies : {} (courant : {:?})",
        options.tenants.len(),
        options.current.as_ref().map(|t| t.as_str())
    );
    options
}

/* ---------------- hook pratique -------------------- */
#[hook]
pub fn use_tenant_options() -> TenantOptionsContext {
    use_context::<TenantOptionsContext>()
        .expect("TenantOptionsProvider manquant")
}

/* -------------- props du provider ----------------- */
#[derive(Properties, PartialEq)]
pub struct TenantOptionsProviderProps {
    #[prop_or_default]
    pub config: TenantCookieConfig,
    #[prop_or_default]
    pub children: Children,
}

/* -------------- provider global ------------------- */
#[function_component(TenantOptionsProvider)]
pub fn tenant_options_provider(props: &TenantOptionsProviderProps) -> Html {
    let options = use_state(TenantOptions::default);

    let refresh = {
        let options = options.clone();
        use_callback(props.config.clone(), move |(), config| {
            options.set(read_tenant_options(config));
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with(props.config.clone(), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let context = TenantOptionsContext {
        options: (*options).clone(),
        refresh,
    };

    html! {
        <ContextProvider<TenantOptionsContext> {context}>
            { for props.children.iter() }
        </ContextProvider<TenantOptionsContext>>
    }
}
