use log::{info, LevelFilter};
use tenant_options::TenantId;
use yew::prelude::*;

mod tenant_select;
mod tenants;
mod utils;

use tenant_select::TenantSelect;
use tenants::{use_tenant_options, TenantOptionsProvider};

/* -------------------- barre tenant --------------- */

#[function_component(TenantBar)]
fn tenant_bar() -> Html {
    let ctx = use_tenant_options();
    let chosen = use_state(|| None::<TenantId>);

    let on_select = {
        let chosen = chosen.clone();
        Callback::from(move |tenant: TenantId| {
            info!("tenant choisi : {tenant}");
            chosen.set(Some(tenant));
        })
    };

    let onclick = {
        let refresh = ctx.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let shown = (*chosen).clone().or_else(|| ctx.options.selected().cloned());

    html! {
        <header class="tenant-bar">
            <TenantSelect {on_select} />
            {
                match shown {
                    Some(tenant) => html!(<span class="tenant-current">{ tenant.as_str() }</span>),
                    None => html!(<span class="tenant-current">{ "Aucun tenant" }</span>),
                }
            }
            <button {onclick}>{ "Rafraîchir" }</button>
        </header>
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <TenantOptionsProvider>
            <TenantBar />
        </TenantOptionsProvider>
    }
}

fn main() {
    utils::logger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
