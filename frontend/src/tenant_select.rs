use tenant_options::TenantId;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::tenants::use_tenant_options;

#[derive(Properties, PartialEq)]
pub struct TenantSelectProps {
    /// Tenant choisi par l'utilisateur. Aucun cookie n'est écrit ici.
    pub on_select: Callback<TenantId>,
}

/* Liste déroulante des tenants, affichée seulement s'il y en a plusieurs */
#[function_component(TenantSelect)]
pub fn tenant_select(props: &TenantSelectProps) -> Html {
    let ctx = use_tenant_options();

    if !ctx.options.is_multi_tenant() {
        return Html::default();
    }

    let selected = ctx.options.selected().cloned();

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let sel: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(TenantId::from(sel.value()));
        })
    };

    html! {
        <label class="tenant-select">
            { "Tenant : " }
            <select {onchange}>
                { for ctx.options.tenants.iter().map(|tenant| {
                    let is_selected = selected.as_ref() == Some(tenant);
                    html! {
                        <option value={tenant.to_string()} selected={is_selected}>
                            { tenant.as_str() }
                        </option>
                    }
                }) }
            </select>
        </label>
    }
}
