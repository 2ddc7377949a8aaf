use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::home_view::HomeView;
use crate::components::login_view::LoginView;
use crate::components::tab_bar::TabBar;
use crate::model::{AgentTab, HOME_STATUSES, SectionsAction, SectionsState, ServicePrices};
use crate::util::PriceLookup;

#[function_component(App)]
pub fn app() -> Html {
    let logged_in = use_state(|| false);
    let tab = use_state(|| AgentTab::Agent);
    let sections = use_reducer(SectionsState::default);
    let prices = use_state(|| Rc::new(HashMap::<String, Vec<ServicePrices>>::new()));
    let lookup = use_state(|| Rc::new(PriceLookup::default()));
    let error = use_state(|| None::<String>);

    // One load after login covers both tabs; the backend groups by status.
    {
        let sections = sections.clone();
        let prices = prices.clone();
        let lookup = lookup.clone();
        let error = error.clone();
        use_effect_with(*logged_in, move |&active| {
            if active {
                spawn_local(async move {
                    match api::grouped_orders(HOME_STATUSES).await {
                        Ok(list) => {
                            log::info!("loaded {} order sections", list.len());
                            sections.dispatch(SectionsAction::Load(list));
                        }
                        Err(err) => {
                            log::warn!("order fetch failed: {err}");
                            error.set(Some(err.to_string()));
                        }
                    }
                    match api::service_location_prices().await {
                        Ok(map) => {
                            lookup.set(Rc::new(PriceLookup::build(&map)));
                            prices.set(Rc::new(map));
                        }
                        Err(err) => {
                            log::warn!("price fetch failed: {err}");
                            error.set(Some(err.to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_login = {
        let logged_in = logged_in.clone();
        Callback::from(move |_| logged_in.set(true))
    };
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |t: AgentTab| tab.set(t))
    };

    if !*logged_in {
        return html! { <LoginView on_login={on_login} /> };
    }

    html! {
        <div style="max-width:480px; margin:0 auto; width:100%;">
            if let Some(text) = &*error {
                <p style="color:#ef4444; padding:0 16px;">{ text.clone() }</p>
            }
            <HomeView
                tab={*tab}
                sections={sections.clone()}
                prices={(*prices).clone()}
                lookup={(*lookup).clone()}
            />
            <TabBar active={*tab} on_select={on_tab} />
        </div>
    }
}
