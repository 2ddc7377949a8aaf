use yew::prelude::*;

use crate::model::AgentTab;

#[derive(Properties, PartialEq, Clone)]
pub struct TabBarProps {
    pub active: AgentTab,
    pub on_select: Callback<AgentTab>,
}

/// Bottom tab switch between the pickup-agent and delivery views.
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    let tab_style = |selected: bool, left: bool| {
        format!(
            "width:50%; height:100%; display:flex; justify-content:center; align-items:center; \
             cursor:pointer; border:none; box-shadow:0 -4px 12px rgba(17,24,39,0.25); \
             border-radius:{}; background:{}; color:{};",
            if left { "16px 0 0 0" } else { "0 16px 0 0" },
            if selected { "#1f2937" } else { "#fff" },
            if selected { "#fff" } else { "#1f2937" },
        )
    };
    let select = |tab: AgentTab| {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(tab))
    };

    html! {
        <div style="position:sticky; bottom:0; left:0; width:100%; height:48px; display:flex; margin-top:8px;">
            <button
                onclick={select(AgentTab::Agent)}
                style={tab_style(props.active == AgentTab::Agent, true)}
            >
                {"Pickup"}
            </button>
            <button
                onclick={select(AgentTab::Delivery)}
                style={tab_style(props.active == AgentTab::Delivery, false)}
            >
                {"Delivery"}
            </button>
        </div>
    }
}
