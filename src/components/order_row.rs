use yew::prelude::*;

use crate::model::Order;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderRowProps {
    pub order: Order,
    pub last_row: bool,
    pub on_show: Callback<Order>,
}

/// One order line inside a time-slot group: count range, services,
/// distance, and a chevron opening the details overlay.
#[function_component(OrderRow)]
pub fn order_row(props: &OrderRowProps) -> Html {
    let show = {
        let order = props.order.clone();
        let on_show = props.on_show.clone();
        Callback::from(move |_| on_show.emit(order.clone()))
    };

    let row_style = format!(
        "display:flex; justify-content:space-between; align-items:center; background:#fff; height:40px; padding:0 16px;{}",
        if props.last_row { "" } else { " border-bottom:1px solid #d1d5db;" }
    );
    let cell_style = "width:33%; display:flex; align-items:center; gap:4px;";

    html! {
        <div style={row_style}>
            <div style="width:95%; display:flex; justify-content:space-between;">
                <div style={cell_style}>
                    <img src="/icons/shirt.svg" alt="Count" width="18" height="18" />
                    <span>{ props.order.count_range_description.clone().unwrap_or_default() }</span>
                </div>
                <div style={cell_style}>
                    <img src="/icons/iron.svg" alt="Services" width="18" height="18" />
                    <span>{ props.order.service_names() }</span>
                </div>
                <div style={cell_style}>
                    <img src="/icons/distance.svg" alt="Distance" width="18" height="18" />
                    <span>{ props.order.distance.clone().unwrap_or_default() }</span>
                </div>
            </div>
            <button onclick={show} style="border:none; background:none; padding:0; cursor:pointer;">
                <img
                    src="/icons/chevron_right.svg"
                    alt="Open"
                    width="28"
                    height="28"
                    style="border-radius:9999px; background:#fcd34d;"
                />
            </button>
        </div>
    }
}
