//! Order details overlay with the slide-to-confirm action.
//!
//! The confirm action posts a status update owned by the backend; on
//! success the overlay closes after a short delay and asks the parent to
//! drop the order from the section tree.

use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use yew::prelude::*;

use crate::api;
use crate::components::slide_button::{CompleteAction, CompleteFuture, SlideButton};
use crate::model::{AgentTab, Order, StatusUpdate};
use crate::util::{PriceLookup, format_rupees};

#[derive(Properties, PartialEq, Clone)]
pub struct OrderDetailsProps {
    pub order: Order,
    pub tab: AgentTab,
    pub lookup: Rc<PriceLookup>,
    /// `true` asks the parent to remove the order from its lists.
    pub on_close: Callback<bool>,
}

#[derive(Clone, PartialEq)]
struct Banner {
    error: bool,
    text: String,
}

#[function_component(OrderDetails)]
pub fn order_details(props: &OrderDetailsProps) -> Html {
    let submitting = use_state(|| false);
    let banner = use_state(|| None::<Banner>);

    let order = &props.order;
    let current_status = order.current_status();
    let next_status = current_status.and_then(|s| props.tab.next_status(s));
    let show_bill = current_status.is_some_and(|s| props.tab.shows_bill(s));
    let phone = order.user_wa_id.clone();

    let on_complete = {
        let submitting = submitting.clone();
        let banner = banner.clone();
        let on_close = props.on_close.clone();
        let order_id = order.id.clone();
        CompleteAction::new(move || {
            let submitting = submitting.clone();
            let banner = banner.clone();
            let on_close = on_close.clone();
            let order_id = order_id.clone();
            // The overlay never shows the slider without an actionable
            // status; this guard keeps the closure total anyway.
            let (Some(current), Some(next)) = (current_status, next_status) else {
                return Box::pin(async { Ok(()) }) as CompleteFuture;
            };
            Box::pin(async move {
                submitting.set(true);
                banner.set(None);
                let update = StatusUpdate {
                    order_id,
                    current_status: current,
                    new_status: next,
                };
                match api::update_order(&update).await {
                    Ok(message) => {
                        log::info!(
                            "order {} moved to {}",
                            update.order_id,
                            update.new_status.as_str()
                        );
                        submitting.set(false);
                        banner.set(Some(Banner {
                            error: false,
                            text: if message.is_empty() {
                                "Order updated successfully!".to_string()
                            } else {
                                message
                            },
                        }));
                        TimeoutFuture::new(2_000).await;
                        on_close.emit(true);
                        Ok(())
                    }
                    Err(err) => {
                        log::warn!("order update failed: {err}");
                        submitting.set(false);
                        banner.set(Some(Banner {
                            error: true,
                            text: err.to_string(),
                        }));
                        Err(err)
                    }
                }
            })
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(false))
    };

    let round_button =
        "border:none; padding:8px; background:#fcd34d; border-radius:9999px; cursor:pointer; display:flex;";
    let label_style = "color:#6b7280;";
    let value_style = "font-weight:500; color:#374151;";

    html! {
        <div style="display:flex; flex-direction:column; justify-content:space-between; padding:12px 10px; width:100%; min-height:100vh; background:#fff; box-sizing:border-box;">
            <div style="display:flex; flex-direction:column; gap:16px; width:100%;">
                <div style="display:flex; justify-content:space-between; align-items:center; background:#f9fafb; padding:12px; border-radius:8px;">
                    <div style="font-size:14px; font-weight:600; color:#374151;">
                        { format!("Order #{}", order.display_id()) }
                    </div>
                    <div style="display:flex; gap:8px;">
                        <a href={format!("tel:+{phone}")} style={round_button}>
                            <img src="/icons/phone.svg" alt="Call" width="16" height="16" />
                        </a>
                        if let Some(maps) = &order.maps_link {
                            <a href={maps.clone()} style={round_button}>
                                <img src="/icons/maps_arrow.svg" alt="Maps" width="16" height="16" />
                            </a>
                        }
                        <button onclick={close} style={round_button}>
                            <img src="/icons/close.svg" alt="Close" width="16" height="16" />
                        </button>
                    </div>
                </div>

                <div style="background:#f9fafb; padding:16px; border-radius:8px; display:flex; flex-direction:column; gap:12px; font-size:14px;">
                    <div><span style={label_style}>{"Customer: "}</span><span style={value_style}>{ order.user_id.clone() }</span></div>
                    <div>
                        <span style={label_style}>{"Phone: "}</span>
                        <a href={format!("tel:+{phone}")} style="font-weight:500; color:#d97706;">{ phone.clone() }</a>
                    </div>
                    <div><span style={label_style}>{"Count: "}</span><span style={value_style}>{ order.count_line() }</span></div>
                </div>

                if !order.order_items.is_empty() {
                    <div style="display:flex; flex-direction:column; gap:8px;">
                        <div style="font-size:14px; font-weight:500; color:#374151;">{"Services:"}</div>
                        { for order.order_items.iter().map(|item| html! {
                            <div style="display:flex; justify-content:space-between; background:#f9fafb; padding:8px 12px; border-radius:8px; font-size:13px;">
                                <span>{ format!("{} — {}", props.lookup.service_name(&item.price_id), props.lookup.dress_category(&item.price_id)) }</span>
                                <span>{ format!("x{}", item.count) }</span>
                            </div>
                        }) }
                    </div>
                }

                if show_bill && !order.order_items.is_empty() {
                    <div style="display:flex; flex-direction:column; gap:4px; border:1px solid #e5e7eb; border-radius:8px; padding:12px; font-size:13px;">
                        <div style="font-weight:600; margin-bottom:4px;">{"Bill Details"}</div>
                        { for order.order_items.iter().map(|item| html! {
                            <div style="display:flex; justify-content:space-between;">
                                <span>{ format!("{} ({})", props.lookup.service_name(&item.price_id), props.lookup.dress_category(&item.price_id)) }</span>
                                <span>{ format_rupees(item.amount) }</span>
                            </div>
                        }) }
                        <div style="display:flex; justify-content:space-between; border-top:1px solid #e5e7eb; margin-top:4px; padding-top:4px; font-weight:600;">
                            <span>{"Total"}</span>
                            <span>{ format_rupees(order.order_items.iter().map(|i| i.amount).sum()) }</span>
                        </div>
                    </div>
                }

                if let Some(notes) = &order.notes {
                    if !notes.is_empty() {
                        <div>
                            <div style="font-size:14px; font-weight:500; color:#374151; margin-bottom:4px;">{"Notes:"}</div>
                            <div style="background:#f9fafb; padding:12px; border-radius:8px; font-size:13px; color:#374151;">{ notes.clone() }</div>
                        </div>
                    }
                }
            </div>

            <div style="position:sticky; bottom:0; background:#fff; padding:16px 0 8px 0; border-top:1px solid #e5e7eb; margin-top:16px;">
                if let Some(b) = &*banner {
                    <div style={format!(
                        "margin-bottom:12px; padding:12px; border-radius:8px; font-size:13px; background:{}; color:{};",
                        if b.error { "#fee2e2" } else { "#dcfce7" },
                        if b.error { "#b91c1c" } else { "#15803d" },
                    )}>
                        { b.text.clone() }
                    </div>
                }
                if next_status.is_some() {
                    <SlideButton on_complete={on_complete} is_loading={*submitting} />
                }
            </div>
        </div>
    }
}
