//! Walk-in order entry. The draft (customer fields + item lines) lives in
//! `state::cart` and is mirrored to localStorage so a half-typed order
//! survives a reload; it is discarded on successful submit.

use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::model::ServicePrices;
use crate::state::cart::DraftOrder;
use crate::util::format_rupees;

#[derive(Properties, PartialEq, Clone)]
pub struct CreateOrderDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub location_id: AttrValue,
    pub prices: Rc<Vec<ServicePrices>>,
}

#[derive(Clone, PartialEq)]
struct Banner {
    error: bool,
    text: String,
}

#[function_component(CreateOrderDialog)]
pub fn create_order_dialog(props: &CreateOrderDialogProps) -> Html {
    let draft = use_state(DraftOrder::load);
    let submitting = use_state(|| false);
    let banner = use_state(|| None::<Banner>);

    if !props.open {
        return html! {};
    }

    // Every mutation goes through here so the stored draft stays current.
    let apply = {
        let draft = draft.clone();
        Rc::new(move |mutate: &dyn Fn(&mut DraftOrder)| {
            let mut next = (*draft).clone();
            mutate(&mut next);
            next.save();
            draft.set(next);
        })
    };

    let on_name = {
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            apply(&|d: &mut DraftOrder| d.customer_name = value.clone());
        })
    };
    let on_phone = {
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            apply(&|d: &mut DraftOrder| d.phone_number = value.clone());
        })
    };
    let on_notes = {
        let apply = apply.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            apply(&|d: &mut DraftOrder| d.notes = value.clone());
        })
    };
    let add_item = {
        let apply = apply.clone();
        Callback::from(move |_| apply(&|d: &mut DraftOrder| d.add_item()))
    };

    let submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let banner = banner.clone();
        let on_close = props.on_close.clone();
        let prices = props.prices.clone();
        let location_id = props.location_id.clone();
        Callback::from(move |_| {
            let Some(order) = draft.to_new_order(location_id.as_str(), &prices) else {
                banner.set(Some(Banner {
                    error: true,
                    text: "Add at least one service with a count".to_string(),
                }));
                return;
            };
            let draft = draft.clone();
            let submitting = submitting.clone();
            let banner = banner.clone();
            let on_close = on_close.clone();
            submitting.set(true);
            banner.set(None);
            spawn_local(async move {
                match api::create_order(&order).await {
                    Ok(_) => {
                        log::info!("order created for {}", order.user_wa_id);
                        submitting.set(false);
                        banner.set(Some(Banner {
                            error: false,
                            text: "Order created successfully!".to_string(),
                        }));
                        DraftOrder::discard();
                        draft.set(DraftOrder::default());
                        TimeoutFuture::new(2_000).await;
                        on_close.emit(());
                    }
                    Err(err) => {
                        log::warn!("order creation failed: {err}");
                        submitting.set(false);
                        banner.set(Some(Banner {
                            error: true,
                            text: err.to_string(),
                        }));
                    }
                }
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let input_style =
        "width:100%; padding:12px; border:1px solid #d1d5db; border-radius:8px; font-size:14px; box-sizing:border-box;";

    let item_rows = draft.items.iter().enumerate().map(|(idx, item)| {
        let on_service = {
            let apply = apply.clone();
            Callback::from(move |e: Event| {
                let value = e
                    .target_unchecked_into::<HtmlSelectElement>()
                    .value()
                    .parse::<usize>()
                    .unwrap_or(0);
                apply(&move |d: &mut DraftOrder| {
                    if let Some(item) = d.items.get_mut(idx) {
                        item.service_idx = value;
                        item.price_idx = 0;
                    }
                });
            })
        };
        let on_dress = {
            let apply = apply.clone();
            Callback::from(move |e: Event| {
                let value = e
                    .target_unchecked_into::<HtmlSelectElement>()
                    .value()
                    .parse::<usize>()
                    .unwrap_or(0);
                apply(&move |d: &mut DraftOrder| {
                    if let Some(item) = d.items.get_mut(idx) {
                        item.price_idx = value;
                    }
                });
            })
        };
        let on_count = {
            let apply = apply.clone();
            Callback::from(move |e: InputEvent| {
                let value = e
                    .target_unchecked_into::<HtmlInputElement>()
                    .value()
                    .parse::<u32>()
                    .unwrap_or(0);
                apply(&move |d: &mut DraftOrder| {
                    if let Some(item) = d.items.get_mut(idx) {
                        item.count = value;
                    }
                });
            })
        };
        let remove = {
            let apply = apply.clone();
            Callback::from(move |_| apply(&move |d: &mut DraftOrder| d.remove_item(idx)))
        };
        let dress_options = props
            .prices
            .get(item.service_idx)
            .map(|sp| sp.prices.as_slice())
            .unwrap_or(&[]);

        html! {
            <div style="display:flex; gap:8px; align-items:center;">
                <select onchange={on_service} style="flex:2; padding:8px; border:1px solid #d1d5db; border-radius:8px;">
                    { for props.prices.iter().enumerate().map(|(i, sp)| html! {
                        <option value={i.to_string()} selected={i == item.service_idx}>
                            { sp.service.service_name.clone() }
                        </option>
                    }) }
                </select>
                <select onchange={on_dress} style="flex:2; padding:8px; border:1px solid #d1d5db; border-radius:8px;">
                    { for dress_options.iter().enumerate().map(|(i, p)| html! {
                        <option value={i.to_string()} selected={i == item.price_idx}>
                            { format!("{} ({})", p.category, format_rupees(p.price)) }
                        </option>
                    }) }
                </select>
                <input
                    type="number"
                    min="1"
                    value={item.count.to_string()}
                    oninput={on_count}
                    style="flex:1; padding:8px; border:1px solid #d1d5db; border-radius:8px; width:56px;"
                />
                <span style="min-width:64px; text-align:right; font-size:13px;">
                    { format_rupees(draft.line_amount(item, &props.prices)) }
                </span>
                <button onclick={remove} style="border:none; background:none; cursor:pointer; color:#b91c1c;">{"✕"}</button>
            </div>
        }
    });

    html! {
        <div style="position:fixed; inset:0; background:rgba(0,0,0,0.5); z-index:50; display:flex; justify-content:center; align-items:center;">
            <div style="background:#fff; border-radius:12px; width:100%; max-width:480px; max-height:90vh; overflow-y:auto; margin:16px;">
                <div style="display:flex; flex-direction:column; padding:16px; gap:16px;">
                    <div style="display:flex; justify-content:space-between; align-items:center;">
                        <h2 style="margin:0; font-size:20px; font-weight:600;">{"Create New Order"}</h2>
                        <button onclick={close} style="border:none; background:none; cursor:pointer; padding:8px;">
                            <img src="/icons/close.svg" alt="Close" width="16" height="16" />
                        </button>
                    </div>

                    <input type="text" placeholder="Customer Name" value={draft.customer_name.clone()} oninput={on_name} style={input_style} />
                    <input type="tel" placeholder="Phone Number" value={draft.phone_number.clone()} oninput={on_phone} style={input_style} />
                    <input type="text" placeholder="Notes" value={draft.notes.clone()} oninput={on_notes} style={input_style} />

                    <div style="display:flex; flex-direction:column; gap:10px;">
                        { for item_rows }
                        <button onclick={add_item} style="align-self:center; border:none; background:#fcd34d; border-radius:9999px; padding:8px 16px; cursor:pointer;">
                            {"+ Add service"}
                        </button>
                    </div>

                    <div style="display:flex; justify-content:space-between; border-top:1px solid #e5e7eb; padding-top:8px; font-weight:600;">
                        <span>{"Total"}</span>
                        <span>{ format_rupees(draft.total(&props.prices)) }</span>
                    </div>

                    if let Some(b) = &*banner {
                        <div style={format!(
                            "padding:12px; border-radius:8px; font-size:13px; background:{}; color:{};",
                            if b.error { "#fee2e2" } else { "#dcfce7" },
                            if b.error { "#b91c1c" } else { "#15803d" },
                        )}>
                            { b.text.clone() }
                        </div>
                    }

                    <button
                        onclick={submit}
                        disabled={*submitting}
                        style="width:100%; padding:12px; border:none; border-radius:9999px; background:#fcd34d; font-size:15px; font-weight:500; cursor:pointer;"
                    >
                        { if *submitting { "Creating..." } else { "Create Order" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
