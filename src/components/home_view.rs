//! Grouped-orders home view: swipeable status sections holding date and
//! time-slot groups, the order-details overlay, and the create-order
//! dialog trigger.

use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::create_order_dialog::CreateOrderDialog;
use crate::components::order_details::OrderDetails;
use crate::components::order_row::OrderRow;
use crate::model::{AgentTab, Order, Section, SectionsAction, SectionsState, ServicePrices};
use crate::state::{SectionPager, SwipeDir, SwipeTracker};
use crate::util::{PriceLookup, format_group_date, orders_in_date};

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub tab: AgentTab,
    pub sections: UseReducerHandle<SectionsState>,
    pub prices: Rc<HashMap<String, Vec<ServicePrices>>>,
    pub lookup: Rc<PriceLookup>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let pager = use_state(SectionPager::default);
    let swipe = use_mut_ref(SwipeTracker::default);
    let selected = use_state(|| None::<Order>);
    let show_create = use_state(|| false);

    let sections = &props.sections.sections;
    let len = sections.len();
    // Removals can shrink the list under the pager.
    let current = pager.index.min(len.saturating_sub(1));

    let advance: Rc<dyn Fn(i32)> = {
        let pager = pager.clone();
        Rc::new(move |delta: i32| {
            let mut next = SectionPager { index: current };
            next.advance(delta, len);
            pager.set(next);
        })
    };

    let prev = {
        let advance = advance.clone();
        Callback::from(move |_: MouseEvent| advance(-1))
    };
    let next = {
        let advance = advance.clone();
        Callback::from(move |_: MouseEvent| advance(1))
    };

    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe
                    .borrow_mut()
                    .begin(touch.client_x() as f64, touch.client_y() as f64);
            }
        })
    };
    let ontouchend = {
        let swipe = swipe.clone();
        let advance = advance.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.changed_touches().get(0) else {
                swipe.borrow_mut().cancel();
                return;
            };
            match swipe
                .borrow_mut()
                .end(touch.client_x() as f64, touch.client_y() as f64)
            {
                Some(SwipeDir::Left) => advance(1),
                Some(SwipeDir::Right) => advance(-1),
                None => {}
            }
        })
    };
    // trackMouse: the same gesture works with a mouse drag.
    let onmousedown = {
        let swipe = swipe.clone();
        Callback::from(move |e: MouseEvent| {
            swipe
                .borrow_mut()
                .begin(e.client_x() as f64, e.client_y() as f64);
        })
    };
    let onmouseup = {
        let swipe = swipe.clone();
        let advance = advance.clone();
        Callback::from(move |e: MouseEvent| {
            match swipe
                .borrow_mut()
                .end(e.client_x() as f64, e.client_y() as f64)
            {
                Some(SwipeDir::Left) => advance(1),
                Some(SwipeDir::Right) => advance(-1),
                None => {}
            }
        })
    };

    let on_show = {
        let selected = selected.clone();
        Callback::from(move |order: Order| selected.set(Some(order)))
    };
    let on_details_close = {
        let selected = selected.clone();
        let sections = props.sections.clone();
        Callback::from(move |delete: bool| {
            if delete {
                if let Some(order) = &*selected {
                    sections.dispatch(SectionsAction::RemoveOrder {
                        order_id: order.id.clone(),
                    });
                }
            }
            selected.set(None);
        })
    };

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(true))
    };
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    // The create dialog prices against the first (only) service location.
    let (create_location, create_prices) = props
        .prices
        .iter()
        .next()
        .map(|(id, list)| (id.clone(), Rc::new(list.clone())))
        .unwrap_or_else(|| (String::new(), Rc::new(Vec::new())));

    let section_page = |index: usize, section: &Section| -> Html {
        let transform = if index == current {
            "translateX(0)"
        } else if current < index {
            "translateX(100%)"
        } else {
            "translateX(-100%)"
        };
        html! {
            <div style={format!(
                "position:absolute; width:100%; display:flex; flex-direction:column; \
                 transition:transform 0.3s; transform:{transform};"
            )}>
                <div style="display:flex; width:100%; justify-content:space-between; align-items:center; padding:12px 0; margin:8px 0;">
                    <button onclick={prev.clone()} style="border:none; background:none; cursor:pointer;">
                        <img src="/icons/chevron_left.svg" alt="Previous" width="28" height="28" />
                    </button>
                    <h1 style="margin:0; font-size:28px; font-weight:700; color:#fcd34d;">{ section.label.clone() }</h1>
                    <button onclick={next.clone()} style="border:none; background:none; cursor:pointer;">
                        <img src="/icons/chevron_right.svg" alt="Next" width="28" height="28" />
                    </button>
                </div>
                { for section.dates.iter().enumerate().map(|(date_idx, date)| html! {
                    <section style={format!(
                        "width:100%; background:#f3f4f6;{}",
                        if date_idx + 1 != section.dates.len() { " padding:16px 0; border-bottom:1px solid #d1d5db;" } else { "" }
                    )}>
                        <div style="width:96%; margin:0 auto;">
                            <h2 style="font-size:22px; color:#374151; font-weight:600; margin:0 0 20px 0; padding:0 8px;">
                                { format!("{} ({} Orders)", format_group_date(&date.date), orders_in_date(date)) }
                            </h2>
                            { for date.time_slots.iter().map(|slot| html! {
                                <div style="display:flex; flex-direction:column; color:#374151; border-radius:24px; overflow:hidden; margin-bottom:24px; border:1px solid #d1d5db;">
                                    <div style="display:flex; justify-content:space-between; align-items:center; height:40px; padding:0 16px; background:#fcd34d;">
                                        <h3 style="margin:0; font-size:15px; font-weight:500;">
                                            { format!("Slot : {} ({} Orders)", slot.label(), slot.orders.len()) }
                                        </h3>
                                    </div>
                                    <div style="font-size:12px;">
                                        { for slot.orders.iter().enumerate().map(|(row_idx, order)| html! {
                                            <OrderRow
                                                order={order.clone()}
                                                last_row={row_idx + 1 == slot.orders.len()}
                                                on_show={on_show.clone()}
                                            />
                                        }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                    </section>
                }) }
            </div>
        }
    };

    html! {
        <>
            <div
                {ontouchstart} {ontouchend} {onmousedown} {onmouseup}
                style="position:relative; display:flex; overflow:hidden; overflow-y:auto; width:100%; min-height:100vh;"
            >
                if sections.is_empty() {
                    <div style="width:100%; text-align:center; padding-top:64px; color:#6b7280;">
                        {"No orders right now."}
                    </div>
                } else {
                    { for sections.iter().enumerate().map(|(i, s)| section_page(i, s)) }
                }
                if let Some(order) = &*selected {
                    <div style="position:absolute; inset:0; width:100%; min-height:100vh; z-index:50; overflow-y:auto;">
                        <OrderDetails
                            order={order.clone()}
                            tab={props.tab}
                            lookup={props.lookup.clone()}
                            on_close={on_details_close}
                        />
                    </div>
                }
            </div>
            if props.tab == AgentTab::Agent {
                <button
                    onclick={open_create}
                    style="position:fixed; right:20px; bottom:68px; width:52px; height:52px; border:none; border-radius:9999px; background:#fcd34d; font-size:26px; cursor:pointer; box-shadow:0 4px 12px rgba(0,0,0,0.25); z-index:40;"
                >
                    {"+"}
                </button>
            }
            <CreateOrderDialog
                open={*show_create}
                on_close={close_create}
                location_id={create_location}
                prices={create_prices}
            />
        </>
    }
}
