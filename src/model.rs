//! Payload types for the remote order-management API and the client-side
//! sections store. The status vocabulary and grouping shape are owned by
//! the backend; this UI only mirrors them.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    ServicePending,
    LocationPending,
    TimeSlotPending,
    FindingIronman,
    PickupPending,
    PickupUserNoResp,
    PickupUserRejected,
    PickupComplete,
    WorkInProgress,
    WorkDone,
    ToBeDelivered,
    DeliveryPending,
    DeliveryAttempted,
    Delivered,
    Closed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServicePending => "SERVICE_PENDING",
            Self::LocationPending => "LOCATION_PENDING",
            Self::TimeSlotPending => "TIME_SLOT_PENDING",
            Self::FindingIronman => "FINDING_IRONMAN",
            Self::PickupPending => "PICKUP_PENDING",
            Self::PickupUserNoResp => "PICKUP_USER_NO_RESP",
            Self::PickupUserRejected => "PICKUP_USER_REJECTED",
            Self::PickupComplete => "PICKUP_COMPLETE",
            Self::WorkInProgress => "WORK_IN_PROGRESS",
            Self::WorkDone => "WORK_DONE",
            Self::ToBeDelivered => "TO_BE_DELIVERED",
            Self::DeliveryPending => "DELIVERY_PENDING",
            Self::DeliveryAttempted => "DELIVERY_ATTEMPTED",
            Self::Delivered => "DELIVERED",
            Self::Closed => "CLOSED",
        }
    }
}

/// Statuses the dashboard asks the backend to group for it.
pub const HOME_STATUSES: &[OrderStatus] = &[
    OrderStatus::FindingIronman,
    OrderStatus::PickupPending,
    OrderStatus::WorkInProgress,
    OrderStatus::DeliveryPending,
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub service_category: String,
    pub service_type: String,
    pub service_name: String,
    #[serde(default)]
    pub call_to_action_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(rename = "_id")]
    pub id: String,
    pub service_location_id: String,
    pub service_id: String,
    pub category_key: String,
    /// Dress category shown to the user ("Shirt", "Saree", ...).
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub sort_order: i32,
}

/// One service with its per-dress-category price list for a location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServicePrices {
    pub service: Service,
    pub prices: Vec<Price>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub price_id: String,
    pub count: u32,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusEntry {
    pub status: OrderStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub simple_id: Option<String>,
    #[serde(default)]
    pub sub_id: Option<String>,
    /// Customer name.
    pub user_id: String,
    /// Customer phone (WhatsApp id).
    pub user_wa_id: String,
    pub service_location_id: String,
    #[serde(default)]
    pub count_range_description: Option<String>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub maps_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub time_slot_description: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    /// Newest entry first; the backend owns the transition rules.
    #[serde(default)]
    pub order_status: Vec<OrderStatusEntry>,
}

impl Order {
    pub fn current_status(&self) -> Option<OrderStatus> {
        self.order_status.first().map(|e| e.status)
    }

    /// Short id for display, with the sub-order suffix when present.
    pub fn display_id(&self) -> String {
        let base = self.simple_id.clone().unwrap_or_else(|| self.id.clone());
        match &self.sub_id {
            Some(sub) => format!("{base}-{sub}"),
            None => base,
        }
    }

    /// "15 to 20 clothes" style count line; an exact count wins over a range.
    pub fn count_line(&self) -> String {
        match (self.total_count, &self.count_range_description) {
            (Some(n), _) => format!("{n} clothes"),
            (None, Some(range)) => format!("{range} clothes"),
            (None, None) => String::new(),
        }
    }

    pub fn service_names(&self) -> String {
        self.services
            .iter()
            .map(|s| s.service_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Orders sharing one pickup/delivery time slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotGroup {
    pub slot: String,
    pub orders: Vec<Order>,
}

impl SlotGroup {
    /// Slot label comes from the first order; the backend fills it per order.
    pub fn label(&self) -> &str {
        self.orders
            .first()
            .and_then(|o| o.time_slot_description.as_deref())
            .unwrap_or(self.slot.as_str())
    }
}

/// Slot groups for one calendar date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DateGroup {
    pub date: String,
    pub time_slots: Vec<SlotGroup>,
}

/// One swipeable page: a status bucket holding date groups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub label: String,
    pub dates: Vec<DateGroup>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StatusUpdate {
    pub order_id: String,
    pub current_status: OrderStatus,
    pub new_status: OrderStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewOrderItem {
    pub price_id: String,
    pub count: u32,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewOrder {
    pub user_id: String,
    pub user_wa_id: String,
    pub service_location_id: String,
    pub notes: String,
    pub items: Vec<NewOrderItem>,
    pub total_price: f64,
}

/// Which home view is active; decides the confirm action per status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentTab {
    Agent,
    Delivery,
}

impl AgentTab {
    /// The status the slide-to-confirm action moves the order to, when the
    /// current status has an action at all in this view.
    pub fn next_status(&self, current: OrderStatus) -> Option<OrderStatus> {
        match (self, current) {
            (Self::Agent, OrderStatus::PickupPending) => Some(OrderStatus::PickupComplete),
            (Self::Delivery, OrderStatus::DeliveryPending) => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    pub fn shows_bill(&self, current: OrderStatus) -> bool {
        matches!((self, current), (Self::Delivery, OrderStatus::DeliveryPending))
    }
}

/// Client-side store for the grouped order tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionsState {
    pub sections: Vec<Section>,
}

pub enum SectionsAction {
    Load(Vec<Section>),
    /// Drop one order everywhere and prune slots/dates/sections left empty.
    RemoveOrder { order_id: String },
}

impl Reducible for SectionsState {
    type Action = SectionsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            SectionsAction::Load(sections) => new.sections = sections,
            SectionsAction::RemoveOrder { order_id } => {
                new.sections = remove_order(new.sections, &order_id);
            }
        }
        Rc::new(new)
    }
}

fn remove_order(sections: Vec<Section>, order_id: &str) -> Vec<Section> {
    sections
        .into_iter()
        .filter_map(|mut section| {
            section.dates = section
                .dates
                .into_iter()
                .filter_map(|mut date| {
                    date.time_slots = date
                        .time_slots
                        .into_iter()
                        .filter_map(|mut slot| {
                            slot.orders.retain(|o| o.id != order_id);
                            (!slot.orders.is_empty()).then_some(slot)
                        })
                        .collect();
                    (!date.time_slots.is_empty()).then_some(date)
                })
                .collect();
            (!section.dates.is_empty()).then_some(section)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            simple_id: None,
            sub_id: None,
            user_id: "Asha".to_string(),
            user_wa_id: "919900112233".to_string(),
            service_location_id: "loc-1".to_string(),
            count_range_description: Some("15 to 20".to_string()),
            total_count: None,
            distance: Some("1 Km".to_string()),
            maps_link: None,
            notes: None,
            time_slot_description: Some("7:00 am - 9:00 am".to_string()),
            services: vec![],
            order_items: vec![],
            order_status: vec![OrderStatusEntry {
                status: OrderStatus::PickupPending,
            }],
        }
    }

    fn tree() -> Vec<Section> {
        vec![Section {
            key: "PICKUP_PENDING".to_string(),
            label: "Pickup".to_string(),
            dates: vec![DateGroup {
                date: "2024-12-29T00:00:00".to_string(),
                time_slots: vec![
                    SlotGroup {
                        slot: "morning".to_string(),
                        orders: vec![order("a"), order("b")],
                    },
                    SlotGroup {
                        slot: "evening".to_string(),
                        orders: vec![order("c")],
                    },
                ],
            }],
        }]
    }

    #[test]
    fn remove_keeps_nonempty_slots() {
        let out = remove_order(tree(), "a");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].dates[0].time_slots.len(), 2);
        assert_eq!(out[0].dates[0].time_slots[0].orders.len(), 1);
        assert_eq!(out[0].dates[0].time_slots[0].orders[0].id, "b");
    }

    #[test]
    fn remove_prunes_emptied_slot_but_keeps_date() {
        let out = remove_order(tree(), "c");
        assert_eq!(out[0].dates[0].time_slots.len(), 1);
    }

    #[test]
    fn remove_prunes_whole_section_when_emptied() {
        let mut t = tree();
        t[0].dates[0].time_slots.truncate(1);
        t[0].dates[0].time_slots[0].orders.truncate(1);
        let out = remove_order(t, "a");
        assert!(out.is_empty());
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let out = remove_order(tree(), "zzz");
        assert_eq!(out, tree());
    }

    #[test]
    fn display_id_prefers_simple_id_and_appends_sub_id() {
        let mut o = order("64fe");
        assert_eq!(o.display_id(), "64fe");
        o.simple_id = Some("1042".to_string());
        o.sub_id = Some("2".to_string());
        assert_eq!(o.display_id(), "1042-2");
    }

    #[test]
    fn count_line_prefers_exact_total() {
        let mut o = order("a");
        assert_eq!(o.count_line(), "15 to 20 clothes");
        o.total_count = Some(18);
        assert_eq!(o.count_line(), "18 clothes");
    }

    #[test]
    fn status_round_trips_through_serde() {
        let s: OrderStatus = serde_json::from_str("\"DELIVERY_PENDING\"").unwrap();
        assert_eq!(s, OrderStatus::DeliveryPending);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"DELIVERY_PENDING\"");
        assert_eq!(s.as_str(), "DELIVERY_PENDING");
    }

    #[test]
    fn tab_action_maps_match_the_views() {
        assert_eq!(
            AgentTab::Agent.next_status(OrderStatus::PickupPending),
            Some(OrderStatus::PickupComplete)
        );
        assert_eq!(
            AgentTab::Delivery.next_status(OrderStatus::DeliveryPending),
            Some(OrderStatus::Delivered)
        );
        assert_eq!(AgentTab::Agent.next_status(OrderStatus::Closed), None);
        assert!(AgentTab::Delivery.shows_bill(OrderStatus::DeliveryPending));
        assert!(!AgentTab::Agent.shows_bill(OrderStatus::DeliveryPending));
    }
}
