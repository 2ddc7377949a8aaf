//! Draft order being assembled in the create-order dialog.
//!
//! Items index into the location's service price list rather than carrying
//! ids, matching what the select inputs hold. The draft is mirrored to
//! localStorage on every mutation so an interrupted entry survives a reload.

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::model::{NewOrder, NewOrderItem, ServicePrices};

const DRAFT_STORAGE_KEY: &str = "agent_order_draft";

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftItem {
    /// Index into the location's `ServicePrices` list.
    pub service_idx: usize,
    /// Index into that service's price (dress category) list.
    pub price_idx: usize,
    pub count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftOrder {
    pub customer_name: String,
    pub phone_number: String,
    pub notes: String,
    pub items: Vec<DraftItem>,
}

impl DraftOrder {
    pub fn add_item(&mut self) {
        self.items.push(DraftItem {
            count: 1,
            ..DraftItem::default()
        });
    }

    pub fn remove_item(&mut self, idx: usize) {
        if idx < self.items.len() {
            self.items.remove(idx);
        }
    }

    pub fn line_amount(&self, item: &DraftItem, prices: &[ServicePrices]) -> f64 {
        prices
            .get(item.service_idx)
            .and_then(|sp| sp.prices.get(item.price_idx))
            .map(|p| p.price * item.count as f64)
            .unwrap_or(0.0)
    }

    pub fn total(&self, prices: &[ServicePrices]) -> f64 {
        self.items
            .iter()
            .map(|item| self.line_amount(item, prices))
            .sum()
    }

    /// Builds the creation payload. `None` when there is nothing to submit
    /// or a line no longer resolves against the price list.
    pub fn to_new_order(&self, location_id: &str, prices: &[ServicePrices]) -> Option<NewOrder> {
        if self.items.is_empty() {
            return None;
        }
        let mut items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let price = prices.get(item.service_idx)?.prices.get(item.price_idx)?;
            if item.count == 0 {
                return None;
            }
            items.push(NewOrderItem {
                price_id: price.id.clone(),
                count: item.count,
                amount: price.price * item.count as f64,
            });
        }
        let total_price = items.iter().map(|i| i.amount).sum();
        Some(NewOrder {
            user_id: self.customer_name.clone(),
            user_wa_id: self.phone_number.clone(),
            service_location_id: location_id.to_string(),
            notes: self.notes.clone(),
            items,
            total_price,
        })
    }

    pub fn load() -> Self {
        LocalStorage::get(DRAFT_STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(err) = LocalStorage::set(DRAFT_STORAGE_KEY, self) {
            log::warn!("failed to persist order draft: {err}");
        }
    }

    pub fn discard() {
        LocalStorage::delete(DRAFT_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, Service};

    fn price_list() -> Vec<ServicePrices> {
        let service = |id: &str, name: &str| Service {
            id: id.to_string(),
            service_category: "laundry".to_string(),
            service_type: "iron".to_string(),
            service_name: name.to_string(),
            call_to_action_key: None,
        };
        let price = |id: &str, category: &str, amount: f64| Price {
            id: id.to_string(),
            service_location_id: "loc-1".to_string(),
            service_id: "svc".to_string(),
            category_key: category.to_lowercase(),
            category: category.to_string(),
            price: amount,
            sort_order: 0,
        };
        vec![
            ServicePrices {
                service: service("svc-1", "Ironing"),
                prices: vec![price("p-1", "Shirt", 10.0), price("p-2", "Saree", 30.0)],
            },
            ServicePrices {
                service: service("svc-2", "Wash & Iron"),
                prices: vec![price("p-3", "Shirt", 25.0)],
            },
        ]
    }

    #[test]
    fn add_and_remove_items() {
        let mut draft = DraftOrder::default();
        draft.add_item();
        draft.add_item();
        assert_eq!(draft.items.len(), 2);
        draft.remove_item(0);
        assert_eq!(draft.items.len(), 1);
        // Out-of-range removal is a no-op.
        draft.remove_item(5);
        assert_eq!(draft.items.len(), 1);
    }

    #[test]
    fn totals_follow_selected_prices() {
        let prices = price_list();
        let mut draft = DraftOrder::default();
        draft.items.push(DraftItem {
            service_idx: 0,
            price_idx: 1,
            count: 2,
        });
        draft.items.push(DraftItem {
            service_idx: 1,
            price_idx: 0,
            count: 4,
        });
        assert_eq!(draft.line_amount(&draft.items[0], &prices), 60.0);
        assert_eq!(draft.total(&prices), 160.0);
    }

    #[test]
    fn payload_carries_resolved_price_ids() {
        let prices = price_list();
        let draft = DraftOrder {
            customer_name: "Asha".to_string(),
            phone_number: "919900112233".to_string(),
            notes: "gate code 4412".to_string(),
            items: vec![DraftItem {
                service_idx: 1,
                price_idx: 0,
                count: 3,
            }],
        };
        let order = draft.to_new_order("loc-1", &prices).unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].price_id, "p-3");
        assert_eq!(order.items[0].amount, 75.0);
        assert_eq!(order.total_price, 75.0);
        assert_eq!(order.service_location_id, "loc-1");
    }

    #[test]
    fn empty_or_unresolvable_drafts_produce_no_payload() {
        let prices = price_list();
        let mut draft = DraftOrder::default();
        assert!(draft.to_new_order("loc-1", &prices).is_none());
        draft.items.push(DraftItem {
            service_idx: 9,
            price_idx: 0,
            count: 1,
        });
        assert!(draft.to_new_order("loc-1", &prices).is_none());
        draft.items[0] = DraftItem {
            service_idx: 0,
            price_idx: 0,
            count: 0,
        };
        assert!(draft.to_new_order("loc-1", &prices).is_none());
    }
}
