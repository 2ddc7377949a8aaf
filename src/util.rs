// Display helpers shared by the grouped-orders views.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::model::{DateGroup, ServicePrices};

/// Formats a backend group date ("2024-12-29T00:00:00") as "Sun, 29 Dec".
/// Unparseable input is shown as-is rather than dropped.
pub fn format_group_date(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%a, %-d %b").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Total orders across all time slots of a date group.
pub fn orders_in_date(date: &DateGroup) -> usize {
    date.time_slots.iter().map(|slot| slot.orders.len()).sum()
}

pub fn format_rupees(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{}", amount as i64)
    } else {
        format!("₹{amount:.2}")
    }
}

/// Price-id lookups flattened from every location's service price list.
/// Bill rows and read-only item lists resolve names through this.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceLookup {
    service_by_price: HashMap<String, String>,
    category_by_price: HashMap<String, String>,
}

impl PriceLookup {
    pub fn build(prices_by_location: &HashMap<String, Vec<ServicePrices>>) -> Self {
        let mut lookup = Self::default();
        for service_prices in prices_by_location.values().flatten() {
            for price in &service_prices.prices {
                lookup
                    .service_by_price
                    .insert(price.id.clone(), service_prices.service.service_name.clone());
                lookup
                    .category_by_price
                    .insert(price.id.clone(), price.category.clone());
            }
        }
        lookup
    }

    pub fn service_name(&self, price_id: &str) -> &str {
        self.service_by_price
            .get(price_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn dress_category(&self, price_id: &str) -> &str {
        self.category_by_price
            .get(price_id)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, Service, SlotGroup};

    #[test]
    fn group_dates_render_short_form() {
        assert_eq!(format_group_date("2024-12-29T00:00:00"), "Sun, 29 Dec");
        assert_eq!(format_group_date("2025-01-06T00:00:00"), "Mon, 6 Jan");
    }

    #[test]
    fn bad_dates_pass_through_unchanged() {
        assert_eq!(format_group_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn orders_in_date_sums_all_slots() {
        let date = DateGroup {
            date: "2024-12-29T00:00:00".to_string(),
            time_slots: vec![
                SlotGroup {
                    slot: "am".to_string(),
                    orders: vec![],
                },
                SlotGroup {
                    slot: "pm".to_string(),
                    orders: vec![],
                },
            ],
        };
        assert_eq!(orders_in_date(&date), 0);
    }

    #[test]
    fn rupees_drop_trailing_zero_fraction() {
        assert_eq!(format_rupees(120.0), "₹120");
        assert_eq!(format_rupees(62.5), "₹62.50");
    }

    #[test]
    fn lookup_resolves_names_across_locations() {
        let service = Service {
            id: "svc-1".to_string(),
            service_category: "laundry".to_string(),
            service_type: "iron".to_string(),
            service_name: "Wash & Iron".to_string(),
            call_to_action_key: None,
        };
        let prices = HashMap::from([(
            "loc-1".to_string(),
            vec![ServicePrices {
                service,
                prices: vec![Price {
                    id: "p-1".to_string(),
                    service_location_id: "loc-1".to_string(),
                    service_id: "svc-1".to_string(),
                    category_key: "shirt".to_string(),
                    category: "Shirt".to_string(),
                    price: 15.0,
                    sort_order: 0,
                }],
            }],
        )]);
        let lookup = PriceLookup::build(&prices);
        assert_eq!(lookup.service_name("p-1"), "Wash & Iron");
        assert_eq!(lookup.dress_category("p-1"), "Shirt");
        assert_eq!(lookup.service_name("missing"), "");
    }
}
