//! Test utilities for sales summary testing

mod aggregator_tests;

use crate::app::models::{Channel, MenuItem, Order};

/// Build a consistent order for aggregation tests
pub fn order(channel: Channel, item: MenuItem, quantity: u32) -> Order {
    let price_per_item = 2.0;
    Order {
        channel,
        item,
        quantity,
        price_per_item,
        total_price: quantity as f64 * price_per_item,
        source: "test.txt".to_string(),
    }
}

/// A small mixed batch of orders covering both channels
pub fn sample_orders() -> Vec<Order> {
    vec![
        order(Channel::InRestaurant, MenuItem::Hummous, 2),
        order(Channel::InRestaurant, MenuItem::Water, 2),
        order(Channel::InRestaurant, MenuItem::Tea, 1),
        order(Channel::Takeaway, MenuItem::Cola, 3),
        order(Channel::Takeaway, MenuItem::Hummous, 1),
    ]
}
