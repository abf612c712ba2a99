//! Tests for the summary aggregator

use super::{order, sample_orders};
use crate::app::models::{Channel, MenuItem};
use crate::app::services::sales_summary::SummaryAggregator;

#[test]
fn test_empty_aggregator_finalizes_to_zeros() {
    let summary = SummaryAggregator::new().finalize();

    assert_eq!(summary.total_orders(), 0);
    assert_eq!(summary.channel_orders(Channel::InRestaurant), 0);
    assert_eq!(summary.channel_orders(Channel::Takeaway), 0);
    assert_eq!(summary.item_totals().len(), MenuItem::ALL.len());
    for totals in summary.item_totals() {
        assert_eq!(totals.combined(), 0);
    }
}

#[test]
fn test_accumulate_updates_channel_and_item_counters() {
    let mut aggregator = SummaryAggregator::new();
    aggregator.accumulate(&order(Channel::InRestaurant, MenuItem::Hummous, 2));
    aggregator.accumulate(&order(Channel::Takeaway, MenuItem::Hummous, 5));
    aggregator.accumulate(&order(Channel::Takeaway, MenuItem::Cola, 1));

    let summary = aggregator.finalize();

    assert_eq!(summary.total_orders(), 3);
    assert_eq!(summary.channel_orders(Channel::InRestaurant), 1);
    assert_eq!(summary.channel_orders(Channel::Takeaway), 2);
    assert_eq!(summary.quantity(Channel::InRestaurant, MenuItem::Hummous), 2);
    assert_eq!(summary.quantity(Channel::Takeaway, MenuItem::Hummous), 5);
    assert_eq!(summary.quantity(Channel::Takeaway, MenuItem::Cola), 1);
    assert_eq!(summary.quantity(Channel::InRestaurant, MenuItem::Cola), 0);
}

#[test]
fn test_channel_counts_sum_to_total() {
    let mut aggregator = SummaryAggregator::new();
    for order in sample_orders() {
        aggregator.accumulate(&order);
    }
    let summary = aggregator.finalize();

    assert_eq!(
        summary.channel_orders(Channel::InRestaurant) + summary.channel_orders(Channel::Takeaway),
        summary.total_orders()
    );
}

#[test]
fn test_item_channel_totals_sum_to_combined() {
    let mut aggregator = SummaryAggregator::new();
    for order in sample_orders() {
        aggregator.accumulate(&order);
    }
    let summary = aggregator.finalize();

    for totals in summary.item_totals() {
        assert_eq!(totals.in_restaurant + totals.takeaway, totals.combined());
    }
    assert_eq!(summary.item_totals()[MenuItem::Hummous.index()].combined(), 3);
}

#[test]
fn test_aggregation_is_order_independent() {
    let orders = sample_orders();

    let mut forward = SummaryAggregator::new();
    for order in &orders {
        forward.accumulate(order);
    }

    let mut reversed = SummaryAggregator::new();
    for order in orders.iter().rev() {
        reversed.accumulate(order);
    }

    let mut rotated = SummaryAggregator::new();
    for order in orders.iter().cycle().skip(2).take(orders.len()) {
        rotated.accumulate(order);
    }

    let forward = forward.finalize();
    assert_eq!(forward, reversed.finalize());
    assert_eq!(forward, rotated.finalize());
}

#[test]
fn test_zero_quantity_order_counts_but_adds_nothing() {
    let mut aggregator = SummaryAggregator::new();
    aggregator.accumulate(&order(Channel::InRestaurant, MenuItem::Tea, 0));

    let summary = aggregator.finalize();
    assert_eq!(summary.total_orders(), 1);
    assert_eq!(summary.quantity(Channel::InRestaurant, MenuItem::Tea), 0);
}
