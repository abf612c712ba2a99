//! Order aggregation into daily sales totals
//!
//! The aggregator is an explicit accumulator with a construct, accumulate,
//! finalize, discard lifecycle. `finalize` consumes it and freezes the
//! totals into an immutable [`SalesSummary`].

use serde::Serialize;

use crate::app::models::{Channel, MenuItem, Order};

/// Running totals over a stream of accepted orders
///
/// Orders reaching the aggregator are already validated; it never rejects
/// one. All counters are commutative sums, so the finalized summary does
/// not depend on accumulation order.
#[derive(Debug, Default)]
pub struct SummaryAggregator {
    total_orders: u64,
    channel_orders: [u64; Channel::ALL.len()],
    quantities: [[u64; MenuItem::ALL.len()]; Channel::ALL.len()],
}

impl SummaryAggregator {
    /// Create a new empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one accepted order into the running totals
    pub fn accumulate(&mut self, order: &Order) {
        self.total_orders += 1;
        self.channel_orders[order.channel.index()] += 1;
        self.quantities[order.channel.index()][order.item.index()] +=
            u64::from(order.quantity);
    }

    /// Freeze the totals into an immutable summary
    pub fn finalize(self) -> SalesSummary {
        let item_totals = MenuItem::ALL
            .iter()
            .map(|&item| ItemTotals {
                item,
                in_restaurant: self.quantities[Channel::InRestaurant.index()][item.index()],
                takeaway: self.quantities[Channel::Takeaway.index()][item.index()],
            })
            .collect();

        SalesSummary {
            total_orders: self.total_orders,
            in_restaurant_orders: self.channel_orders[Channel::InRestaurant.index()],
            takeaway_orders: self.channel_orders[Channel::Takeaway.index()],
            item_totals,
        }
    }
}

/// Quantity totals for one menu item, split by channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemTotals {
    /// The menu item these totals belong to
    pub item: MenuItem,

    /// Units sold in-restaurant
    pub in_restaurant: u64,

    /// Units sold as takeaway
    pub takeaway: u64,
}

impl ItemTotals {
    /// Units sold across both channels
    pub fn combined(&self) -> u64 {
        self.in_restaurant + self.takeaway
    }
}

/// The finalized daily sales summary
///
/// Built once per run from the full set of valid orders and immutable
/// afterwards: fields are private and exposed through read accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    total_orders: u64,
    in_restaurant_orders: u64,
    takeaway_orders: u64,
    item_totals: Vec<ItemTotals>,
}

impl SalesSummary {
    /// Total number of accepted orders
    pub fn total_orders(&self) -> u64 {
        self.total_orders
    }

    /// Number of accepted orders on one channel
    pub fn channel_orders(&self, channel: Channel) -> u64 {
        match channel {
            Channel::InRestaurant => self.in_restaurant_orders,
            Channel::Takeaway => self.takeaway_orders,
        }
    }

    /// Per-item quantity totals, in report display order
    pub fn item_totals(&self) -> &[ItemTotals] {
        &self.item_totals
    }

    /// Units of one item sold on one channel
    pub fn quantity(&self, channel: Channel, item: MenuItem) -> u64 {
        let totals = &self.item_totals[item.index()];
        match channel {
            Channel::InRestaurant => totals.in_restaurant,
            Channel::Takeaway => totals.takeaway,
        }
    }
}
