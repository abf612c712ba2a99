//! Data models for invoice processing
//!
//! This module contains the core data structures for representing a single
//! restaurant order: the sales channel, the menu item, and the validated
//! order record itself.

use crate::constants::{CHANNEL_IN, CHANNEL_OUT, PRICE_TOLERANCE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Sales Channel
// =============================================================================

/// Sales channel of an order: eaten in the restaurant or taken away
///
/// Invoice files carry the channel as the `OrderType` field with the wire
/// values `IN` / `OUT`, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    InRestaurant,
    Takeaway,
}

impl Channel {
    /// All channels, in report section order
    pub const ALL: [Channel; 2] = [Channel::InRestaurant, Channel::Takeaway];

    /// Resolve a raw `OrderType` invoice value into a channel
    ///
    /// Matching is case-insensitive; surrounding whitespace is the caller's
    /// responsibility. Returns `None` for any value other than `IN`/`OUT`.
    pub fn from_invoice_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            v if v == CHANNEL_IN => Some(Channel::InRestaurant),
            v if v == CHANNEL_OUT => Some(Channel::Takeaway),
            _ => None,
        }
    }

    /// Dense index for per-channel counter arrays
    pub fn index(&self) -> usize {
        match self {
            Channel::InRestaurant => 0,
            Channel::Takeaway => 1,
        }
    }
}

// =============================================================================
// Menu Items
// =============================================================================

/// The six items on the menu
///
/// Each item carries a fixed unit label used in the summary report
/// regardless of channel (e.g. "Tea (cups)").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuItem {
    Hummous,
    Fool,
    Falafel,
    Tea,
    Cola,
    Water,
}

impl MenuItem {
    /// All menu items, in report display order
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Hummous,
        MenuItem::Fool,
        MenuItem::Falafel,
        MenuItem::Tea,
        MenuItem::Cola,
        MenuItem::Water,
    ];

    /// Resolve a raw `Item` invoice value into a menu item
    ///
    /// Matching is case-insensitive. Returns `None` for anything not on the
    /// menu.
    pub fn from_invoice_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hummous" => Some(MenuItem::Hummous),
            "fool" => Some(MenuItem::Fool),
            "falafel" => Some(MenuItem::Falafel),
            "tea" => Some(MenuItem::Tea),
            "cola" => Some(MenuItem::Cola),
            "water" => Some(MenuItem::Water),
            _ => None,
        }
    }

    /// Canonical display name (e.g. "Hummous")
    pub fn name(&self) -> &'static str {
        match self {
            MenuItem::Hummous => "Hummous",
            MenuItem::Fool => "Fool",
            MenuItem::Falafel => "Falafel",
            MenuItem::Tea => "Tea",
            MenuItem::Cola => "Cola",
            MenuItem::Water => "Water",
        }
    }

    /// Unit label shown in the summary report
    pub fn unit(&self) -> &'static str {
        match self {
            MenuItem::Hummous | MenuItem::Fool => "dishes",
            MenuItem::Falafel => "portions",
            MenuItem::Tea => "cups",
            MenuItem::Cola => "cans",
            MenuItem::Water => "bottles",
        }
    }

    /// Dense index for per-item counter arrays
    pub fn index(&self) -> usize {
        match self {
            MenuItem::Hummous => 0,
            MenuItem::Fool => 1,
            MenuItem::Falafel => 2,
            MenuItem::Tea => 3,
            MenuItem::Cola => 4,
            MenuItem::Water => 5,
        }
    }
}

// =============================================================================
// Order Record
// =============================================================================

/// A single validated restaurant order, parsed from one invoice file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Sales channel (in-restaurant or takeaway)
    pub channel: Channel,

    /// Ordered menu item
    pub item: MenuItem,

    /// Number of units ordered
    pub quantity: u32,

    /// Unit price as stated on the invoice
    pub price_per_item: f64,

    /// Total price as stated on the invoice
    pub total_price: f64,

    /// Identifier of the invoice this order was read from
    pub source: String,
}

impl Order {
    /// Create a new order with validation
    pub fn new(
        channel: Channel,
        item: MenuItem,
        quantity: u32,
        price_per_item: f64,
        total_price: f64,
        source: String,
    ) -> Result<Self> {
        if !price_per_item.is_finite() || price_per_item < 0.0 {
            return Err(Error::data_validation(format!(
                "Price per item must be a non-negative number, got {}",
                price_per_item
            )));
        }

        if !total_price.is_finite() || total_price < 0.0 {
            return Err(Error::data_validation(format!(
                "Total price must be a non-negative number, got {}",
                total_price
            )));
        }

        Ok(Self {
            channel,
            item,
            quantity,
            price_per_item,
            total_price,
            source,
        })
    }

    /// Total price implied by quantity and unit price
    pub fn expected_total(&self) -> f64 {
        self.quantity as f64 * self.price_per_item
    }

    /// Absolute difference between the stated and the implied total
    pub fn price_discrepancy(&self) -> f64 {
        (self.expected_total() - self.total_price).abs()
    }

    /// Whether the stated total is within the tolerated discrepancy
    pub fn price_consistent(&self) -> bool {
        self.price_discrepancy() <= PRICE_TOLERANCE
    }
}
