use serde::Serialize;

use crate::models::order_models::{OrderSelection, ShippingRegion};

pub const BASE_PRICE: f64 = 4.20;
pub const CUSTOM_BLESSING_COST: f64 = 5.00;
pub const EXTRA_ITEM_SHIPPING: f64 = 2.00;

/// (minimum quantity, price multiplier), largest tier first.
const DISCOUNT_TIERS: [(u32, f64); 2] = [(12, 0.85), (4, 0.92)];

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub price_per_unit: f64,
    pub items_cost: f64,
    pub shipping_cost: f64,
    pub custom_cost: f64,
    pub tithing: f64,
    pub total: f64,
}

impl PriceBreakdown {
    /// The only place the total gets rounded.
    pub fn display_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}

pub fn price_per_unit(quantity: u32) -> f64 {
    DISCOUNT_TIERS
        .iter()
        .find(|(min, _)| quantity >= *min)
        .map(|(_, multiplier)| BASE_PRICE * multiplier)
        .unwrap_or(BASE_PRICE)
}

pub fn shipping_cost(region: ShippingRegion, quantity: u32) -> f64 {
    let extra_items = quantity.saturating_sub(1) as f64;
    region.base_rate().max(0.0) + extra_items * EXTRA_ITEM_SHIPPING
}

pub fn compute_breakdown(
    quantity: u32,
    region: ShippingRegion,
    custom_blessing: bool,
    tithing_amount: f64,
) -> PriceBreakdown {
    let quantity = quantity.max(1);
    let price_per_unit = price_per_unit(quantity);
    let items_cost = price_per_unit * quantity as f64;
    let shipping_cost = shipping_cost(region, quantity);
    let custom_cost = if custom_blessing { CUSTOM_BLESSING_COST } else { 0.0 };
    let tithing = if tithing_amount.is_finite() && tithing_amount > 0.0 {
        tithing_amount
    } else {
        0.0
    };
    PriceBreakdown {
        price_per_unit,
        items_cost,
        shipping_cost,
        custom_cost,
        tithing,
        total: items_cost + custom_cost + shipping_cost + tithing,
    }
}

pub fn quote(selection: &OrderSelection) -> PriceBreakdown {
    compute_breakdown(
        selection.quantity,
        selection.shipping_region,
        selection.custom_blessing,
        selection.tithing_amount,
    )
}

pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}
