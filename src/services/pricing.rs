//! pricing.rs
//!
//! Ticket pricing policy. Pure functions of the hall dimensions and a
//! row number; nothing here reads or writes seating state.

use crate::models::HallDimensions;

/// Halls at or below this capacity charge the premium rate everywhere.
pub const SMALL_HALL_MAX_OCCUPANCY: u32 = 60;
/// Rate for small halls and the front half of large ones.
pub const PREMIUM_PRICE: u32 = 10;
/// Rate for the back half of large halls.
pub const BUDGET_PRICE: u32 = 8;

/// Price of a seat in the given row.
pub fn ticket_price(dims: HallDimensions, row: u32) -> u32 {
    if dims.rows * dims.seats_per_row <= SMALL_HALL_MAX_OCCUPANCY {
        PREMIUM_PRICE
    } else if row <= dims.rows / 2 {
        PREMIUM_PRICE
    } else {
        BUDGET_PRICE
    }
}

/// Revenue of the fully booked hall.
pub fn total_income(dims: HallDimensions) -> u32 {
    (1..=dims.rows)
        .map(|row| dims.seats_per_row * ticket_price(dims, row))
        .sum()
}
