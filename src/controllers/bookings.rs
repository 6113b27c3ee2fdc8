//! bookings.rs
//!
//! The ticket purchase flow.
//!
//! Covers the following functionality:
//! - Soliciting seat coordinates from the customer.
//! - Validating coordinates before the grid is consulted.
//! - Marking the seat occupied and reporting the ticket price.
//!
//! Rejections are reported and re-solicited in a retry loop; exactly
//! one seat is sold per invocation and nothing is mutated on a
//! failed attempt.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{info, warn};

use crate::console::{Console, ConsoleError};
use crate::models::{Hall, RowSeat, SeatStatus};
use crate::services::pricing;

/// Why a purchase attempt was rejected. The display text is the
/// message shown to the customer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Wrong input!")]
    OutOfBounds,
    #[error("That ticket has already been purchased!")]
    AlreadyPurchased,
}

/// Interactive purchase: prompt for coordinates until a free,
/// in-bounds seat is booked, then report its price.
pub fn buy_ticket<R: BufRead, W: Write>(
    hall: &mut Hall,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    loop {
        let seat = prompt_seat(console)?;
        match book_seat(hall, seat) {
            Ok(price) => {
                info!(row = seat.row, seat = seat.seat, price, "ticket sold");
                console.line(&format!("Ticket price: ${price}"))?;
                return Ok(());
            }
            Err(err) => {
                warn!(row = seat.row, seat = seat.seat, %err, "purchase rejected");
                console.line(&err.to_string())?;
            }
        }
    }
}

/// Validate the coordinates and sell the seat. The hall is untouched
/// on every error path; the grid is not consulted for out-of-bounds
/// coordinates at all.
pub fn book_seat(hall: &mut Hall, seat: RowSeat) -> Result<u32, BookingError> {
    if !hall.contains(seat) {
        return Err(BookingError::OutOfBounds);
    }
    if hall.status(seat) == SeatStatus::Occupied {
        return Err(BookingError::AlreadyPurchased);
    }
    hall.occupy(seat);
    Ok(pricing::ticket_price(hall.dimensions(), seat.row))
}

fn prompt_seat<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<RowSeat, ConsoleError> {
    console.blank()?;
    let row = console.prompt_u32("Enter a row number:")?;
    let seat = console.prompt_u32("Enter a seat number in that row:")?;
    Ok(RowSeat { row, seat })
}
