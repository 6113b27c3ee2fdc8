//! analytics.rs
//!
//! Sales statistics over the current seating state.
//!
//! Covers the following functionality:
//! - Counting purchased tickets and the share of capacity sold.
//! - Computing the income collected so far.
//! - Computing the maximum income of the fully booked hall.
//!
//! Everything is computed on demand from the grid; nothing is cached.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::info;

use crate::console::{Console, ConsoleError};
use crate::models::Hall;
use crate::services::pricing;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub purchased_tickets: u32,
    pub purchased_percentage: f64,
    pub current_income: u32,
    pub total_income: u32,
}

/// Compute the statistics for the current state of the hall.
pub fn statistics(hall: &Hall) -> Statistics {
    let dims = hall.dimensions();
    let purchased_tickets = hall.purchased();
    let current_income = hall
        .occupied_rows()
        .map(|row| pricing::ticket_price(dims, row))
        .sum();

    Statistics {
        purchased_tickets,
        purchased_percentage: f64::from(purchased_tickets) / f64::from(hall.capacity()) * 100.0,
        current_income,
        total_income: pricing::total_income(dims),
    }
}

/// Print the statistics report.
pub fn show_statistics<R: BufRead, W: Write>(
    hall: &Hall,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    let stats = statistics(hall);
    info!(
        purchased = stats.purchased_tickets,
        current_income = stats.current_income,
        "statistics requested"
    );

    console.blank()?;
    console.line(&format!(
        "Number of purchased tickets: {}",
        stats.purchased_tickets
    ))?;
    console.line(&format!("Percentage: {:.2}%", stats.purchased_percentage))?;
    console.line(&format!("Current income: ${}", stats.current_income))?;
    console.line(&format!("Total income: ${}", stats.total_income))?;
    Ok(())
}
