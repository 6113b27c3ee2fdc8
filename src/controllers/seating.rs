use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::{Console, ConsoleError};
use crate::models::{Hall, RowSeat};

/// Print the seating map: a header of seat numbers, then one line per
/// row with `S`/`B` markers.
pub fn show_seats<R: BufRead, W: Write>(
    hall: &Hall,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    debug!(purchased = hall.purchased(), "rendering seating map");

    console.blank()?;
    console.line("Cinema:")?;

    let mut header = String::from(" ");
    for seat in 1..=hall.seats_per_row() {
        header.push_str(&format!(" {seat}"));
    }
    console.line(&header)?;

    for row in 1..=hall.rows() {
        let mut line = row.to_string();
        for seat in 1..=hall.seats_per_row() {
            line.push(' ');
            line.push(hall.status(RowSeat { row, seat }).marker());
        }
        console.line(&line)?;
    }
    Ok(())
}
