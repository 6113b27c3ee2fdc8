pub mod analytics;
pub mod bookings;
pub mod seating;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};
use validator::Validate;

use crate::console::{Console, ConsoleError};
use crate::models::HallDimensions;
use crate::AppState;

/// Solicit hall dimensions until they validate.
pub fn prompt_dimensions<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<HallDimensions, ConsoleError> {
    loop {
        let rows = console.prompt_u32("Enter the number of rows:")?;
        let seats_per_row = console.prompt_u32("Enter the number of seats in each row:")?;
        let dims = HallDimensions {
            rows,
            seats_per_row,
        };
        if dims.validate().is_ok() {
            return Ok(dims);
        }
        warn!(rows, seats_per_row, "rejected hall dimensions");
        console.line("Wrong input!")?;
    }
}

/// Main menu loop: one dispatched flow per iteration until exit.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    loop {
        print_menu(console)?;
        let selection = match console.read_selection() {
            Ok(Some(selection)) => selection,
            Ok(None) => continue,
            // Closed stdin at the menu ends the session like `0` does.
            Err(ConsoleError::Eof) => {
                info!("input stream closed, ending session");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        match selection {
            0 => {
                info!("session ended");
                return Ok(());
            }
            1 => seating::show_seats(&state.hall, console)?,
            2 => bookings::buy_ticket(&mut state.hall, console)?,
            3 => analytics::show_statistics(&state.hall, console)?,
            other => debug!(selection = other, "ignoring unknown menu selection"),
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
    console.blank()?;
    console.line("1. Show the seats")?;
    console.line("2. Buy a ticket")?;
    console.line("3. Statistics")?;
    console.line("0. Exit")?;
    Ok(())
}
