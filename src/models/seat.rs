use serde::{Deserialize, Serialize};

/// Occupancy state of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Available,
    Occupied,
}

impl SeatStatus {
    /// Marker used on the seating map.
    pub fn marker(self) -> char {
        match self {
            SeatStatus::Available => 'S',
            SeatStatus::Occupied => 'B',
        }
    }
}

/// 1-based seat coordinates as entered by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSeat {
    pub row: u32,
    pub seat: u32,
}
