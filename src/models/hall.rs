use serde::{Deserialize, Serialize};
use validator::Validate;

use super::seat::{RowSeat, SeatStatus};

/// Auditorium dimensions entered at startup. Capped at 1000 on each
/// axis to keep hostile input from allocating an absurd grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HallDimensions {
    #[validate(range(min = 1, max = 1000))]
    pub rows: u32,
    #[validate(range(min = 1, max = 1000))]
    pub seats_per_row: u32,
}

/// Seating state of one auditorium, stored row-major. Coordinates are
/// 1-based; `seats_per_row` is the row stride for every access, so the
/// seat a customer books is the seat the map shows.
#[derive(Debug, Clone, Serialize)]
pub struct Hall {
    dims: HallDimensions,
    seats: Vec<SeatStatus>,
}

impl Hall {
    pub fn new(dims: HallDimensions) -> Self {
        let capacity = (dims.rows * dims.seats_per_row) as usize;
        Hall {
            dims,
            seats: vec![SeatStatus::Available; capacity],
        }
    }

    pub fn dimensions(&self) -> HallDimensions {
        self.dims
    }

    pub fn rows(&self) -> u32 {
        self.dims.rows
    }

    pub fn seats_per_row(&self) -> u32 {
        self.dims.seats_per_row
    }

    pub fn capacity(&self) -> u32 {
        self.dims.rows * self.dims.seats_per_row
    }

    /// Whether the coordinates name a seat in this hall.
    pub fn contains(&self, seat: RowSeat) -> bool {
        seat.row >= 1
            && seat.seat >= 1
            && seat.row <= self.dims.rows
            && seat.seat <= self.dims.seats_per_row
    }

    // Row-major linear index; callers have bounds-checked already.
    fn index_of(&self, seat: RowSeat) -> usize {
        debug_assert!(self.contains(seat));
        ((seat.row - 1) * self.dims.seats_per_row + (seat.seat - 1)) as usize
    }

    /// Current state of an in-bounds seat.
    pub fn status(&self, seat: RowSeat) -> SeatStatus {
        self.seats[self.index_of(seat)]
    }

    /// Mark an in-bounds seat occupied. Occupancy never reverts.
    pub fn occupy(&mut self, seat: RowSeat) {
        let index = self.index_of(seat);
        self.seats[index] = SeatStatus::Occupied;
    }

    /// Number of seats sold so far.
    pub fn purchased(&self) -> u32 {
        self.seats
            .iter()
            .filter(|status| **status == SeatStatus::Occupied)
            .count() as u32
    }

    /// 1-based row of every occupied seat, derived from the linear
    /// index with the same stride used for addressing.
    pub fn occupied_rows(&self) -> impl Iterator<Item = u32> + '_ {
        let stride = self.dims.seats_per_row as usize;
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == SeatStatus::Occupied)
            .map(move |(index, _)| (index / stride) as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dims(rows: u32, seats_per_row: u32) -> HallDimensions {
        HallDimensions {
            rows,
            seats_per_row,
        }
    }

    #[test]
    fn new_hall_is_fully_available() {
        let hall = Hall::new(dims(3, 5));
        assert_eq!(hall.capacity(), 15);
        for row in 1..=3 {
            for seat in 1..=5 {
                assert_eq!(hall.status(RowSeat { row, seat }), SeatStatus::Available);
            }
        }
    }

    #[test]
    fn occupy_marks_exactly_one_seat() {
        let mut hall = Hall::new(dims(3, 5));
        hall.occupy(RowSeat { row: 2, seat: 3 });

        assert_eq!(hall.purchased(), 1);
        assert_eq!(hall.occupied_rows().collect::<Vec<_>>(), vec![2]);
        for row in 1..=3 {
            for seat in 1..=5 {
                let expected = if (row, seat) == (2, 3) {
                    SeatStatus::Occupied
                } else {
                    SeatStatus::Available
                };
                assert_eq!(hall.status(RowSeat { row, seat }), expected);
            }
        }
    }

    #[test]
    fn non_square_hall_keeps_rows_apart() {
        // (1,4) and (2,1) are adjacent linear indices in a 2x4 hall;
        // a wrong stride would conflate them.
        let mut hall = Hall::new(dims(2, 4));
        hall.occupy(RowSeat { row: 1, seat: 4 });

        assert_eq!(hall.status(RowSeat { row: 2, seat: 1 }), SeatStatus::Available);
        assert_eq!(hall.status(RowSeat { row: 1, seat: 4 }), SeatStatus::Occupied);
        assert_eq!(hall.occupied_rows().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn dimension_bounds_are_validated() {
        use validator::Validate;

        assert!(dims(1, 1).validate().is_ok());
        assert!(dims(1000, 1000).validate().is_ok());
        assert!(dims(0, 5).validate().is_err());
        assert!(dims(5, 0).validate().is_err());
        assert!(dims(1001, 1).validate().is_err());
    }

    proptest! {
        #[test]
        fn capacity_matches_dimensions(rows in 1u32..=20, seats_per_row in 1u32..=20) {
            let hall = Hall::new(dims(rows, seats_per_row));
            prop_assert_eq!(hall.capacity(), rows * seats_per_row);
            prop_assert_eq!(hall.purchased(), 0);
        }

        #[test]
        fn booking_and_readback_agree(
            rows in 1u32..=20,
            seats_per_row in 1u32..=20,
            row_pick in 0u32..20,
            seat_pick in 0u32..20,
        ) {
            let mut hall = Hall::new(dims(rows, seats_per_row));
            let seat = RowSeat {
                row: row_pick % rows + 1,
                seat: seat_pick % seats_per_row + 1,
            };
            hall.occupy(seat);
            prop_assert_eq!(hall.status(seat), SeatStatus::Occupied);
            prop_assert_eq!(hall.purchased(), 1);
            prop_assert_eq!(hall.occupied_rows().collect::<Vec<_>>(), vec![seat.row]);
        }
    }
}
