pub mod hall;
pub mod seat;

pub use hall::{Hall, HallDimensions};
pub use seat::{RowSeat, SeatStatus};
