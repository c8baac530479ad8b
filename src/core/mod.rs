pub mod hotel;

pub use crate::domain::model::{Bill, Room, RoomKind, Stay};
pub use crate::domain::ports::Storage;
pub use crate::domain::record::RoomRecord;
pub use crate::utils::error::Result;
