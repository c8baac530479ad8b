pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::HotelConfig};
pub use core::hotel::{AddOutcome, CheckInReceipt, CheckOutReceipt, Hotel, SaveStatus};
pub use domain::model::{Bill, Room, RoomKind};
pub use utils::error::{HotelError, Result};
