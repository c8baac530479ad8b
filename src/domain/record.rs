use crate::domain::model::{Room, RoomKind, Stay};
use crate::utils::error::{HotelError, Result};
use serde::{Deserialize, Serialize};

pub const STANDARD_TYPE: &str = "Standard";
pub const SUITE_TYPE: &str = "Suite";

/// 存檔中的一筆房間資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    #[serde(rename = "type")]
    pub room_type: String,
    pub number: u32,
    pub capacity: u32,
    pub price: f64,
    pub occupied: bool,
    #[serde(default)]
    pub guest: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whirlpool: Option<bool>,
}

impl Room {
    pub fn serialize(&self) -> RoomRecord {
        let (room_type, whirlpool) = match self.kind() {
            RoomKind::Standard => (STANDARD_TYPE, None),
            RoomKind::Suite { has_whirlpool } => (SUITE_TYPE, Some(has_whirlpool)),
        };

        RoomRecord {
            room_type: room_type.to_string(),
            number: self.number(),
            capacity: self.capacity(),
            price: self.price(),
            occupied: self.is_occupied(),
            guest: self.guest_name().map(str::to_string),
            time: self.check_in_time().map(str::to_string),
            whirlpool,
        }
    }
}

impl RoomRecord {
    /// 依 `type` 還原房型；不是 "Suite" 的一律視為標準房
    pub fn into_room(self, index: usize) -> Result<Room> {
        let kind = if self.room_type == SUITE_TYPE {
            RoomKind::Suite {
                has_whirlpool: self.whirlpool.unwrap_or(false),
            }
        } else {
            RoomKind::Standard
        };

        let stay = match (self.occupied, self.guest, self.time) {
            (true, Some(guest_name), Some(check_in_time)) => Some(Stay {
                guest_name,
                check_in_time,
            }),
            (false, None, None) => None,
            (occupied, guest, time) => {
                return Err(HotelError::CorruptRecord {
                    index,
                    reason: format!(
                        "room {} has occupied={} but guest={:?}, time={:?}",
                        self.number, occupied, guest, time
                    ),
                })
            }
        };

        Ok(Room::new(self.number, self.capacity, self.price, kind).with_stay(stay))
    }
}
