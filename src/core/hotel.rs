use crate::core::Storage;
use crate::domain::model::{Bill, Room};
use crate::domain::record::RoomRecord;
use crate::utils::error::{HotelError, Result};
use crate::utils::validation::validate_price;
use serde::Serialize;

/// 變更後寫檔的結果。寫檔失敗不影響記憶體中的狀態
#[derive(Debug)]
pub enum SaveStatus {
    Saved,
    Failed(HotelError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

impl From<Result<()>> for SaveStatus {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => SaveStatus::Saved,
            Err(e) => SaveStatus::Failed(e),
        }
    }
}

#[derive(Debug)]
pub enum AddOutcome {
    Added(SaveStatus),
    AlreadyExists,
    /// 房價不是有限的非負數，無法寫入 JSON
    Rejected(HotelError),
}

#[derive(Debug)]
pub struct CheckInReceipt {
    pub room_number: u32,
    pub guest_name: String,
    pub check_in_time: String,
    pub save: SaveStatus,
}

#[derive(Debug)]
pub struct CheckOutReceipt {
    pub room_number: u32,
    pub bill: Bill,
    pub save: SaveStatus,
}

pub struct Hotel<S: Storage> {
    name: String,
    rooms: Vec<Room>,
    storage: S,
}

impl<S: Storage> Hotel<S> {
    /// 建立飯店並立即載入存檔；載入失敗只記錄，不中斷
    pub fn open(name: impl Into<String>, storage: S) -> Self {
        let mut hotel = Self {
            name: name.into(),
            rooms: Vec::new(),
            storage,
        };
        let _ = hotel.load();
        hotel
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 依加入順序排列，也就是顯示順序
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn find_room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    pub fn find_room_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number() == number)
    }

    pub fn add_room(&mut self, room: Room) -> AddOutcome {
        if self.find_room(room.number()).is_some() {
            tracing::warn!("Room {} already exists, skipping", room.number());
            return AddOutcome::AlreadyExists;
        }

        if let Err(e) = validate_price("price", room.price()) {
            tracing::warn!("Room {} rejected: {}", room.number(), e);
            return AddOutcome::Rejected(e);
        }

        tracing::debug!("Adding room: {}", room);
        self.rooms.push(room);
        AddOutcome::Added(self.persist())
    }

    /// 只有在飯店沒有任何房間時才加入預設房間，回傳實際加入的數量
    pub fn seed_if_empty(&mut self, rooms: impl IntoIterator<Item = Room>) -> usize {
        if !self.rooms.is_empty() {
            return 0;
        }

        tracing::info!("🏨 No rooms found, creating initial rooms (first start)");
        let mut added = 0;
        for room in rooms {
            if let AddOutcome::Added(_) = self.add_room(room) {
                added += 1;
            }
        }
        added
    }

    pub fn check_in(&mut self, number: u32, guest_name: &str) -> Result<CheckInReceipt> {
        let room = self
            .find_room_mut(number)
            .ok_or(HotelError::RoomNotFound { number })?;

        if !room.check_in(guest_name) {
            return Err(HotelError::RoomOccupied {
                number,
                guest: room.guest_name().unwrap_or_default().to_string(),
            });
        }
        let check_in_time = room.check_in_time().unwrap_or_default().to_string();

        tracing::info!("🛎️ {} checked into room {}", guest_name, number);
        Ok(CheckInReceipt {
            room_number: number,
            guest_name: guest_name.to_string(),
            check_in_time,
            save: self.persist(),
        })
    }

    pub fn check_out(&mut self, number: u32) -> Result<CheckOutReceipt> {
        let room = self
            .find_room_mut(number)
            .ok_or(HotelError::RoomNotFound { number })?;

        let bill = room.check_out().ok_or(HotelError::RoomVacant { number })?;

        tracing::info!(
            "🧾 {} checked out of room {}, amount due {:.2}",
            bill.guest,
            number,
            bill.amount
        );
        Ok(CheckOutReceipt {
            room_number: number,
            bill,
            save: self.persist(),
        })
    }

    /// 將所有房間整份寫回儲存後端
    pub fn save(&self) -> Result<()> {
        let records: Vec<RoomRecord> = self.rooms.iter().map(Room::serialize).collect();
        let result = encode_records(&records).and_then(|data| self.storage.write(&data));

        match &result {
            Ok(()) => tracing::debug!(
                "Saved {} rooms to {}",
                records.len(),
                self.storage.location()
            ),
            Err(e) => tracing::error!(
                "❌ Failed to save hotel data to {}: {}",
                self.storage.location(),
                e
            ),
        }
        result
    }

    /// 從儲存後端重建房間列表。沒有存檔時保持原狀；
    /// 中途失敗時保留已還原的房間
    pub fn load(&mut self) -> Result<usize> {
        let result = self.load_records();

        match &result {
            Ok(count) => tracing::info!(
                "📂 Loaded {} rooms from {}",
                count,
                self.storage.location()
            ),
            Err(e) => tracing::error!(
                "❌ Failed to load hotel data from {}: {}",
                self.storage.location(),
                e
            ),
        }
        result
    }

    /// 手動重新讀取目前狀態
    pub fn reload(&mut self) -> Result<usize> {
        self.load()
    }

    fn load_records(&mut self) -> Result<usize> {
        let Some(data) = self.storage.read()? else {
            tracing::debug!("No hotel data at {}", self.storage.location());
            return Ok(0);
        };

        let entries: Vec<serde_json::Value> = serde_json::from_slice(&data)?;

        self.rooms.clear();
        for (index, entry) in entries.into_iter().enumerate() {
            let record: RoomRecord =
                serde_json::from_value(entry).map_err(|e| HotelError::CorruptRecord {
                    index,
                    reason: e.to_string(),
                })?;

            if self.find_room(record.number).is_some() {
                return Err(HotelError::CorruptRecord {
                    index,
                    reason: format!("duplicate room number {}", record.number),
                });
            }
            self.rooms.push(record.into_room(index)?);
        }

        Ok(self.rooms.len())
    }

    fn persist(&self) -> SaveStatus {
        self.save().into()
    }
}

fn encode_records(records: &[RoomRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}
