use chrono::Local;
use std::fmt;

/// 入住時間的格式（ISO-8601，本地時間，微秒精度）
pub const CHECK_IN_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// 房型：標準房或附帶按摩浴缸旗標的套房
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Standard,
    Suite { has_whirlpool: bool },
}

/// 一次入住：房客姓名與入住時間必定同時存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    pub guest_name: String,
    pub check_in_time: String,
}

/// 退房時產生的帳單，金額固定為房價（每次住宿計費一次）
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub guest: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    number: u32,
    capacity: u32,
    price: f64,
    kind: RoomKind,
    stay: Option<Stay>,
}

impl Room {
    pub fn standard(number: u32, capacity: u32, price: f64) -> Self {
        Self::new(number, capacity, price, RoomKind::Standard)
    }

    pub fn suite(number: u32, capacity: u32, price: f64, has_whirlpool: bool) -> Self {
        Self::new(number, capacity, price, RoomKind::Suite { has_whirlpool })
    }

    pub fn new(number: u32, capacity: u32, price: f64, kind: RoomKind) -> Self {
        Self {
            number,
            capacity,
            price,
            kind,
            stay: None,
        }
    }

    /// 還原已入住的狀態（從存檔載入時使用）
    pub fn with_stay(mut self, stay: Option<Stay>) -> Self {
        self.stay = stay;
        self
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn stay(&self) -> Option<&Stay> {
        self.stay.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.stay.is_some()
    }

    pub fn guest_name(&self) -> Option<&str> {
        self.stay.as_ref().map(|s| s.guest_name.as_str())
    }

    pub fn check_in_time(&self) -> Option<&str> {
        self.stay.as_ref().map(|s| s.check_in_time.as_str())
    }

    pub fn check_in(&mut self, guest_name: &str) -> bool {
        let now = Local::now().naive_local();
        self.check_in_at(guest_name, now.format(CHECK_IN_TIME_FORMAT).to_string())
    }

    pub(crate) fn check_in_at(&mut self, guest_name: &str, check_in_time: String) -> bool {
        if self.is_occupied() {
            return false;
        }
        self.stay = Some(Stay {
            guest_name: guest_name.to_string(),
            check_in_time,
        });
        true
    }

    /// 退房並結帳；空房時回傳 `None`
    pub fn check_out(&mut self) -> Option<Bill> {
        // 不論住了多久都只收一次房價
        let stay = self.stay.take()?;
        Some(Bill {
            guest: stay.guest_name,
            amount: self.price,
        })
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            RoomKind::Standard => "Standard".to_string(),
            RoomKind::Suite {
                has_whirlpool: true,
            } => "Suite with whirlpool".to_string(),
            RoomKind::Suite {
                has_whirlpool: false,
            } => "Suite".to_string(),
        };
        let status = match &self.stay {
            Some(stay) => format!("Occupied ({})", stay.guest_name),
            None => "Vacant".to_string(),
        };
        write!(
            f,
            "No. {} ({}) - {} - {:.2}/stay",
            self.number, kind, status, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_occupancy_invariant(room: &Room) {
        assert_eq!(room.is_occupied(), room.guest_name().is_some());
        assert_eq!(room.is_occupied(), room.check_in_time().is_some());
    }

    #[test]
    fn test_check_in_sets_guest_and_time() {
        let mut room = Room::standard(101, 2, 80.0);
        assert!(!room.is_occupied());
        assert_occupancy_invariant(&room);

        assert!(room.check_in("Alice"));
        assert!(room.is_occupied());
        assert_eq!(room.guest_name(), Some("Alice"));
        let time = room.check_in_time().unwrap();
        assert!(
            chrono::NaiveDateTime::parse_from_str(time, CHECK_IN_TIME_FORMAT).is_ok(),
            "unexpected timestamp: {}",
            time
        );
        assert_occupancy_invariant(&room);
    }

    #[test]
    fn test_check_in_on_occupied_room_fails_without_change() {
        let mut room = Room::standard(101, 2, 80.0);
        assert!(room.check_in_at("Alice", "2025-01-01T10:00:00.000000".to_string()));
        let before = room.clone();

        assert!(!room.check_in("Bob"));
        assert_eq!(room, before);
        assert_occupancy_invariant(&room);
    }

    #[test]
    fn test_check_out_bills_flat_price() {
        let mut room = Room::suite(201, 2, 150.0, true);
        room.check_in_at("Carol", "2020-01-01T00:00:00.000000".to_string());

        let bill = room.check_out().unwrap();
        assert_eq!(bill.guest, "Carol");
        assert_eq!(bill.amount, 150.0);
        assert!(!room.is_occupied());
        assert_occupancy_invariant(&room);
    }

    #[test]
    fn test_check_out_on_vacant_room_returns_none() {
        let mut room = Room::standard(102, 1, 60.0);
        let before = room.clone();
        assert!(room.check_out().is_none());
        assert_eq!(room, before);
    }

    #[test]
    fn test_describe() {
        let mut room = Room::standard(101, 2, 80.0);
        assert_eq!(room.describe(), "No. 101 (Standard) - Vacant - 80.00/stay");

        room.check_in("Alice");
        let text = room.describe();
        assert!(text.contains("101"));
        assert!(text.contains("Occupied (Alice)"));

        let suite = Room::suite(201, 2, 150.0, true);
        assert!(suite.describe().contains("Suite with whirlpool"));
        let plain_suite = Room::suite(203, 2, 120.0, false);
        assert!(!plain_suite.describe().contains("whirlpool"));
    }
}
