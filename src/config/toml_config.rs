use crate::config::cli::LocalStorage;
use crate::core::hotel::Hotel;
use crate::domain::model::Room;
use crate::domain::record::{STANDARD_TYPE, SUITE_TYPE};
use crate::utils::error::{HotelError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "hotel_data.json";

#[derive(Debug, Clone, Deserialize)]
pub struct HotelConfig {
    pub hotel: HotelSection,
    #[serde(default)]
    pub rooms: Vec<RoomSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelSection {
    pub name: String,
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

/// 首次啟動時建立的房間
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomSeed {
    pub number: u32,
    pub capacity: u32,
    pub price: f64,
    #[serde(default, rename = "type")]
    pub room_type: Option<String>,
    #[serde(default)]
    pub whirlpool: Option<bool>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl RoomSeed {
    pub fn standard(number: u32, capacity: u32, price: f64) -> Self {
        Self {
            number,
            capacity,
            price,
            room_type: None,
            whirlpool: None,
        }
    }

    pub fn suite(number: u32, capacity: u32, price: f64, has_whirlpool: bool) -> Self {
        Self {
            number,
            capacity,
            price,
            room_type: Some(SUITE_TYPE.to_string()),
            whirlpool: Some(has_whirlpool),
        }
    }

    pub fn to_room(&self) -> Room {
        match self.room_type.as_deref() {
            Some(SUITE_TYPE) => Room::suite(
                self.number,
                self.capacity,
                self.price,
                self.whirlpool.unwrap_or(false),
            ),
            _ => Room::standard(self.number, self.capacity, self.price),
        }
    }
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            hotel: HotelSection {
                name: "Grand Hotel".to_string(),
                data_file: default_data_file(),
            },
            rooms: vec![
                RoomSeed::standard(101, 2, 80.0),
                RoomSeed::standard(102, 1, 60.0),
                RoomSeed::suite(201, 2, 150.0, true),
                RoomSeed::suite(202, 4, 200.0, true),
            ],
        }
    }
}

impl HotelConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOTEL_DATA_FILE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HotelError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn hotel_name(&self) -> &str {
        &self.hotel.name
    }

    pub fn data_file(&self) -> &str {
        &self.hotel.data_file
    }

    pub fn seed_rooms(&self) -> Vec<Room> {
        self.rooms.iter().map(RoomSeed::to_room).collect()
    }

    /// 開啟飯店資料；存檔為空時建立預設房間
    pub fn open_hotel(&self) -> Hotel<LocalStorage> {
        let mut hotel = Hotel::open(self.hotel_name(), LocalStorage::new(self.data_file()));
        let seeded = hotel.seed_if_empty(self.seed_rooms());
        if seeded > 0 {
            tracing::info!("✅ Created {} initial rooms", seeded);
        }
        hotel
    }
}

impl Validate for HotelConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("hotel.name", &self.hotel.name)?;
        validation::validate_path("hotel.data_file", &self.hotel.data_file)?;

        let numbers: Vec<u32> = self.rooms.iter().map(|room| room.number).collect();
        validation::validate_unique_numbers("rooms.number", &numbers)?;

        for room in &self.rooms {
            validation::validate_positive_number("rooms.capacity", room.capacity, 1)?;
            validation::validate_price("rooms.price", room.price)?;

            if let Some(room_type) = room.room_type.as_deref() {
                if room_type != STANDARD_TYPE && room_type != SUITE_TYPE {
                    return Err(HotelError::InvalidFieldValue {
                        field: "rooms.type".to_string(),
                        value: room_type.to_string(),
                        reason: format!(
                            "Unsupported room type. Valid types: {}, {}",
                            STANDARD_TYPE, SUITE_TYPE
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}
