use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Corrupt room record at index {index}: {reason}")]
    CorruptRecord { index: usize, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Room number must be a number, got '{value}'")]
    InvalidRoomNumber { value: String },

    #[error("Room {number} not found")]
    RoomNotFound { number: u32 },

    #[error("Room {number} is already occupied by {guest}")]
    RoomOccupied { number: u32, guest: String },

    #[error("Room {number} was not occupied")]
    RoomVacant { number: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    StateConflict,
    Persistence,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// CLI 退出碼：Low 為提示 (0)，High 為輸入錯誤 (1)，
    /// Medium 為狀態衝突 (2)，Critical 為檔案或配置錯誤 (3)
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl HotelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HotelError::InvalidFieldValue { .. }
            | HotelError::InvalidRoomNumber { .. }
            | HotelError::RoomNotFound { .. } => ErrorCategory::Validation,
            HotelError::RoomOccupied { .. } | HotelError::RoomVacant { .. } => {
                ErrorCategory::StateConflict
            }
            HotelError::IoError(_)
            | HotelError::SerializationError(_)
            | HotelError::CorruptRecord { .. } => ErrorCategory::Persistence,
            HotelError::ConfigError { .. } | HotelError::ConfigParseError(_) => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 嚴重程度，CLI 依此決定退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 「本來就空房」只是提示，不算失敗
            ErrorCategory::StateConflict => match self {
                HotelError::RoomVacant { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Persistence => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HotelError::IoError(_) => {
                "Check that the data file location exists and is writable".to_string()
            }
            HotelError::SerializationError(_) | HotelError::CorruptRecord { .. } => {
                "The data file is malformed; restore it from a backup or remove it to start fresh"
                    .to_string()
            }
            HotelError::ConfigError { .. } | HotelError::ConfigParseError(_) => {
                "Check the configuration file syntax and values".to_string()
            }
            HotelError::InvalidFieldValue { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            HotelError::InvalidRoomNumber { .. } => {
                "Enter the room number as digits, e.g. 101".to_string()
            }
            HotelError::RoomNotFound { .. } => {
                "Run 'list' to see the available room numbers".to_string()
            }
            HotelError::RoomOccupied { .. } => {
                "Choose a vacant room or check the current guest out first".to_string()
            }
            HotelError::RoomVacant { .. } => "No action needed".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HotelError::IoError(e) => format!("Could not access the hotel data file: {}", e),
            HotelError::SerializationError(e) => {
                format!("Could not read or write hotel data: {}", e)
            }
            HotelError::CorruptRecord { index, .. } => {
                format!("The hotel data file has a broken entry (#{})", index + 1)
            }
            HotelError::ConfigError { message } => format!("Configuration problem: {}", message),
            HotelError::ConfigParseError(e) => format!("Configuration file is invalid: {}", e),
            HotelError::InvalidFieldValue { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            HotelError::InvalidRoomNumber { .. } => "Room number must be a number.".to_string(),
            HotelError::RoomNotFound { number } => format!("Room {} was not found.", number),
            HotelError::RoomOccupied { number, .. } => {
                format!("Room {} is already occupied!", number)
            }
            HotelError::RoomVacant { number } => format!("Room {} was not occupied.", number),
        }
    }
}

pub type Result<T> = std::result::Result<T, HotelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            HotelError::RoomNotFound { number: 1 }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            HotelError::RoomVacant { number: 1 }.category(),
            ErrorCategory::StateConflict
        );
        let io = HotelError::from(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Persistence);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_configuration_errors_exit_with_critical_code() {
        let parse_error = toml::from_str::<toml::Table>("[hotel\nname = ").unwrap_err();
        let config_errors = [
            HotelError::ConfigParseError(parse_error),
            HotelError::ConfigError {
                message: "bad".to_string(),
            },
            HotelError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing config",
            )),
        ];
        for e in &config_errors {
            assert_eq!(e.severity().exit_code(), 3, "{}", e);
        }

        assert_eq!(HotelError::RoomVacant { number: 1 }.severity().exit_code(), 0);
        assert_eq!(
            HotelError::InvalidRoomNumber {
                value: "x".to_string()
            }
            .severity()
            .exit_code(),
            1
        );
        assert_eq!(
            HotelError::RoomOccupied {
                number: 1,
                guest: "Alice".to_string()
            }
            .severity()
            .exit_code(),
            2
        );
    }

    #[test]
    fn test_vacant_checkout_is_low_severity() {
        assert_eq!(
            HotelError::RoomVacant { number: 102 }.severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            HotelError::RoomOccupied {
                number: 101,
                guest: "Alice".to_string()
            }
            .severity(),
            ErrorSeverity::Medium
        );
    }
}
