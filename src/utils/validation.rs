use crate::utils::error::{HotelError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 解析使用者輸入的房號，非數字時回傳驗證錯誤
pub fn parse_room_number(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| HotelError::InvalidRoomNumber {
            value: input.to_string(),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(HotelError::InvalidFieldValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HotelError::InvalidFieldValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(HotelError::InvalidFieldValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(HotelError::InvalidFieldValue {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "Price must be a finite, non-negative amount".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HotelError::InvalidFieldValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_numbers(field_name: &str, numbers: &[u32]) -> Result<()> {
    let mut seen = HashSet::new();
    for number in numbers {
        if !seen.insert(*number) {
            return Err(HotelError::InvalidFieldValue {
                field: field_name.to_string(),
                value: number.to_string(),
                reason: "Room numbers must be unique".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_room_number() {
        assert_eq!(parse_room_number("101").unwrap(), 101);
        assert_eq!(parse_room_number(" 202 ").unwrap(), 202);
        assert!(matches!(
            parse_room_number("abc"),
            Err(HotelError::InvalidRoomNumber { .. })
        ));
        assert!(parse_room_number("").is_err());
        assert!(parse_room_number("-5").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 80.0).is_ok());
        assert!(validate_price("price", 0.0).is_ok());
        assert!(validate_price("price", -1.0).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("guest", "Alice").is_ok());
        assert!(validate_non_empty_string("guest", "   ").is_err());
    }

    #[test]
    fn test_validate_unique_numbers() {
        assert!(validate_unique_numbers("rooms", &[101, 102, 201]).is_ok());
        assert!(validate_unique_numbers("rooms", &[101, 102, 101]).is_err());
    }
}
