use crate::utils::error::{BookingError, Result};
use regex::Regex;

pub const MIN_AGE: u32 = 5;
pub const MAX_AGE: u32 = 120;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed.contains(&extension) => Ok(()),
        Some(extension) => Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed.join(", ")
            ),
        }),
        None => Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Passenger name: anything non-empty once trimmed. Returns the trimmed form.
pub fn validate_passenger_name(field_name: &str, value: &str) -> Result<String> {
    let name = value.trim();
    if name.is_empty() {
        return Err(BookingError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Name cannot be empty".to_string(),
        });
    }
    Ok(name.to_string())
}

pub fn validate_age(field_name: &str, value: &str) -> Result<u32> {
    let age: u32 = value
        .trim()
        .parse()
        .map_err(|_| BookingError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Age must be a whole number".to_string(),
        })?;

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(BookingError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Age must be between {} and {}", MIN_AGE, MAX_AGE),
        });
    }

    Ok(age)
}

/// Contact number: 10 to 15 ASCII digits, nothing else. Returns the trimmed form.
pub fn validate_contact(field_name: &str, value: &str) -> Result<String> {
    let contact = value.trim();
    let re = Regex::new(r"^[0-9]{10,15}$").unwrap();
    if !re.is_match(contact) {
        return Err(BookingError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Contact number must be 10 to 15 digits".to_string(),
        });
    }
    Ok(contact.to_string())
}
