use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A phone number: exactly 10 digits, stored as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.len() != 10 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::validation(
                "phone",
                format!("'{}' must be exactly 10 digits", raw),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_round_trip() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.to_string(), "0501234567");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Phone::new("050123456a").is_err());
        assert!(Phone::new("050-123-45").is_err());
        assert!(Phone::new(" 501234567").is_err());
    }
}
