use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PinError;

/// Number of digits in a PIN.
pub const PIN_LENGTH: usize = 4;

/// A user-entered PIN awaiting validation.
///
/// Always exactly [`PIN_LENGTH`] ASCII digits. The only ways to obtain one
/// are [`PinCandidate::parse`], `TryFrom<String>`, and deserialization, all of
/// which enforce the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PinCandidate(String);

impl PinCandidate {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    /// Returns [`PinError::WrongLength`] if `raw` is not 4 characters long,
    /// or [`PinError::NonDigit`] if any character is not `0`–`9`.
    pub fn parse(raw: &str) -> Result<Self, PinError> {
        check(raw)?;
        Ok(Self(raw.to_owned()))
    }

    /// Borrow the digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn check(raw: &str) -> Result<(), PinError> {
    let len = raw.chars().count();
    if len != PIN_LENGTH {
        return Err(PinError::WrongLength { len });
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PinError::NonDigit);
    }
    Ok(())
}

impl TryFrom<String> for PinCandidate {
    type Error = PinError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        check(&raw)?;
        Ok(Self(raw))
    }
}

impl From<PinCandidate> for String {
    fn from(pin: PinCandidate) -> Self {
        pin.0
    }
}

impl AsRef<str> for PinCandidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_four_digits() {
        let pin = match PinCandidate::parse("0427") {
            Ok(p) => p,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(pin.as_str(), "0427");
    }

    #[test]
    fn parse_reports_length_before_content() {
        assert_eq!(PinCandidate::parse("12a"), Err(PinError::WrongLength { len: 3 }));
        assert_eq!(PinCandidate::parse(""), Err(PinError::WrongLength { len: 0 }));
        assert_eq!(PinCandidate::parse("12345"), Err(PinError::WrongLength { len: 5 }));
    }

    #[test]
    fn parse_rejects_non_ascii_digits() {
        assert_eq!(PinCandidate::parse("12a4"), Err(PinError::NonDigit));
        assert_eq!(PinCandidate::parse("-123"), Err(PinError::NonDigit));
        // Arabic-Indic digits are numeric but not ASCII.
        assert_eq!(PinCandidate::parse("١٢٣٤"), Err(PinError::NonDigit));
    }

    #[test]
    fn error_messages_match_form_wording() {
        assert_eq!(
            PinError::WrongLength { len: 2 }.to_string(),
            "PIN must be exactly 4 digits"
        );
        assert_eq!(PinError::NonDigit.to_string(), "PIN must contain only numbers");
    }

    #[test]
    fn deserialize_enforces_invariant() {
        let ok: Result<PinCandidate, _> = serde_json::from_str("\"9876\"");
        assert!(ok.is_ok(), "four digits must deserialize");

        let bad: Result<PinCandidate, _> = serde_json::from_str("\"98x6\"");
        assert!(bad.is_err(), "non-digit must fail deserialization");

        let number: Result<PinCandidate, _> = serde_json::from_str("1234");
        assert!(number.is_err(), "a JSON number is not a PIN string");
    }

    proptest::proptest! {
        #[test]
        fn proptest_four_ascii_digits_always_parse(raw in "[0-9]{4}") {
            proptest::prop_assert!(PinCandidate::parse(&raw).is_ok());
        }

        #[test]
        fn proptest_other_lengths_never_parse(raw in "[0-9]{0,3}|[0-9]{5,12}") {
            proptest::prop_assert!(PinCandidate::parse(&raw).is_err());
        }

        #[test]
        fn proptest_any_non_digit_never_parses(
            prefix in "[0-9]{0,3}",
            bad in "[^0-9]",
        ) {
            let mut raw = prefix;
            raw.push_str(&bad);
            while raw.chars().count() < PIN_LENGTH {
                raw.push('0');
            }
            proptest::prop_assert!(PinCandidate::parse(&raw).is_err());
        }
    }
}
