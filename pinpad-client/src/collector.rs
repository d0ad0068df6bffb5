//! Accumulates keypad digits into a PIN.

use pinpad_core::PIN_LENGTH;

/// Holds between zero and [`PIN_LENGTH`] ASCII digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinCollector {
    digits: String,
}

impl PinCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `digit` if there is room. Returns `true` if the PIN changed.
    ///
    /// Non-digit characters are ignored.
    pub fn append_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.digits.len() >= PIN_LENGTH {
            return false;
        }
        self.digits.push(digit);
        true
    }

    /// Drop the last digit. Returns `true` if the PIN changed.
    pub fn backspace(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// `true` once all [`PIN_LENGTH`] digits are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.len() == PIN_LENGTH
    }
}
