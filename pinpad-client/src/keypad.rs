//! On-screen numeric keypad.

/// One cell of the keypad grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit button, `'0'`–`'9'`.
    Digit(char),
    /// Empty cell that keeps the grid aligned. Pressing it does nothing.
    Blank,
    /// Removes the last entered digit.
    Backspace,
}

/// Number of columns in the keypad grid.
pub const COLUMNS: usize = 3;

/// Row-major layout: `1 2 3 / 4 5 6 / 7 8 9 / _ 0 ⌫`.
pub const LAYOUT: [Key; 12] = [
    Key::Digit('1'),
    Key::Digit('2'),
    Key::Digit('3'),
    Key::Digit('4'),
    Key::Digit('5'),
    Key::Digit('6'),
    Key::Digit('7'),
    Key::Digit('8'),
    Key::Digit('9'),
    Key::Blank,
    Key::Digit('0'),
    Key::Backspace,
];

/// Iterate the layout row by row.
#[must_use]
pub fn rows() -> impl Iterator<Item = &'static [Key]> {
    LAYOUT.chunks(COLUMNS)
}

/// What happens to a key typed on a physical keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Swallowed. Digits may only arrive through the on-screen keypad.
    Suppressed,
    /// Left to the host (tab, enter, shortcuts).
    PassThrough,
}

/// Classify a physical key press. Never touches the PIN.
#[must_use]
pub fn keyboard_disposition(key: char) -> KeyDisposition {
    if key.is_ascii_digit() {
        KeyDisposition::Suppressed
    } else {
        KeyDisposition::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_four_rows_of_three() {
        let rows: Vec<_> = rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == COLUMNS));
    }

    #[test]
    fn every_digit_appears_exactly_once() {
        for d in '0'..='9' {
            let count = LAYOUT.iter().filter(|k| **k == Key::Digit(d)).count();
            assert_eq!(count, 1, "digit {d} must appear once");
        }
    }

    #[test]
    fn physical_digits_are_suppressed() {
        for d in '0'..='9' {
            assert_eq!(keyboard_disposition(d), KeyDisposition::Suppressed);
        }
        assert_eq!(keyboard_disposition('\n'), KeyDisposition::PassThrough);
        assert_eq!(keyboard_disposition('a'), KeyDisposition::PassThrough);
    }

    #[test]
    fn bottom_row_is_blank_zero_backspace() {
        let last = match rows().last() {
            Some(r) => r,
            None => panic!("layout must not be empty"),
        };
        assert_eq!(last, &[Key::Blank, Key::Digit('0'), Key::Backspace]);
    }
}
