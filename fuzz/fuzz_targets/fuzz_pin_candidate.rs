//! Fuzz target: `PinCandidate::parse` agrees with a direct check.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pinpad_core::PinCandidate;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let expected = raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit());
    assert_eq!(PinCandidate::parse(raw).is_ok(), expected);

    // JSON round-trip of an accepted PIN must not panic.
    if let Ok(pin) = PinCandidate::parse(raw) {
        let json = serde_json::to_string(&pin).expect("PinCandidate serialization must not fail");
        let back: PinCandidate =
            serde_json::from_str(&json).expect("PinCandidate deserialization must not fail");
        assert_eq!(back, pin);
    }
});
