//! Fuzz target: JSON deserialization of `ValidatePinRequest`.
//!
//! Arbitrary bytes must never panic the parser, and anything that does
//! parse must carry a well-formed PIN.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pinpad_core::ValidatePinRequest;

fuzz_target!(|data: &[u8]| {
    if let Ok(req) = serde_json::from_slice::<ValidatePinRequest>(data) {
        let pin = req.pin.as_str();
        assert_eq!(pin.len(), 4, "parsed PIN must be 4 bytes");
        assert!(pin.bytes().all(|b| b.is_ascii_digit()), "parsed PIN must be digits");
    }
});
