//! Fuzz target for `configtrace.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Config files must be UTF-8
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = configtrace_settings::parse_config_toml(text)
    {
        let _ = configtrace_settings::resolve_config(cfg, Default::default());
    }
});
