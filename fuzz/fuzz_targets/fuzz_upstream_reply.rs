//! Fuzz target: decoding of upstream explanation replies.
//!
//! The upstream service is outside our control, so its reply body is
//! hostile input. Decoding must fail cleanly, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = gloss_engine::upstream::parse_reply(data);
});
