//! Default value functions for serde deserialization.

pub fn min_segment_length() -> u32 {
    1
}

pub fn enabled() -> bool {
    true
}
