//! Display helpers for the presentation layer.

/// Format a millisecond duration as `M:SS`.
///
/// Seconds are zero-padded to two digits and sub-second remainders round
/// down, so `500` formats as `"0:00"` and `63000` as `"1:03"`.
pub fn format_duration_ms(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{minutes}:{seconds:02}")
}
