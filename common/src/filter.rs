/// Glyph shown for a truthy field.
pub const CHECK: &str = "\u{2713}";
/// Glyph shown for a falsy field.
pub const CROSS: &str = "\u{2718}";

/// Formats a boolean as a checkmark (`✓`) or a cross (`✘`).
pub fn checkmark(input: bool) -> &'static str {
    if input { CHECK } else { CROSS }
}
