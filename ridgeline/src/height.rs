// Height mapping
// Converts 8-bit intensity into a height and then into an inverted y coordinate

/// Largest intensity value, maps to the full `max_height`
pub const MAX_INTENSITY: u32 = 255;

/// `floor(value / 255 * max_height)`, computed exactly in integers
pub fn interpolate_height(value: u8, max_height: u32) -> u32 {
    (u64::from(value) * u64::from(max_height) / u64::from(MAX_INTENSITY)) as u32
}

/// Vertical position of a sample inside its row band.
/// Brighter pixels sit higher (smaller y) above the band's baseline.
pub fn y_coordinate(value: u8, max_height: u32, offset: u32) -> u32 {
    offset + (max_height - interpolate_height(value, max_height))
}
