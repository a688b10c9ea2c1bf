//! Host temperature colors.
//!
//! A host's load is normalized against the slot capacity of its queue
//! instance and quantized onto a fixed palette. The palette follows the
//! black-body locus of MacAdam's chromaticity diagram: a lightly loaded host
//! glows dull red and heats up through orange, yellow and white to blue.

/// Normalized load at and above which the hottest color is used.
pub const MAX_LOAD: f64 = 5.5;

/// Palette steps per unit of normalized load.
const STEPS_PER_UNIT: f64 = 10.0;

/// Ordered temperature palette, coolest first.
pub const PALETTE: [&str; 55] = [
    "#FF0006", "#FF0B05", "#FF1603", "#FE2102", "#FE2C00", "#FE2C00", "#FE5103", "#FD7606",
    "#FD9A08", "#FCBF0B", "#FCBF0B", "#FDC92C", "#FDD44D", "#FEDE6E", "#FEE88F", "#FEE88F",
    "#FEECA0", "#FFF1B1", "#FFF5C2", "#FFF9D3", "#FFF9D3", "#FFFADE", "#FFFAE9", "#FFFBF4",
    "#FFFBFF", "#FFFBFF", "#FDFAFF", "#FBF9FF", "#F8F8FF", "#F6F7FF", "#F6F7FF", "#F1F4FE",
    "#EDF1FE", "#E8EDFD", "#E3EAFC", "#E3EAFC", "#DDEAFC", "#D7EAFC", "#D0EAFB", "#CAEAFB",
    "#CAEAFB", "#C9E5FC", "#C9E0FD", "#C8DBFD", "#C7D6FE", "#C7D6FE", "#C5D6FE", "#C3D6FF",
    "#C0D5FF", "#BED5FF", "#BED5FF", "#B1CBFF", "#A5C1FF", "#98B7FF", "#8BADFF",
];

/// Palette index for a normalized load.
///
/// Loads of [`MAX_LOAD`] and above map to the last entry. Negative loads
/// map to the first.
pub fn palette_index(normalized_load: f64) -> usize {
    if normalized_load >= MAX_LOAD {
        return PALETTE.len() - 1;
    }
    if normalized_load.is_nan() || normalized_load <= 0.0 {
        return 0;
    }
    ((normalized_load * STEPS_PER_UNIT) as usize).min(PALETTE.len() - 1)
}

/// Temperature color for a host load over a queue instance's slots.
///
/// `slots_total` must be non-zero; callers reject empty queues first.
pub fn temperature_color(load_avg: f64, slots_total: u32) -> &'static str {
    debug_assert!(slots_total > 0);
    PALETTE[palette_index(load_avg / f64::from(slots_total))]
}
