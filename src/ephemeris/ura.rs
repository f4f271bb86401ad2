//! User range accuracy index, IS-GPS-200 20.3.3.3.1.3

/// Upper bound of the accuracy (m) described by each URA index.
/// Index 15 means no accuracy prediction is available.
pub const URA_MAX_ACCURACY: [f64; 16] = [
    2.4, 3.4, 4.85, 6.85, 9.65, 13.65, 24.0, 48.0, 96.0, 192.0, 384.0, 768.0, 1536.0, 3072.0,
    6144.0, 9.999999999999e99,
];

/// Returns the smallest URA index whose range covers `accuracy` (m)
pub fn accuracy_to_ura(accuracy: f64) -> u8 {
    URA_MAX_ACCURACY
        .iter()
        .position(|max| accuracy <= *max)
        .unwrap_or(URA_MAX_ACCURACY.len() - 1) as u8
}

/// Returns the worst accuracy (m) described by URA index `ura`.
/// Indexes past 15 saturate.
pub fn ura_to_accuracy(ura: u8) -> f64 {
    URA_MAX_ACCURACY[usize::from(ura).min(URA_MAX_ACCURACY.len() - 1)]
}
