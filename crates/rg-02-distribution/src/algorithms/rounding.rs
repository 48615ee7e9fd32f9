//! Fixed-precision rounding
//!
//! Amounts are displayed in currency denominations, so they are rounded to
//! a fixed number of decimal places (8 for BTC-like assets by default).
//! Rounding is half away from zero, matching `f64::round`.

/// Round `value` to `decimals` decimal places.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
