/// Combine parallel per-review score lists into one 0–10 rating.
///
/// Per review: `sqrt(food² · service) · 10 / sqrt(125)`. Food counts
/// quadratically relative to service, and a perfect review (5, 5) maps to
/// exactly 10. The overall score is the arithmetic mean over all reviews,
/// kept at full f64 precision; rounding happens only at display time.
///
/// # Panics
///
/// Both lists must be non-empty and of equal length. A violation means the
/// analyzer broke its own output invariant, which is a programming error,
/// not a user-facing condition.
#[must_use]
pub fn aggregate(food: &[u8], service: &[u8]) -> f64 {
    assert!(
        !food.is_empty(),
        "aggregate called with empty score lists"
    );
    assert_eq!(
        food.len(),
        service.len(),
        "food and service score lists must be index-aligned"
    );

    let total: f64 = food
        .iter()
        .zip(service)
        .map(|(&f, &s)| {
            let f = f64::from(f);
            let s = f64::from(s);
            (f * f * s).sqrt()
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let n = food.len() as f64;
    total * 10.0 / (n * 125.0_f64.sqrt())
}

/// Round a score for display; callers choose the precision.
#[must_use]
pub fn round_for_display(score: f64, decimals: u8) -> f64 {
    let factor = 10.0_f64.powi(i32::from(decimals));
    (score * factor).round() / factor
}
