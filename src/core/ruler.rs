use crate::core::constants::RULER_MAX_MAGNITUDE;

/// Snaps a ratio to the round numbers used on scale bars.
///
/// Returns 1, 2 or 5, or 0 when the ratio is outside `[0.75, 7.5)` and the
/// caller should try another order of magnitude.
pub fn nice_step(fraction: f64) -> u8 {
    if fraction < 0.75 || fraction.is_nan() {
        return 0;
    }
    if fraction < 1.5 {
        return 1;
    }
    if fraction < 3.5 {
        return 2;
    }
    if fraction < 7.5 {
        return 5;
    }
    0
}

/// Orders of magnitude tried for a ruler step, coarsest first.
pub fn magnitudes() -> impl Iterator<Item = u64> {
    std::iter::successors(Some(RULER_MAX_MAGNITUDE), |i| Some(i / 10)).take_while(|&i| i > 0)
}

/// Finds the coarsest magnitude with a non-zero nice step for `measure`.
///
/// Returns `(step, magnitude)`.
pub fn select_step(measure: f64) -> Option<(u8, u64)> {
    magnitudes().find_map(|i| match nice_step(measure / i as f64) {
        0 => None,
        k => Some((k, i)),
    })
}
