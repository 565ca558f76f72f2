/// Linearly map `v` from the interval `from` onto the interval `to`.
///
/// No clamping: inputs outside `from` extrapolate. A degenerate `from` interval maps
/// everything to `to.0`.
pub fn rescale(from: (f64, f64), to: (f64, f64), v: f64) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = (v - from.0) / span;
    to.0 + (to.1 - to.0) * t
}

/// `n` evenly spaced samples from `start` to `end`, both endpoints included exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + (end - start) * (i as f64) / last
                    }
                })
                .collect()
        }
    }
}

/// Exact at both `t = 0` and `t = 1`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
