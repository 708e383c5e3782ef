use crate::coords::Vec2;

/// Half-open x range plotted by `draw_graph`.
pub const GRAPH_DOMAIN: (f64, f64) = (0.0, 15.0);

/// Sampling step of `draw_graph`.
pub const GRAPH_STEP: f64 = 0.025;

/// Samples `f` at `x = start + i * step` for every `x < end`.
///
/// Abscissae are computed by multiplication rather than accumulation so the
/// sample count does not drift with rounding: `[0, 15)` at `0.025` yields
/// exactly 600 samples. Evaluation happens in `f64`; results are narrowed to
/// `f32` scene coordinates.
///
/// Empty, inverted or unbounded ranges and non-positive steps yield no
/// samples.
pub fn sample_curve<F>(f: F, start: f64, end: f64, step: f64) -> Vec<Vec2>
where
    F: Fn(f64) -> f64,
{
    if !(step > 0.0) || !(end > start) || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }

    let mut samples = Vec::new();
    let mut i = 0u32;
    loop {
        let x = start + i as f64 * step;
        if x >= end {
            break;
        }
        samples.push(Vec2::new(x as f32, f(x) as f32));
        i += 1;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_domain_yields_600_samples() {
        let (start, end) = GRAPH_DOMAIN;
        assert_eq!(sample_curve(f64::sin, start, end, GRAPH_STEP).len(), 600);
        assert_eq!(sample_curve(f64::cos, start, end, GRAPH_STEP).len(), 600);
    }

    #[test]
    fn end_is_exclusive() {
        let xs: Vec<f32> = sample_curve(|x| x, 0.0, 1.0, 0.25).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn first_and_last_sample() {
        let s = sample_curve(f64::sin, 0.0, 15.0, GRAPH_STEP);
        assert_eq!(s[0], Vec2::new(0.0, 0.0));
        let last = s[s.len() - 1];
        assert!((last.x - 14.975).abs() < 1e-5);
        assert!((last.y - 14.975f32.sin()).abs() < 1e-5);
    }

    #[test]
    fn empty_or_inverted_ranges_yield_nothing() {
        assert!(sample_curve(f64::sin, 1.0, 1.0, 0.1).is_empty());
        assert!(sample_curve(f64::sin, 2.0, 1.0, 0.1).is_empty());
        assert!(sample_curve(f64::sin, 0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn unbounded_ranges_yield_nothing() {
        assert!(sample_curve(f64::sin, 0.0, f64::INFINITY, 1.0).is_empty());
        assert!(sample_curve(f64::sin, f64::NEG_INFINITY, 0.0, 1.0).is_empty());
        assert!(sample_curve(f64::sin, 0.0, f64::NAN, 1.0).is_empty());
    }
}
