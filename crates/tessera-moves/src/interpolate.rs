//! Move interpolation for visual consumers.
//!
//! The core never animates; exporters and UIs sample these curves to
//! draw a cube mid-move. Times are in `[0, 1]`.

use tessera_core::Move;

/// Cubic ease-in-out easing curve.
///
/// Accelerates through the first half, decelerates through the second;
/// clamped outside `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Position of the moving cube at eased time `t`, in grid units.
///
/// Slides run straight from source to target. Corner moves travel
/// through the intermediate cell reached by the first letter of the
/// direction, spending half the eased time on each leg.
pub fn interpolate(mv: Move, t: f64) -> (f64, f64) {
    let e = ease_in_out(t);
    let from = (f64::from(mv.from.x), f64::from(mv.from.y));
    let target = (f64::from(mv.target().x), f64::from(mv.target().y));

    if mv.dir.is_slide() {
        return lerp(from, target, e);
    }

    let pivot = (f64::from(mv.pivot().x), f64::from(mv.pivot().y));
    if e < 0.5 {
        lerp(from, pivot, e * 2.0)
    } else {
        lerp(pivot, target, e * 2.0 - 1.0)
    }
}

fn lerp(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{Cell, MoveDir};

    #[test]
    fn easing_hits_the_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        // Clamped outside the unit interval.
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn easing_is_monotone() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease_in_out(f64::from(i) / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn slide_interpolates_straight() {
        let mv = Move::new(Cell::new(0, 0), MoveDir::E);
        assert_eq!(interpolate(mv, 0.0), (0.0, 0.0));
        assert_eq!(interpolate(mv, 1.0), (1.0, 0.0));
        let (x, y) = interpolate(mv, 0.5);
        assert_eq!((x, y), (0.5, 0.0));
    }

    #[test]
    fn corner_passes_through_the_pivot_cell() {
        let mv = Move::new(Cell::new(0, 0), MoveDir::NE);
        assert_eq!(interpolate(mv, 0.0), (0.0, 0.0));
        // Half the eased time is spent reaching the swept cell north.
        assert_eq!(interpolate(mv, 0.5), (0.0, 1.0));
        assert_eq!(interpolate(mv, 1.0), (1.0, 1.0));
    }
}
