//! Periodic (torus) axis resolution.

/// Map a coordinate back into `[0, len)` with a single period correction.
///
/// Negative values gain one `len`, values past the end lose one. That is
/// all the 3x3 kernel ever needs, since its offsets are in {-1, 0, +1}.
/// Anything further out falls back to a Euclidean modulus so that the
/// lookup stays total.
///
/// `len` must be non-zero.
pub fn wrap_axis(val: i32, len: u32) -> usize {
    let n = i64::from(len);
    let x = i64::from(val);
    let once = if x < 0 {
        x + n
    } else if x > n - 1 {
        x - n
    } else {
        x
    };
    if (0..n).contains(&once) {
        once as usize
    } else {
        x.rem_euclid(n) as usize
    }
}

/// The wrapped `[previous, current, next]` positions along one axis.
///
/// Equivalent to `wrap_axis(pos - 1)`, `pos`, `wrap_axis(pos + 1)` for an
/// in-range `pos`, without the signed round trip.
#[inline]
pub fn axis_window(pos: usize, len: usize) -> [usize; 3] {
    let prev = if pos == 0 { len - 1 } else { pos - 1 };
    let next = if pos + 1 == len { 0 } else { pos + 1 };
    [prev, pos, next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_range_is_identity() {
        assert_eq!(wrap_axis(0, 5), 0);
        assert_eq!(wrap_axis(4, 5), 4);
    }

    #[test]
    fn single_step_corrections() {
        assert_eq!(wrap_axis(-1, 5), 4);
        assert_eq!(wrap_axis(5, 5), 0);
        assert_eq!(wrap_axis(-5, 5), 0);
        assert_eq!(wrap_axis(9, 5), 4);
    }

    #[test]
    fn beyond_one_period_falls_back_to_modulus() {
        assert_eq!(wrap_axis(-6, 5), 4);
        assert_eq!(wrap_axis(12, 5), 2);
        assert_eq!(wrap_axis(i32::MIN, 7), (i64::from(i32::MIN)).rem_euclid(7) as usize);
    }

    #[test]
    fn unit_axis_collapses_to_zero() {
        assert_eq!(wrap_axis(-1, 1), 0);
        assert_eq!(wrap_axis(1, 1), 0);
        assert_eq!(axis_window(0, 1), [0, 0, 0]);
    }

    #[test]
    fn window_at_edges() {
        assert_eq!(axis_window(0, 4), [3, 0, 1]);
        assert_eq!(axis_window(3, 4), [2, 3, 0]);
        assert_eq!(axis_window(2, 4), [1, 2, 3]);
    }

    proptest! {
        #[test]
        fn window_agrees_with_wrap(len in 1u32..64, pos in 0u32..64) {
            let pos = pos % len;
            let w = axis_window(pos as usize, len as usize);
            prop_assert_eq!(w[0], wrap_axis(pos as i32 - 1, len));
            prop_assert_eq!(w[1], wrap_axis(pos as i32, len));
            prop_assert_eq!(w[2], wrap_axis(pos as i32 + 1, len));
        }

        #[test]
        fn wrap_is_periodic(len in 1u32..64, val in -200i32..200) {
            let w = wrap_axis(val, len);
            prop_assert!(w < len as usize);
            prop_assert_eq!(w, wrap_axis(val + len as i32, len));
        }
    }
}
