//! Floatable contract
//!
//! Any value that decomposes into an ordered list of floats and can be
//! rebuilt from one. This is the numeric bridge generic tooling (sliders,
//! inspectors) uses without knowing the concrete value type.

/// A value convertible to and from an ordered sequence of floats
///
/// `from_floats(&v.to_floats())` must reproduce `v`. `from_floats` never
/// fails: missing trailing components are replaced by a neutral default
/// documented on each implementation.
pub trait Floatable: Sized {
    /// Structural decomposition in a fixed component order
    fn to_floats(&self) -> Vec<f64>;

    /// Rebuild a value, substituting defaults for missing components
    fn from_floats(floats: &[f64]) -> Self;
}

/// Component `index` of `floats`, or `default` when the slice is too short
#[inline]
pub(crate) fn component(floats: &[f64], index: usize, default: f64) -> f64 {
    floats.get(index).copied().unwrap_or(default)
}

/// Round a float onto an integer type, `None` for NaN and out-of-range input
#[inline]
pub(crate) fn round_to<T: num_traits::NumCast>(value: f64) -> Option<T> {
    num_traits::cast(value.round())
}

/// `[1.0]` / `[0.0]`; a missing or NaN component reads as `false`,
/// anything at or above one half as `true`
impl Floatable for bool {
    fn to_floats(&self) -> Vec<f64> {
        vec![if *self { 1.0 } else { 0.0 }]
    }

    fn from_floats(floats: &[f64]) -> Self {
        component(floats, 0, 0.0) >= 0.5
    }
}

/// Rounded to the nearest integer, saturating at the ends of the `i64` range
/// so that `i64::MAX` survives its trip through `2^63`; missing or NaN reads
/// as `0`
impl Floatable for i64 {
    fn to_floats(&self) -> Vec<f64> {
        vec![*self as f64]
    }

    fn from_floats(floats: &[f64]) -> Self {
        component(floats, 0, 0.0).round() as i64
    }
}

/// Missing reads as `0.0`
impl Floatable for f64 {
    fn to_floats(&self) -> Vec<f64> {
        vec![*self]
    }

    fn from_floats(floats: &[f64]) -> Self {
        component(floats, 0, 0.0)
    }
}

/// Passes through unchanged
impl Floatable for Vec<f64> {
    fn to_floats(&self) -> Vec<f64> {
        self.clone()
    }

    fn from_floats(floats: &[f64]) -> Self {
        floats.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true ; "true")]
    #[test_case(false ; "false")]
    fn test_bool_round_trip(value: bool) {
        assert_eq!(bool::from_floats(&value.to_floats()), value);
    }

    #[test_case(0 ; "zero")]
    #[test_case(-42 ; "negative")]
    #[test_case(1 << 40 ; "large")]
    #[test_case(i64::MAX ; "max")]
    #[test_case(i64::MIN ; "min")]
    fn test_int_round_trip(value: i64) {
        assert_eq!(i64::from_floats(&value.to_floats()), value);
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-3.25 ; "negative")]
    #[test_case(1e9 ; "out of range")]
    fn test_float_round_trip(value: f64) {
        assert_eq!(f64::from_floats(&value.to_floats()), value);
    }

    #[test]
    fn test_short_input_defaults() {
        assert!(!bool::from_floats(&[]));
        assert_eq!(i64::from_floats(&[]), 0);
        assert_eq!(f64::from_floats(&[]), 0.0);
    }

    #[test]
    fn test_int_rounds_and_saturates() {
        assert_eq!(i64::from_floats(&[2.6]), 3);
        assert_eq!(i64::from_floats(&[-1.4]), -1);
        assert_eq!(i64::from_floats(&[f64::NAN]), 0);
        assert_eq!(i64::from_floats(&[f64::INFINITY]), i64::MAX);
        assert_eq!(i64::from_floats(&[-1e300]), i64::MIN);
    }

    #[test]
    fn test_bool_threshold() {
        assert!(bool::from_floats(&[0.5]));
        assert!(!bool::from_floats(&[0.49]));
        assert!(!bool::from_floats(&[f64::NAN]));
    }
}
