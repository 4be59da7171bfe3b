//! Element-wise array helpers for field arithmetic
//!
//! Field components are held as `nalgebra` column vectors so the strain
//! reduction reads as whole-array expressions.

use nalgebra::DVector;

pub type Array = DVector<f64>;

/// Copy a slice into an array
pub fn from_slice(values: &[f64]) -> Array {
    Array::from_column_slice(values)
}

/// Zero array with the same length as `a`
pub fn zeros_like(a: &Array) -> Array {
    Array::zeros(a.len())
}

/// Raise every entry to an integer power
pub fn power(a: &Array, exponent: i32) -> Array {
    a.map(|v| v.powi(exponent))
}

/// Element-wise square root
pub fn sqrt(a: &Array) -> Array {
    a.map(f64::sqrt)
}

/// Replace negative entries (and negative zero) with `+0.0`
///
/// NaN passes through unchanged.
pub fn clamp_non_negative(a: &Array) -> Array {
    a.map(|v| if v <= 0.0 { 0.0 } else { v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_flushes_negative_zero() {
        let a = from_slice(&[-0.0, -1e-20, 2.0]);
        let clamped = clamp_non_negative(&a);
        assert!(clamped[0].is_sign_positive());
        assert_eq!(clamped[1], 0.0);
        assert_eq!(clamped[2], 2.0);
    }

    #[test]
    fn power_and_zeros() {
        let a = from_slice(&[1.0, -2.0, 3.0]);
        assert_eq!(power(&a, 2), from_slice(&[1.0, 4.0, 9.0]));
        assert_eq!(zeros_like(&a).len(), 3);
        assert_eq!(sqrt(&from_slice(&[4.0])), from_slice(&[2.0]));
    }
}
