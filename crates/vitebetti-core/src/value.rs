//! Element types accepted as occupancy values.

use crate::error::ValueError;

/// Why an element could not be read as a bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitRejection {
    /// The value is a number other than 0 or 1.
    NonBinary(String),
    /// The value is NaN or infinite.
    NotFinite,
}

/// An array element that can be interpreted as present (1) or absent (0).
///
/// Only exact zeros and ones are accepted; the neighbour-presence rules and
/// the alternating sum both assume values are exactly binary.
///
/// # Examples
///
/// ```
/// use vitebetti_core::{BitRejection, Occupancy};
///
/// assert_eq!(1u8.to_bit(), Ok(true));
/// assert_eq!(0.0f64.to_bit(), Ok(false));
/// assert_eq!(f32::NAN.to_bit(), Err(BitRejection::NotFinite));
/// assert!(2i32.to_bit().is_err());
/// ```
pub trait Occupancy: Copy {
    /// Interpret this value as a bit.
    fn to_bit(self) -> Result<bool, BitRejection>;
}

impl Occupancy for bool {
    fn to_bit(self) -> Result<bool, BitRejection> {
        Ok(self)
    }
}

macro_rules! impl_occupancy_int {
    ($($t:ty),*) => {
        $(
            impl Occupancy for $t {
                fn to_bit(self) -> Result<bool, BitRejection> {
                    match self {
                        0 => Ok(false),
                        1 => Ok(true),
                        other => Err(BitRejection::NonBinary(other.to_string())),
                    }
                }
            }
        )*
    };
}

impl_occupancy_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_occupancy_float {
    ($($t:ty),*) => {
        $(
            impl Occupancy for $t {
                fn to_bit(self) -> Result<bool, BitRejection> {
                    if !self.is_finite() {
                        Err(BitRejection::NotFinite)
                    } else if self == 0.0 {
                        Ok(false)
                    } else if self == 1.0 {
                        Ok(true)
                    } else {
                        Err(BitRejection::NonBinary(self.to_string()))
                    }
                }
            }
        )*
    };
}

impl_occupancy_float!(f32, f64);

/// Read `value` as a bit, attributing any rejection to the cell at `index`.
pub fn checked_bit<T: Occupancy>(value: T, index: [usize; 3]) -> Result<bool, ValueError> {
    value.to_bit().map_err(|rejection| match rejection {
        BitRejection::NonBinary(value) => ValueError::NonBinary { index, value },
        BitRejection::NotFinite => ValueError::NotFinite { index },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_accept_only_zero_and_one() {
        assert_eq!(0i64.to_bit(), Ok(false));
        assert_eq!(1u16.to_bit(), Ok(true));
        assert_eq!((-1i8).to_bit(), Err(BitRejection::NonBinary("-1".into())));
        assert_eq!(255u8.to_bit(), Err(BitRejection::NonBinary("255".into())));
    }

    #[test]
    fn floats_reject_fractions_and_non_finite() {
        assert_eq!(1.0f32.to_bit(), Ok(true));
        assert_eq!((-0.0f64).to_bit(), Ok(false));
        assert!(matches!(0.5f64.to_bit(), Err(BitRejection::NonBinary(_))));
        assert_eq!(f64::INFINITY.to_bit(), Err(BitRejection::NotFinite));
        assert_eq!(f32::NAN.to_bit(), Err(BitRejection::NotFinite));
    }

    #[test]
    fn checked_bit_attaches_index() {
        assert_eq!(
            checked_bit(f64::NAN, [0, 1, 2]),
            Err(ValueError::NotFinite { index: [0, 1, 2] })
        );
        assert_eq!(
            checked_bit(3u32, [4, 0, 0]),
            Err(ValueError::NonBinary {
                index: [4, 0, 0],
                value: "3".into()
            })
        );
        assert_eq!(checked_bit(true, [0, 0, 0]), Ok(true));
    }
}
