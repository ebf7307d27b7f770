//! Loosely typed index arguments.
//!
//! The index parameters of both primitives accept "anything that looks like
//! a number", and their normalization rules treat a missing argument
//! differently from a non-numeric one (`slice` maps an omitted end to the
//! length but a non-numeric end to zero). `Position` keeps those three cases
//! apart so each operation can spell out its own rule.

/// An index argument as passed by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// The argument was not supplied.
    #[default]
    Omitted,
    /// The argument was supplied but is not a number.
    NotANumber,
    /// An integral position. May be negative or past the end.
    At(i64),
}

impl Position {
    /// Resolve a possibly negative position against `len`, counting negative
    /// values back from the end and clamping the result into `0..=len`.
    ///
    /// `Omitted` and `NotANumber` resolve to 0.
    pub fn relative_to(self, len: usize) -> usize {
        let len_i = len as i64;
        let index = match self {
            Position::Omitted | Position::NotANumber => 0,
            Position::At(i) if i < 0 => (len_i + i).max(0),
            Position::At(i) => i.min(len_i),
        };
        return index as usize;
    }

    /// The integral value, or `None` when omitted or not a number.
    pub fn value(self) -> Option<i64> {
        return match self {
            Position::At(i) => Some(i),
            _ => None,
        };
    }
}

macro_rules! position_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Position {
            fn from(value: $t) -> Position {
                return Position::At(i64::try_from(value).unwrap_or(i64::MAX));
            }
        }
    )*};
}

position_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Position {
    /// Truncates toward zero. NaN becomes `NotANumber`; infinities saturate.
    fn from(value: f64) -> Position {
        if value.is_nan() {
            return Position::NotANumber;
        }
        // `as` saturates at the i64 bounds.
        return Position::At(value.trunc() as i64);
    }
}

impl From<f32> for Position {
    fn from(value: f32) -> Position {
        return Position::from(f64::from(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(Position::from(2.9), Position::At(2));
        assert_eq!(Position::from(-2.9), Position::At(-2));
        assert_eq!(Position::from(f64::NAN), Position::NotANumber);
        assert_eq!(Position::from(f64::INFINITY), Position::At(i64::MAX));
        assert_eq!(Position::from(f64::NEG_INFINITY), Position::At(i64::MIN));
    }

    #[test]
    fn huge_unsigned_saturates() {
        assert_eq!(Position::from(u64::MAX), Position::At(i64::MAX));
    }

    #[test]
    fn relative_to_counts_back_from_end() {
        assert_eq!(Position::At(-2).relative_to(5), 3);
        assert_eq!(Position::At(-100).relative_to(5), 0);
        assert_eq!(Position::At(100).relative_to(5), 5);
        assert_eq!(Position::At(i64::MIN).relative_to(5), 0);
        assert_eq!(Position::Omitted.relative_to(5), 0);
        assert_eq!(Position::NotANumber.relative_to(5), 0);
    }
}
