use crate::version::Version;

// fraction digits kept when a float becomes a minor version
const MAX_MINOR_PRECISION: usize = 5;

/// `2` -> `2.0.0`
impl From<u64> for Version {
    fn from(major: u64) -> Self {
        Version::new(major, 0, 0)
    }
}

/// negative numbers become `0.0.0`
impl From<i64> for Version {
    fn from(major: i64) -> Self {
        Version::new(u64::try_from(major).unwrap_or(0), 0, 0)
    }
}

/// Informal float literals: `3.12` -> `3.12.0`.
///
/// The float is printed with at most five fraction digits, trailing zeros dropped, and
/// the digits after the point become the minor version. `1.10` gives `1.1.0`.
/// Non-finite, zero and negative values give `0.0.0`.
impl From<f64> for Version {
    fn from(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Version::default();
        }

        let text = format!("{:.*}", MAX_MINOR_PRECISION, value);
        let text = text.trim_end_matches('0').trim_end_matches('.');

        let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
        let Ok(major) = integer.parse::<u64>() else {
            return Version::default();
        };
        let minor = fraction.parse::<u64>().unwrap_or(0);

        Version::new(major, minor, 0)
    }
}

impl Version {
    /// `major.minor` as a float, the inverse of the float conversion, just as imprecise
    pub fn to_f64(&self) -> f64 {
        format!("{}.{}", self.major, self.minor).parse().unwrap_or(f64::NAN)
    }
}
