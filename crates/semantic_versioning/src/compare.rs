use std::cmp::Ordering;
use crate::version::Version;

fn eq_to_none(v: Ordering) -> Option<Ordering> {
    if matches!(v, Ordering::Equal) {
        return None;
    }
    Some(v)
}

enum NumericNonNumeric<'a> {
    // digits with leading zeros removed, may be empty for "0", "00", ...
    Numeric(&'a str),
    NonNumeric,
}

fn classify(id: &str) -> NumericNonNumeric<'_> {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        NumericNonNumeric::Numeric(id.trim_start_matches('0'))
    } else {
        NumericNonNumeric::NonNumeric
    }
}

// any number of digits, no leading zeros
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare a single pair of pre-release identifiers.
///
/// - identifiers of only digits are compared numerically
/// - numeric identifiers are lesser than non-numeric identifiers
/// - otherwise, and to break numeric ties ("007" vs "7"), compare in ASCII order
pub fn identifier_cmp(a: &str, b: &str) -> Ordering {
    match (classify(a), classify(b)) {
        (NumericNonNumeric::Numeric(n1), NumericNonNumeric::Numeric(n2)) => {
            if let Some(ret) = eq_to_none(numeric_cmp(n1, n2)) {
                return ret;
            }
            a.cmp(b)
        }
        (NumericNonNumeric::Numeric(_), NumericNonNumeric::NonNumeric) => {
            // left is numeric, right is non-numeric
            // left < right
            Ordering::Less
        }
        (NumericNonNumeric::NonNumeric, NumericNonNumeric::Numeric(_)) => {
            // left is non-numeric, right is numeric
            // left > right
            Ordering::Greater
        }
        (NumericNonNumeric::NonNumeric, NumericNonNumeric::NonNumeric) => {
            a.cmp(b)
        }
    }
}

/// Compare two pre-release identifier lists, an empty list is a release.
///
/// - prerel is LESS than non-prerel
/// - identifiers are compared pairwise, the first difference decides
/// - a list that is a prefix of the other is lesser
///      1.0.0-alpha < 1.0.0-alpha.1
pub fn pre_release_cmp(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, false) => {
            for (left, right) in std::iter::zip(a, b) {
                if let Some(ret) = eq_to_none(identifier_cmp(left, right)) {
                    return ret;
                }
            }
            a.len().cmp(&b.len())
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        self.same_release(other)
            && self.pre_release_identifiers() == other.pre_release_identifiers()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Version) -> Ordering {
        self.major.cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| pre_release_cmp(self.pre_release_identifiers(), other.pre_release_identifiers()))
    }
}
