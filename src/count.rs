//! Parsing of the optional requested job count.

/// A user-supplied job count.
///
/// Only positive integers count as supplied. Anything else means "use the
/// count drawn from the key" and is never an error.
///
/// There is no upper bound. Large counts are only practical with bare JSON
/// Lines output, which is written as it is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedCount;

impl RequestedCount {
    pub fn parse(raw: &str) -> Option<i64> {
        match raw.trim().parse::<i64>() {
            Ok(n) if n > 0 => Some(n),
            _ => None,
        }
    }
}
