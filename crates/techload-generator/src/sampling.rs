//! Sampling helpers built on [`Draw`].
//!
//! Each helper documents how many draws it consumes. Generation order is
//! part of the output, so callers must not reorder or skip calls.

use crate::cursor::Draw;

/// Longest digit count [`Sampling::digits`] can produce in a `u64`.
pub const MAX_DIGITS: u32 = 19;

/// Sampling operations available on every draw source.
pub trait Sampling: Draw {
    /// Index in `0..len`. One draw.
    fn index(&mut self, len: usize) -> usize {
        (self.draw() * len as f64).floor() as usize
    }

    /// Uniform choice from `options`. One draw.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    fn pick<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        assert!(!options.is_empty(), "pick called with no options");
        &options[self.index(options.len())]
    }

    /// `true` with probability `p`. One draw.
    fn chance(&mut self, p: f64) -> bool {
        self.draw() < p
    }

    /// `floor(draw * n)`, i.e. `0..n`. One draw.
    fn below(&mut self, n: u32) -> u32 {
        (self.draw() * f64::from(n)).floor() as u32
    }

    /// `ceil(draw * n)`, i.e. `1..=n` (0 only on an exact zero draw). One draw.
    fn ceil_of(&mut self, n: u32) -> u32 {
        (self.draw() * f64::from(n)).ceil() as u32
    }

    /// A number with a fixed count of decimal digits.
    ///
    /// With `high` absent (or zero) the number has exactly `low` digits and
    /// one draw is used. Otherwise the digit count is first drawn from
    /// `low..high` and a second draw produces the number.
    ///
    /// A draw that lands on fewer digits is multiplied by 10 until it has the
    /// requested length, so `0025` becomes `2500`. This skews the
    /// distribution and is intended. An exact zero cannot be padded and
    /// yields the smallest number of the requested length.
    ///
    /// # Panics
    ///
    /// Panics if the digit count exceeds [`MAX_DIGITS`].
    fn digits(&mut self, low: u32, high: Option<u32>) -> u64 {
        let count = match high {
            Some(high) if high != 0 => {
                (self.draw() * f64::from(high.saturating_sub(low))).floor() as u32 + low
            }
            _ => low,
        };
        assert!(
            count <= MAX_DIGITS,
            "digits called for {count} digits, at most {MAX_DIGITS} fit in a u64"
        );
        let min = if count == 0 { 0 } else { 10u64.pow(count - 1) };
        let mut output = (self.draw() * 10u64.pow(count) as f64).floor() as u64;
        if output == 0 {
            return min;
        }
        while output < min {
            output *= 10;
        }
        output
    }
}

impl<D: Draw + ?Sized> Sampling for D {}

/// Draw source that replays a fixed script, for exercising specific branches.
#[cfg(test)]
pub(crate) struct Scripted {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl Draw for Scripted {
    fn draw(&mut self) -> f64 {
        let value = *self
            .values
            .get(self.next)
            .unwrap_or_else(|| panic!("script exhausted after {} draws", self.next));
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    fn digit_count(n: u64) -> u32 {
        n.to_string().len() as u32
    }

    #[test]
    fn test_pick_uses_floor() {
        let options = ["a", "b", "c", "d"];
        let mut draws = Scripted::new(&[0.0, 0.249, 0.25, 0.999]);
        assert_eq!(*draws.pick(&options), "a");
        assert_eq!(*draws.pick(&options), "a");
        assert_eq!(*draws.pick(&options), "b");
        assert_eq!(*draws.pick(&options), "d");
    }

    #[test]
    #[should_panic(expected = "pick called with no options")]
    fn test_pick_empty_panics() {
        let options: [u8; 0] = [];
        Scripted::new(&[0.5]).pick(&options);
    }

    #[test]
    fn test_digits_pads_short_draws() {
        // 0.0025 * 10^4 = 25 -> 2500
        let mut draws = Scripted::new(&[0.0025]);
        assert_eq!(draws.digits(4, None), 2500);
        assert_eq!(draws.consumed(), 1);
    }

    #[test]
    fn test_digits_zero_high_means_exact() {
        let mut draws = Scripted::new(&[0.5]);
        assert_eq!(draws.digits(3, Some(0)), 500);
        assert_eq!(draws.consumed(), 1);
    }

    #[test]
    fn test_digits_range_draws_count_first() {
        // count = floor(0.9 * 3) + 3 = 5, number = floor(0.12345 * 10^5)
        let mut draws = Scripted::new(&[0.9, 0.12345]);
        assert_eq!(draws.digits(3, Some(6)), 12345);
        assert_eq!(draws.consumed(), 2);
    }

    #[test]
    fn test_digits_zero_draw_is_smallest() {
        let mut draws = Scripted::new(&[0.0]);
        assert_eq!(draws.digits(7, None), 1_000_000);
    }

    #[test]
    fn test_digits_widest_count() {
        let mut draws = Scripted::new(&[0.5]);
        assert_eq!(draws.digits(MAX_DIGITS, None), 5_000_000_000_000_000_000);
    }

    #[test]
    #[should_panic(expected = "digits called for 20 digits")]
    fn test_digits_too_many_panics() {
        Scripted::new(&[0.5]).digits(20, None);
    }

    #[test]
    #[should_panic(expected = "at most 19 fit in a u64")]
    fn test_digits_drawn_count_too_many_panics() {
        // count = floor(0.99 * 10) + 15 = 23
        Scripted::new(&[0.99, 0.5]).digits(15, Some(25));
    }

    #[test]
    fn test_digits_exact_count_invariant() {
        let mut cursor = Cursor::new(1_425_925_102);
        for low in 1..=10 {
            for _ in 0..200 {
                assert_eq!(digit_count(cursor.digits(low, None)), low);
            }
        }
    }

    #[test]
    fn test_digits_range_invariant() {
        let mut cursor = Cursor::new(866_948_418);
        for (low, high) in [(1, 2), (2, 4), (3, 6), (1, 10)] {
            for _ in 0..500 {
                let n = digit_count(cursor.digits(low, Some(high)));
                assert!((low..high).contains(&n), "{n} digits outside {low}..{high}");
            }
        }
    }

    #[test]
    fn test_chance_and_below() {
        let mut draws = Scripted::new(&[0.1, 0.3, 0.99, 0.5]);
        assert!(draws.chance(0.15));
        assert!(!draws.chance(0.3));
        assert_eq!(draws.below(7), 6);
        assert_eq!(draws.ceil_of(12), 6);
    }
}
