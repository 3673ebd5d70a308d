//! Check-digit arithmetic reused across document types.

/// Sum the decimal digits of `n` (e.g. `16` → `7`).
#[inline]
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Weighted sum of ASCII digits, reduced modulo 11.
///
/// `digits` and `weights` are zipped, so the shorter one bounds the sum.
/// The input must already be validated as ASCII digits: any other byte
/// counts as zero and still yields a plausible remainder.
pub fn weighted_mod11(digits: &str, weights: &[u32]) -> u32 {
    digits
        .bytes()
        .zip(weights)
        .map(|(b, w)| char::from(b).to_digit(10).unwrap_or(0) * w)
        .sum::<u32>()
        % 11
}

/// Reduce a stream of decimal digits modulo 97 without building the number.
///
/// Each step computes `r = (r * 10 + d) mod 97`, so the intermediate value
/// never exceeds `96 * 10 + 9`.
pub fn mod97<I>(digits: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    digits
        .into_iter()
        .fold(0, |remainder, digit| (remainder * 10 + digit) % 97)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sum_of_doubled_digits() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(8), 8);
        assert_eq!(digit_sum(10), 1);
        assert_eq!(digit_sum(18), 9);
    }

    #[test]
    fn weighted_mod11_known_value() {
        // 2*4 + 0*8 + 8*5 + 5*10 + 0*9 + 6*7 + 6*3 + 8*6 = 206, 206 mod 11 = 8
        assert_eq!(weighted_mod11("20850668", &[4, 8, 5, 10, 9, 7, 3, 6]), 8);
    }

    #[test]
    fn mod97_matches_native_arithmetic() {
        let n: u64 = 1_234_567_890_123;
        let text = n.to_string();
        let digits = text.bytes().map(|b| u32::from(b - b'0'));
        assert_eq!(u64::from(mod97(digits)), n % 97);
    }

    #[test]
    fn weighted_mod11_reads_non_digits_as_zero() {
        let weights = [4, 8, 5, 10];
        assert_eq!(weighted_mod11("a0b0", &weights), weighted_mod11("0000", &weights));
    }

    #[test]
    fn mod97_of_nothing_is_zero() {
        assert_eq!(mod97(std::iter::empty()), 0);
    }
}
