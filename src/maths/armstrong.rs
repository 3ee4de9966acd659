use crate::maths::digit_count;

/// Zero counts as an Armstrong number. Negative numbers never do.
pub fn is_armstrong(n: i64) -> bool {
    if n <= 0 {
        return n == 0;
    }

    let original = n as u64;
    let k = digit_count(original);

    let mut rest = original;
    let mut sum: u64 = 0;
    while rest > 0 {
        let digit = rest % 10;
        rest /= 10;

        sum = match digit.checked_pow(k).and_then(|p| sum.checked_add(p)) {
            Some(s) => s,
            None => return false,
        };
    }

    sum == original
}
