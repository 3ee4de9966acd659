const MAX_PREFIX: u32 = (i32::MAX / 10) as u32;
const MAX_LAST: u32 = (i32::MAX % 10) as u32;

/// Returns `0` when the reversed value does not fit in an `i32`.
pub fn reverse(x: i32) -> i32 {
    let negative = x < 0;
    let mut rest = x.unsigned_abs();

    let mut rev: u32 = 0;
    while rest != 0 {
        let digit = rest % 10;
        rest /= 10;

        // must hold before `rev * 10 + digit` is computed
        if rev > MAX_PREFIX || (rev == MAX_PREFIX && digit > MAX_LAST) {
            return 0;
        }
        rev = rev * 10 + digit;
    }

    let magnitude = match i32::try_from(rev) {
        Ok(m) => m,
        Err(_) => return 0,
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
