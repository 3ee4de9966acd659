pub fn list_divisors(n: i64) -> Vec<i64> {
    if n <= 0 {
        return Vec::new();
    }

    let mut divisors = Vec::new();
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            divisors.push(i);
            let pair = n / i;
            if pair != i {
                divisors.push(pair);
            }
        }
        i += 1;
    }

    divisors.sort_unstable();
    divisors
}

pub fn count_divisors(n: i64) -> usize {
    if n <= 0 {
        return 0;
    }

    let mut count = 0;
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            count += 1;
            if n / i != i {
                count += 1;
            }
        }
        i += 1;
    }
    count
}

pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
