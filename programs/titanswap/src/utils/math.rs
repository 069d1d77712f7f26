/// Floored integer square root: the largest r with r * r <= n.
/// Babylonian iteration; the estimate decreases monotonically until it
/// stops, so the loop terminates in O(log n) steps with no floating point.
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_known_values() {
        let inputs = [0u128, 2, 4, 100, 10_000, 46_175_872];
        let expected = [0u128, 1, 2, 10, 100, 6_795];
        for (n, want) in inputs.iter().zip(expected.iter()) {
            assert_eq!(isqrt(*n), *want, "isqrt({})", n);
        }
    }

    #[test]
    fn isqrt_is_floored() {
        for n in 0..2_000u128 {
            let r = isqrt(n);
            assert!(r * r <= n);
            assert!((r + 1) * (r + 1) > n);
        }
    }

    #[test]
    fn isqrt_large_inputs() {
        let n = u128::from(u64::MAX) * u128::from(u64::MAX);
        assert_eq!(isqrt(n), u128::from(u64::MAX));
        assert_eq!(isqrt(n - 1), u128::from(u64::MAX) - 1);
    }
}
