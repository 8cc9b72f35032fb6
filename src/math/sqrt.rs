//! Integer square root.

/// Floor of the square root of `n`, via Newton's method.
///
/// Exact for every `u128`: the result `r` satisfies `r * r <= n < (r + 1)^2`.
///
/// # Examples
///
/// ```
/// use tandem_amm::math::isqrt;
///
/// assert_eq!(isqrt(1_000_000_000_000), 1_000_000);
/// assert_eq!(isqrt(15), 3);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Initial guess above the root: 2^(ceil(bits/2)).
    let bits = 128 - n.leading_zeros();
    let mut x: u128 = 1 << bits.div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
