//! Integer square root for first-deposit share minting.

/// `floor(√n)` by Newton iteration.
///
/// The iteration starts at `ceil(n / 2)` and decreases monotonically until
/// it stops improving, which is exactly the floor root.  For `n` up to
/// `u64::MAX²` every intermediate fits in a `u128`.
///
/// # Examples
///
/// ```
/// use pairpool::math::isqrt;
///
/// assert_eq!(isqrt(0), 0);
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// assert_eq!(isqrt(1_000 * 4_000), 2_000);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = n / 2 + n % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
