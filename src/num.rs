//! Generic numeric helpers.

use std::ops::Mul;

/// Returns `x * x`.
///
/// # Examples
/// ```
/// use u_grv::num::square;
/// assert_eq!(square(3.0_f32), 9.0);
/// assert_eq!(square(-4_i32), 16);
/// ```
#[inline]
pub fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}
