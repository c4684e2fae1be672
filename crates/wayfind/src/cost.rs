use std::fmt::Debug;
use std::ops::Add;

/// Numeric type used for `g`, `h` and `f` values.
///
/// Costs are expected to be non-negative. Floating-point costs are accepted
/// but NaN is never checked for; a NaN cost makes ordering meaningless.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Additive identity.
    const ZERO: Self;
}

macro_rules! impl_cost {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_cost! {
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
}
