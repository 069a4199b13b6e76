use std::fmt::Debug;

/// Accumulated path cost.
///
/// Costs must be totally ordered and expose an additive identity (the
/// default start cost) and a maximum value, used as the "no goal found yet"
/// sentinel.
pub trait Cost: Copy + Ord + Debug {
    /// The additive identity, used as the default start cost.
    const ZERO: Self;
    /// The largest representable cost.
    const MAX: Self;
}

macro_rules! impl_cost_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_cost_for!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
