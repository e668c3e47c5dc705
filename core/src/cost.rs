use num_traits::{Bounded, Float};
use std::fmt::Debug;

/// Numeric domain the search accumulates path weights in.
///
/// `infinity` must compare greater than every reachable distance and
/// `combine` must absorb it, so unreached labels never turn finite by
/// accident.
pub trait CostDomain<C> {
    fn zero(&self) -> C;
    fn infinity(&self) -> C;
    fn combine(&self, a: C, b: C) -> C;
    fn less(&self, a: C, b: C) -> bool;
}

/// Primitive cost values with a natural "closed plus" arithmetic.
pub trait Cost: Copy + PartialOrd + Debug {
    fn zero() -> Self;
    fn infinity() -> Self;
    fn closed_add(self, other: Self) -> Self;
}

macro_rules! impl_integer_cost {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                fn zero() -> Self {
                    <$ty as num_traits::Zero>::zero()
                }

                fn infinity() -> Self {
                    <$ty as Bounded>::max_value()
                }

                fn closed_add(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                fn zero() -> Self {
                    <$ty as num_traits::Zero>::zero()
                }

                fn infinity() -> Self {
                    <$ty as Float>::infinity()
                }

                fn closed_add(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_cost!(f32, f64);

/// Default domain: zero, the type's maximum as infinity, saturating addition
/// and `<`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedPlus;

impl<C: Cost> CostDomain<C> for ClosedPlus {
    fn zero(&self) -> C {
        C::zero()
    }

    fn infinity(&self) -> C {
        C::infinity()
    }

    fn combine(&self, a: C, b: C) -> C {
        let inf = C::infinity();
        if a == inf || b == inf {
            return inf;
        }
        a.closed_add(b)
    }

    fn less(&self, a: C, b: C) -> bool {
        a < b
    }
}
