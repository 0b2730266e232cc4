//! Scalar operands: mixed arithmetic between [`Integer`] and the
//! primitive integer types, routed through `From`.

use core::ops::{Add, AddAssign, Div, Mul, Rem, Sub, SubAssign};

use crate::integer::Integer;

macro_rules! impl_scalar_binop {
    (impl $imp:ident, $method:ident for $scalar:ty) => {
        impl $imp<$scalar> for &Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, other: $scalar) -> Integer {
                $imp::$method(self, &Integer::from(other))
            }
        }

        impl $imp<$scalar> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, other: $scalar) -> Integer {
                $imp::$method(&self, &Integer::from(other))
            }
        }

        impl $imp<Integer> for $scalar {
            type Output = Integer;

            #[inline]
            fn $method(self, other: Integer) -> Integer {
                $imp::$method(&Integer::from(self), &other)
            }
        }
    };
}

macro_rules! impl_scalar_assign {
    (impl $imp:ident, $method:ident, $binop:ident, $binmethod:ident for $scalar:ty) => {
        impl $imp<$scalar> for Integer {
            #[inline]
            fn $method(&mut self, other: $scalar) {
                let lhs = core::mem::take(self);
                *self = $binop::$binmethod(&lhs, &Integer::from(other));
            }
        }
    };
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {
        $(
            impl_scalar_binop!(impl Add, add for $scalar);
            impl_scalar_binop!(impl Sub, sub for $scalar);
            impl_scalar_binop!(impl Mul, mul for $scalar);
            impl_scalar_binop!(impl Div, div for $scalar);
            impl_scalar_binop!(impl Rem, rem for $scalar);
            impl_scalar_assign!(impl AddAssign, add_assign, Add, add for $scalar);
            impl_scalar_assign!(impl SubAssign, sub_assign, Sub, sub for $scalar);
        )*
    };
}

impl_scalar_ops!(u32, u64, i32, i64);
