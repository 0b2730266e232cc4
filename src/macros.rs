// Operator forwarding for the owned/borrowed argument grid.
//
// The by-reference implementation is canonical; the owned forms forward
// to it so every `impl` block only has to be written once.

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(&self, &other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<&$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                $imp::$method(&self, other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for &$res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                $imp::$method(self, &other)
            }
        }
    };
}

/// Forward everything to `impl $imp<&$res> for &$res`.
macro_rules! forward_all_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
    };
}

/// Compound assignment in terms of the binary operator.
macro_rules! forward_binop_assign {
    (impl $imp:ident for $res:ty, $method:ident, $binop:ident, $binmethod:ident) => {
        impl $imp<$res> for $res {
            #[inline]
            fn $method(&mut self, other: $res) {
                let lhs = core::mem::take(self);
                *self = $binop::$binmethod(lhs, other);
            }
        }

        impl $imp<&$res> for $res {
            #[inline]
            fn $method(&mut self, other: &$res) {
                let lhs = core::mem::take(self);
                *self = $binop::$binmethod(lhs, other);
            }
        }
    };
}
