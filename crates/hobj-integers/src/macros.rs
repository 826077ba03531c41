//! Operator forwarding for the newtype wrappers.

/// Implements a binary operator for owned/owned, owned/borrowed and
/// borrowed/borrowed operands by forwarding to the wrapped `dashu` value.
macro_rules! forward_binop {
    ($ty:ident, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty(std::ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$trait<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$trait::$method(self.0, &rhs.0))
            }
        }

        impl std::ops::$trait for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $ty(std::ops::$trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

/// Implements `Neg` for both the owned and the borrowed wrapper.
macro_rules! forward_neg {
    ($ty:ident) => {
        impl std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-self.0)
            }
        }

        impl std::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty(-&self.0)
            }
        }
    };
}
