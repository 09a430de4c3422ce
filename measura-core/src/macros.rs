//! Macros for declaring cross-kind operators.
//!
//! Every entry multiplies or divides the two SI magnitudes and wraps the result in the output kind's SI unit, so
//! `Resistance * Current` is `Voltage::from_si(r.si * i.si)`.

/// Implements `$lhs * $rhs = $out`.
macro_rules! impl_product {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl core::ops::Mul<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn mul(self, rhs: $rhs) -> $out {
                <$out>::from_si(self.si_value() * rhs.si_value())
            }
        }
    };
}

/// Implements `$lhs / $rhs = $out`.
///
/// `$lhs` and `$rhs` must be different kinds; same-kind division is the generic ratio.
macro_rules! impl_quotient {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl core::ops::Div<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn div(self, rhs: $rhs) -> $out {
                <$out>::from_si(self.si_value() / rhs.si_value())
            }
        }
    };
}

/// Declares `$a * $b = $c` for two distinct kinds: both operand orders and both inverse quotients.
macro_rules! product {
    ($a:ty, $b:ty => $c:ty) => {
        $crate::macros::impl_product!($a, $b => $c);
        $crate::macros::impl_product!($b, $a => $c);
        $crate::macros::impl_quotient!($c, $a => $b);
        $crate::macros::impl_quotient!($c, $b => $a);
    };
}

/// Declares `$a * $a = $c`: the square and its root quotient.
macro_rules! square {
    ($a:ty => $c:ty) => {
        $crate::macros::impl_product!($a, $a => $c);
        $crate::macros::impl_quotient!($c, $a => $a);
    };
}

/// Declares `$a / $b = $c` with its inverse product in both orders and the remaining quotient.
macro_rules! quotient {
    ($a:ty, $b:ty => $c:ty) => {
        $crate::macros::product!($b, $c => $a);
    };
}

pub(crate) use {impl_product, impl_quotient, product, quotient, square};
