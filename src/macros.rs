// \file src/macros.rs
//! macros for trait implementations shared by digit accessors

/// Compare two accessor types by the values of their digits
macro_rules! impl_digit_cmp {
    ($lhs:ident, $rhs:ident) => {
        impl<'a, 'b, T, R, S> PartialEq<$rhs<'b, T, S>> for $lhs<'a, T, R>
        where
            T: Scalar,
            R: Radix,
            S: Radix,
        {
            #[inline]
            fn eq(&self, rhs: &$rhs<'b, T, S>) -> bool {
                self.get() == rhs.get()
            }
        }

        impl<'a, 'b, T, R, S> PartialOrd<$rhs<'b, T, S>> for $lhs<'a, T, R>
        where
            T: Scalar,
            R: Radix,
            S: Radix,
        {
            #[inline]
            fn partial_cmp(&self, rhs: &$rhs<'b, T, S>) -> Option<Ordering> {
                Some(self.get().cmp(&rhs.get()))
            }
        }
    };
}

/// Eq, Ord, Debug and Display for an accessor type
macro_rules! impl_digit_traits {
    ($t:ident) => {
        impl<T: Scalar, R: Radix> Eq for $t<'_, T, R> {}

        impl<T: Scalar, R: Radix> Ord for $t<'_, T, R> {
            #[inline]
            fn cmp(&self, rhs: &Self) -> Ordering {
                self.get().cmp(&rhs.get())
            }
        }

        impl<T: Scalar, R: Radix> fmt::Debug for $t<'_, T, R> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_struct(stringify!($t))
                 .field("digit", &self.get())
                 .field("divisor", &self.divisor)
                 .field("radix", &R::RADIX)
                 .finish()
            }
        }

        impl<T: Scalar, R: Radix> fmt::Display for $t<'_, T, R> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(&self.get(), f)
            }
        }
    };
}
