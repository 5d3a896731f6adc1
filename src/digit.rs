//! Digit accessors
//!
//! An accessor stands in for a reference to one digit of a number. It
//! stores no digit; every read recomputes the digit from the live number
//! and every write rebuilds the number with that digit replaced.
//!
//! [`DigitRef`] is read-only, [`DigitMut`] may also write. A `DigitMut`
//! converts into a `DigitRef`, never the other way around.
//!

use crate::stdlib::cell::Cell;
use crate::stdlib::cmp::Ordering;
use crate::stdlib::fmt;
use crate::stdlib::marker::PhantomData;
use crate::stdlib::ops::Deref;
use crate::stdlib::ptr;

use crate::position;
use crate::radix::Radix;
use crate::scalar::Scalar;


/// Where a view finds its number
pub(crate) enum Number<'a, T> {
    /// The number can not change while borrowed
    Fixed(&'a T),
    /// The number may be rewritten by a mutable view sharing the cell
    Live(&'a Cell<T>),
}

impl<T> Clone for Number<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Number<'_, T> {}

impl<T: Copy> Number<'_, T> {
    #[inline]
    pub(crate) fn get(self) -> T {
        match self {
            Number::Fixed(n) => *n,
            Number::Live(cell) => cell.get(),
        }
    }
}


/// Read access to a single digit
pub trait ReadDigit {
    /// Type of the number holding the digit
    type Number: Scalar;

    /// Radix of the digit
    type Radix: Radix;

    /// Current value of the digit, in `[0, RADIX)`
    fn get(&self) -> Self::Number;

    /// Value of the radix
    fn radix(&self) -> u32 {
        Self::Radix::RADIX
    }
}

/// Write access to a single digit
pub trait WriteDigit: ReadDigit {
    /// Replace digit with `digit` modulo the radix
    fn set(&self, digit: Self::Number) -> &Self;

    /// Copy the value of another digit into this one
    fn assign<D>(&self, other: &D) -> &Self
    where
        D: ReadDigit<Number = Self::Number>
    {
        self.set(other.get())
    }

    /// Add one to the digit, wrapping to zero past the largest digit
    fn increment(&self) -> &Self;

    /// Subtract one from the digit, wrapping from zero to the largest digit
    fn decrement(&self) -> &Self;

    /// Increment, returning the value the digit held before
    fn post_increment(&self) -> Self::Number {
        let prior = self.get();
        self.increment();
        prior
    }

    /// Decrement, returning the value the digit held before
    fn post_decrement(&self) -> Self::Number {
        let prior = self.get();
        self.decrement();
        prior
    }

    /// Exchange the digit values (not the accessors)
    fn swap_with(&self, other: &Self) {
        let lhs = self.get();
        let rhs = other.get();
        self.set(rhs);
        other.set(lhs);
    }
}


/// Read-only accessor of one digit of a number
#[derive(Clone, Copy)]
pub struct DigitRef<'a, T, R> {
    number: Number<'a, T>,
    divisor: u128,
    _radix: PhantomData<R>,
}

impl<'a, T: Scalar, R: Radix> DigitRef<'a, T, R> {
    #[inline]
    pub(crate) fn new(number: Number<'a, T>, divisor: u128) -> Self {
        Self {
            number: number,
            divisor: divisor,
            _radix: PhantomData,
        }
    }

    /// Current value of the digit
    #[inline]
    pub fn get(&self) -> T {
        T::from_digit(self.load())
    }

    /// Positional weight of the digit (RADIX raised to its position)
    pub fn divisor(&self) -> u128 {
        self.divisor
    }

    /// Pointer-like handle which dereferences back to this accessor
    pub fn pointer(&self) -> DigitPtr<'a, T, R> {
        DigitPtr(*self)
    }

    #[inline]
    pub(crate) fn load(&self) -> u128 {
        position::digit_at::<R>(self.number.get().magnitude(), self.divisor)
    }
}

impl<T: Scalar, R: Radix> ReadDigit for DigitRef<'_, T, R> {
    type Number = T;
    type Radix = R;

    fn get(&self) -> T {
        DigitRef::get(self)
    }
}


/// Read-write accessor of one digit of a number
///
/// Methods take `&self`: the number lives in a [`Cell`], so several
/// accessors into the same number may coexist and writes apply in
/// program order.
///
#[derive(Clone, Copy)]
pub struct DigitMut<'a, T, R> {
    number: &'a Cell<T>,
    divisor: u128,
    _radix: PhantomData<R>,
}

impl<'a, T: Scalar, R: Radix> DigitMut<'a, T, R> {
    #[inline]
    pub(crate) fn new(number: &'a Cell<T>, divisor: u128) -> Self {
        Self {
            number: number,
            divisor: divisor,
            _radix: PhantomData,
        }
    }

    /// Current value of the digit
    #[inline]
    pub fn get(&self) -> T {
        T::from_digit(self.load())
    }

    /// Replace digit with `digit` modulo the radix
    ///
    /// The sign of the number is kept, unless every digit becomes zero;
    /// there is no negative zero.
    ///
    /// ```
    /// use digit_view::DigitViewMut;
    ///
    /// let mut n = 12345;
    /// DigitViewMut::<_, digit_view::Decimal>::new(&mut n).digit(0).set(6);
    /// assert_eq!(n, 62345);
    /// ```
    #[inline]
    pub fn set(&self, digit: T) -> &Self {
        self.store(digit.reduce(R::wide()));
        self
    }

    /// Copy the value of another digit into this one
    pub fn assign<D: ReadDigit<Number = T>>(&self, other: &D) -> &Self {
        self.set(other.get())
    }

    /// Add one to the digit, wrapping to zero past the largest digit
    ///
    /// Never carries into the neighbouring digit.
    pub fn increment(&self) -> &Self {
        let radix = R::wide();
        self.store((self.load() + 1) % radix);
        self
    }

    /// Subtract one from the digit, wrapping from zero to the largest digit
    ///
    /// Never borrows from the neighbouring digit.
    pub fn decrement(&self) -> &Self {
        let radix = R::wide();
        self.store((self.load() + radix - 1) % radix);
        self
    }

    /// Increment, returning the value the digit held before
    pub fn post_increment(&self) -> T {
        let prior = self.get();
        self.increment();
        prior
    }

    /// Decrement, returning the value the digit held before
    pub fn post_decrement(&self) -> T {
        let prior = self.get();
        self.decrement();
        prior
    }

    /// Exchange the digit values held at the two positions
    ///
    /// Within one number both digits are replaced in a single write, so
    /// the sign survives even if one of the digits is the only nonzero one.
    pub fn swap(&self, other: &DigitMut<'_, T, R>) {
        if ptr::eq(self.number, other.number) {
            let n = self.number.get();
            let magnitude = n.magnitude();
            let lhs = position::digit_at::<R>(magnitude, self.divisor);
            let rhs = position::digit_at::<R>(magnitude, other.divisor);
            let magnitude = position::replace_digit::<R>(magnitude, self.divisor, rhs);
            let magnitude = position::replace_digit::<R>(magnitude, other.divisor, lhs);
            self.number.set(T::from_magnitude(magnitude, n.is_negative()));
        } else {
            let lhs = self.load();
            let rhs = other.load();
            self.store(rhs);
            other.store(lhs);
        }
    }

    /// Positional weight of the digit (RADIX raised to its position)
    pub fn divisor(&self) -> u128 {
        self.divisor
    }

    /// Read-only accessor of the same digit
    pub fn to_ref(&self) -> DigitRef<'a, T, R> {
        DigitRef::new(Number::Live(self.number), self.divisor)
    }

    /// Pointer-like handle which dereferences back to this accessor
    pub fn pointer(&self) -> DigitPtrMut<'a, T, R> {
        DigitPtrMut(*self)
    }

    #[inline]
    pub(crate) fn load(&self) -> u128 {
        position::digit_at::<R>(self.number.get().magnitude(), self.divisor)
    }

    pub(crate) fn store(&self, digit: u128) {
        let n = self.number.get();
        let magnitude = position::replace_digit::<R>(n.magnitude(), self.divisor, digit);
        self.number.set(T::from_magnitude(magnitude, n.is_negative()));
    }
}

impl<T: Scalar, R: Radix> ReadDigit for DigitMut<'_, T, R> {
    type Number = T;
    type Radix = R;

    fn get(&self) -> T {
        DigitMut::get(self)
    }
}

impl<T: Scalar, R: Radix> WriteDigit for DigitMut<'_, T, R> {
    fn set(&self, digit: T) -> &Self {
        DigitMut::set(self, digit)
    }

    fn increment(&self) -> &Self {
        DigitMut::increment(self)
    }

    fn decrement(&self) -> &Self {
        DigitMut::decrement(self)
    }

    fn swap_with(&self, other: &Self) {
        DigitMut::swap(self, other)
    }
}

impl<'a, T: Scalar, R: Radix> From<DigitMut<'a, T, R>> for DigitRef<'a, T, R> {
    fn from(digit: DigitMut<'a, T, R>) -> Self {
        digit.to_ref()
    }
}

impl_digit_cmp!(DigitRef, DigitRef);
impl_digit_cmp!(DigitRef, DigitMut);
impl_digit_cmp!(DigitMut, DigitRef);
impl_digit_cmp!(DigitMut, DigitMut);

impl_digit_traits!(DigitRef);
impl_digit_traits!(DigitMut);


/// Swap the values of two digits, which may belong to different numbers
///
/// ```
/// use digit_view::{swap, DigitViewMut, Decimal};
///
/// let mut n = 8675309;
/// let view = DigitViewMut::<_, Decimal>::new(&mut n);
/// swap(view.digit(0), view.digit(1));
/// assert_eq!(view.value(), 6875309);
/// ```
pub fn swap<T: Scalar, R: Radix>(a: DigitMut<'_, T, R>, b: DigitMut<'_, T, R>) {
    a.swap(&b);
}


/// Minimal pointer to a read-only digit
///
/// The only thing to do with it is dereference it, yielding the accessor.
#[derive(Clone, Copy)]
pub struct DigitPtr<'a, T, R>(DigitRef<'a, T, R>);

impl<'a, T, R> Deref for DigitPtr<'a, T, R> {
    type Target = DigitRef<'a, T, R>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Scalar, R: Radix> fmt::Debug for DigitPtr<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DigitPtr({:?})", self.0)
    }
}

/// Minimal pointer to a read-write digit
#[derive(Clone, Copy)]
pub struct DigitPtrMut<'a, T, R>(DigitMut<'a, T, R>);

impl<'a, T, R> Deref for DigitPtrMut<'a, T, R> {
    type Target = DigitMut<'a, T, R>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Scalar, R: Radix> fmt::Debug for DigitPtrMut<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DigitPtrMut({:?})", self.0)
    }
}

impl<'a, T: Scalar, R: Radix> From<DigitPtrMut<'a, T, R>> for DigitPtr<'a, T, R> {
    fn from(ptr: DigitPtrMut<'a, T, R>) -> Self {
        DigitPtr(ptr.0.to_ref())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    include!("digit.tests.rs");
}
