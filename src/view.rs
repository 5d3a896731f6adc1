//! Digit views
//!
//! A view binds to an integer owned by the caller, a compile-time radix,
//! and a digit count fixed at construction. It never owns the integer;
//! writes through a [`DigitViewMut`] land directly in the caller's value.
//!

use crate::stdlib::cell::Cell;
use crate::stdlib::fmt;
use crate::stdlib::marker::PhantomData;

use crate::algorithm;
use crate::cursor::{Cursor, CursorMut, Iter, IterMut};
use crate::digit::{DigitMut, DigitRef, Number};
use crate::position::{self, Direction, Forward, Reverse};
use crate::radix::{DefaultRadix, Radix};
use crate::scalar::Scalar;


/// Read-only access to the digits of a number
pub trait ReadDigits<'a> {
    /// Type of the viewed number
    type Number: Scalar;

    /// Radix of the digits
    type Radix: Radix;

    /// Number of digits in the view
    fn len(&self) -> usize;

    /// True if the view was given zero digits
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current value of the viewed number
    fn value(&self) -> Self::Number;

    /// Accessor of digit at index (0 is most significant), index is clamped
    fn digit_ref(&self, index: usize) -> DigitRef<'a, Self::Number, Self::Radix>;

    /// Accessor of digit at index, None if index is out of range
    fn get_ref(&self, index: usize) -> Option<DigitRef<'a, Self::Number, Self::Radix>> {
        if index < self.len() {
            Some(self.digit_ref(index))
        } else {
            None
        }
    }

    /// Iterate over digits from most to least significant
    fn iter_ref(&self) -> Iter<'a, Self::Number, Self::Radix, Forward>;
}

/// Read-write access to the digits of a number
pub trait WriteDigits<'a>: ReadDigits<'a> {
    /// Mutable accessor of digit at index, index is clamped
    fn digit_mut(&self, index: usize) -> DigitMut<'a, Self::Number, Self::Radix>;

    /// Mutable accessor of digit at index, None if index is out of range
    fn get_mut(&self, index: usize) -> Option<DigitMut<'a, Self::Number, Self::Radix>> {
        if index < self.len() {
            Some(self.digit_mut(index))
        } else {
            None
        }
    }

    /// Replace digit at index with `digit` modulo the radix
    fn set_digit(&self, index: usize, digit: Self::Number) {
        self.digit_mut(index).set(digit);
    }

    /// Iterate over mutable digits from most to least significant
    fn iter_digits_mut(&self) -> IterMut<'a, Self::Number, Self::Radix, Forward>;
}


/// Read-only view of the digits of a number
///
/// ```
/// use digit_view::{DigitView, Hexadecimal};
///
/// let n = 0x12345;
/// let view = DigitView::<_, Hexadecimal>::new(&n);
/// assert_eq!(view.len(), 5);
/// assert!(view.iter().map(|d| d.get()).eq([1, 2, 3, 4, 5]));
/// ```
pub struct DigitView<'a, T, R = DefaultRadix> {
    number: Number<'a, T>,
    digits: usize,
    _radix: PhantomData<R>,
}

impl<T, R> Clone for DigitView<'_, T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for DigitView<'_, T, R> {}

impl<'a, T: Scalar, R: Radix> DigitView<'a, T, R> {
    /// View with as many digits as the number currently has (zero has one)
    pub fn new(number: &'a T) -> Self {
        Self::bind(Number::Fixed(number))
    }

    /// View with explicit number of digits
    ///
    /// Digits more significant than the window are not reachable through
    /// the view.
    pub fn with_digits(number: &'a T, digits: usize) -> Self {
        Self::from_parts(Number::Fixed(number), digits)
    }

    /// View of a number shared with other (possibly mutable) views
    pub fn from_cell(number: &'a Cell<T>) -> Self {
        Self::bind(Number::Live(number))
    }

    /// View of a shared number with explicit number of digits
    pub fn from_cell_with_digits(number: &'a Cell<T>, digits: usize) -> Self {
        Self::from_parts(Number::Live(number), digits)
    }

    fn bind(number: Number<'a, T>) -> Self {
        let digits = position::count_digits::<R>(number.get().magnitude());
        Self::from_parts(number, digits)
    }

    pub(crate) fn from_parts(number: Number<'a, T>, digits: usize) -> Self {
        let () = R::ASSERT_VALID;
        Self {
            number: number,
            digits: digits,
            _radix: PhantomData,
        }
    }

    /// Number of digits in the view
    pub fn len(&self) -> usize {
        self.digits
    }

    /// True if the view was given zero digits
    pub fn is_empty(&self) -> bool {
        self.digits == 0
    }

    /// Current value of the viewed number
    pub fn value(&self) -> T {
        self.number.get()
    }

    /// Accessor of digit at index (0 is most significant)
    ///
    /// Index is clamped to `len()`; the accessor at `len()` is the
    /// end sentinel and reads the least significant digit.
    pub fn digit(&self, index: usize) -> DigitRef<'a, T, R> {
        self.digit_at::<Forward>(index)
    }

    /// Accessor of digit at index, None if index is out of range
    pub fn get(&self, index: usize) -> Option<DigitRef<'a, T, R>> {
        if index < self.digits {
            Some(self.digit(index))
        } else {
            None
        }
    }

    /// Cursor at the most significant digit
    pub fn begin(&self) -> Cursor<'a, T, R, Forward> {
        Cursor::new(*self, 0)
    }

    /// Cursor past the least significant digit
    pub fn end(&self) -> Cursor<'a, T, R, Forward> {
        Cursor::new(*self, self.digits)
    }

    /// Cursor at the least significant digit
    pub fn rbegin(&self) -> Cursor<'a, T, R, Reverse> {
        Cursor::new(*self, 0)
    }

    /// Cursor past the most significant digit
    pub fn rend(&self) -> Cursor<'a, T, R, Reverse> {
        Cursor::new(*self, self.digits)
    }

    /// Iterate over digits from most to least significant
    pub fn iter(&self) -> Iter<'a, T, R, Forward> {
        self.begin().until(self.end())
    }

    pub(crate) fn digit_at<D: Direction>(&self, index: usize) -> DigitRef<'a, T, R> {
        DigitRef::new(self.number, position::divisor::<R, D>(index, self.digits))
    }
}

impl<'a, T: Scalar, R: Radix> ReadDigits<'a> for DigitView<'a, T, R> {
    type Number = T;
    type Radix = R;

    fn len(&self) -> usize {
        self.digits
    }

    fn value(&self) -> T {
        DigitView::value(self)
    }

    fn digit_ref(&self, index: usize) -> DigitRef<'a, T, R> {
        self.digit(index)
    }

    fn iter_ref(&self) -> Iter<'a, T, R, Forward> {
        self.iter()
    }
}

impl<'a, T: Scalar, R: Radix> IntoIterator for DigitView<'a, T, R> {
    type Item = DigitRef<'a, T, R>;
    type IntoIter = Iter<'a, T, R, Forward>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Scalar, R: Radix> IntoIterator for &DigitView<'a, T, R> {
    type Item = DigitRef<'a, T, R>;
    type IntoIter = Iter<'a, T, R, Forward>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar, R: Radix> fmt::Debug for DigitView<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DigitView")
         .field("value", &self.value())
         .field("digits", &self.digits)
         .field("radix", &R::RADIX)
         .finish()
    }
}

impl<T: Scalar, R: Radix> fmt::Display for DigitView<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_digits(f, self.iter().map(|d| d.load()), R::RADIX)
    }
}


/// Read-write view of the digits of a number
///
/// ```
/// use digit_view::{DigitViewMut, Decimal};
///
/// let mut n = 8675309;
/// DigitViewMut::<_, Decimal>::new(&mut n).sort();
/// assert_eq!(n, 356789);
/// ```
pub struct DigitViewMut<'a, T, R = DefaultRadix> {
    number: &'a Cell<T>,
    digits: usize,
    _radix: PhantomData<R>,
}

impl<T, R> Clone for DigitViewMut<'_, T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R> Copy for DigitViewMut<'_, T, R> {}

impl<'a, T: Scalar, R: Radix> DigitViewMut<'a, T, R> {
    /// View with as many digits as the number currently has (zero has one)
    pub fn new(number: &'a mut T) -> Self {
        Self::from_cell(Cell::from_mut(number))
    }

    /// View with explicit number of digits
    ///
    /// Digits more significant than the window are not reachable through
    /// the view, and are left untouched by writes.
    pub fn with_digits(number: &'a mut T, digits: usize) -> Self {
        Self::from_cell_with_digits(Cell::from_mut(number), digits)
    }

    /// View of a number which may be shared with other views
    ///
    /// Views sharing a cell observe each other's writes in program order.
    pub fn from_cell(number: &'a Cell<T>) -> Self {
        let digits = position::count_digits::<R>(number.get().magnitude());
        Self::from_cell_with_digits(number, digits)
    }

    /// View of a shared number with explicit number of digits
    pub fn from_cell_with_digits(number: &'a Cell<T>, digits: usize) -> Self {
        let () = R::ASSERT_VALID;
        Self {
            number: number,
            digits: digits,
            _radix: PhantomData,
        }
    }

    /// Number of digits in the view
    pub fn len(&self) -> usize {
        self.digits
    }

    /// True if the view was given zero digits
    pub fn is_empty(&self) -> bool {
        self.digits == 0
    }

    /// Current value of the viewed number
    pub fn value(&self) -> T {
        self.number.get()
    }

    /// Read-only view of the same number and digit window
    pub fn as_view(&self) -> DigitView<'a, T, R> {
        DigitView::from_parts(Number::Live(self.number), self.digits)
    }

    /// Mutable accessor of digit at index (0 is most significant)
    ///
    /// Index is clamped to `len()`; the accessor at `len()` is the end
    /// sentinel and must not be written through.
    pub fn digit(&self, index: usize) -> DigitMut<'a, T, R> {
        self.digit_at::<Forward>(index)
    }

    /// Mutable accessor of digit at index, None if index is out of range
    pub fn get(&self, index: usize) -> Option<DigitMut<'a, T, R>> {
        if index < self.digits {
            Some(self.digit(index))
        } else {
            None
        }
    }

    /// Cursor at the most significant digit
    pub fn begin(&self) -> CursorMut<'a, T, R, Forward> {
        CursorMut::new(*self, 0)
    }

    /// Cursor past the least significant digit
    pub fn end(&self) -> CursorMut<'a, T, R, Forward> {
        CursorMut::new(*self, self.digits)
    }

    /// Cursor at the least significant digit
    pub fn rbegin(&self) -> CursorMut<'a, T, R, Reverse> {
        CursorMut::new(*self, 0)
    }

    /// Cursor past the most significant digit
    pub fn rend(&self) -> CursorMut<'a, T, R, Reverse> {
        CursorMut::new(*self, self.digits)
    }

    /// Read-only cursor at the most significant digit
    pub fn cbegin(&self) -> Cursor<'a, T, R, Forward> {
        self.as_view().begin()
    }

    /// Read-only cursor past the least significant digit
    pub fn cend(&self) -> Cursor<'a, T, R, Forward> {
        self.as_view().end()
    }

    /// Read-only cursor at the least significant digit
    pub fn crbegin(&self) -> Cursor<'a, T, R, Reverse> {
        self.as_view().rbegin()
    }

    /// Read-only cursor past the most significant digit
    pub fn crend(&self) -> Cursor<'a, T, R, Reverse> {
        self.as_view().rend()
    }

    /// Iterate over read-only digits from most to least significant
    pub fn iter(&self) -> Iter<'a, T, R, Forward> {
        self.as_view().iter()
    }

    /// Iterate over mutable digits from most to least significant
    pub fn iter_mut(&self) -> IterMut<'a, T, R, Forward> {
        self.begin().until(self.end())
    }

    /// Exchange the digits at positions `a` and `b`
    pub fn swap(&self, a: usize, b: usize) {
        self.digit(a).swap(&self.digit(b));
    }

    /// Reverse the order of the digits in the window
    pub fn reverse(&self) {
        algorithm::reverse(self.begin(), self.end());
    }

    /// Sort digits ascending, most significant first
    pub fn sort(&self) {
        algorithm::sort(self.begin(), self.end());
    }

    /// Set every digit in the window to `digit`
    pub fn fill(&self, digit: T) {
        algorithm::fill(self.begin(), self.end(), digit);
    }

    pub(crate) fn digit_at<D: Direction>(&self, index: usize) -> DigitMut<'a, T, R> {
        DigitMut::new(self.number, position::divisor::<R, D>(index, self.digits))
    }
}

impl<'a, T: Scalar, R: Radix> From<DigitViewMut<'a, T, R>> for DigitView<'a, T, R> {
    fn from(view: DigitViewMut<'a, T, R>) -> Self {
        view.as_view()
    }
}

impl<'a, T: Scalar, R: Radix> ReadDigits<'a> for DigitViewMut<'a, T, R> {
    type Number = T;
    type Radix = R;

    fn len(&self) -> usize {
        self.digits
    }

    fn value(&self) -> T {
        DigitViewMut::value(self)
    }

    fn digit_ref(&self, index: usize) -> DigitRef<'a, T, R> {
        self.digit(index).to_ref()
    }

    fn iter_ref(&self) -> Iter<'a, T, R, Forward> {
        self.iter()
    }
}

impl<'a, T: Scalar, R: Radix> WriteDigits<'a> for DigitViewMut<'a, T, R> {
    fn digit_mut(&self, index: usize) -> DigitMut<'a, T, R> {
        self.digit(index)
    }

    fn iter_digits_mut(&self) -> IterMut<'a, T, R, Forward> {
        self.iter_mut()
    }
}

impl<'a, T: Scalar, R: Radix> IntoIterator for DigitViewMut<'a, T, R> {
    type Item = DigitMut<'a, T, R>;
    type IntoIter = IterMut<'a, T, R, Forward>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T: Scalar, R: Radix> IntoIterator for &DigitViewMut<'a, T, R> {
    type Item = DigitMut<'a, T, R>;
    type IntoIter = IterMut<'a, T, R, Forward>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Scalar, R: Radix> fmt::Debug for DigitViewMut<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DigitViewMut")
         .field("value", &self.value())
         .field("digits", &self.digits)
         .field("radix", &R::RADIX)
         .finish()
    }
}

impl<T: Scalar, R: Radix> fmt::Display for DigitViewMut<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.as_view(), f)
    }
}


/// Write digit symbols, most significant first
///
/// Radixes up to 36 use `0-9a-z`, larger ones print each digit in
/// decimal separated by `.`
fn write_digits<I>(f: &mut fmt::Formatter, digits: I, radix: u32) -> fmt::Result
where
    I: Iterator<Item = u128>
{
    use crate::stdlib::fmt::Write;

    for (i, d) in digits.enumerate() {
        // digits are always below radix
        let symbol = if radix <= 36 { char::from_digit(d as u32, radix) } else { None };
        match symbol {
            Some(c) => f.write_char(c)?,
            None if i == 0 => write!(f, "{}", d)?,
            None => write!(f, ".{}", d)?,
        }
    }
    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;
    include!("view.tests.rs");
}
