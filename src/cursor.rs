//! Cursors and iterators over the digits of a view
//!
//! A cursor is a position in `[0, len]` plus the view it walks. Moving a
//! cursor saturates at either end instead of wrapping. The position
//! `len` is past-the-end and must not be dereferenced.
//!
//! Forward cursors visit most significant digit first, reverse cursors
//! visit least significant first over the same index range.
//!

use crate::stdlib::cmp::Ordering;
use crate::stdlib::fmt;
use crate::stdlib::iter::FusedIterator;
use crate::stdlib::marker::PhantomData;
use crate::stdlib::ops::{Add, AddAssign, Sub, SubAssign};

use crate::digit::{DigitMut, DigitRef, ReadDigit};
use crate::position::{self, Direction, Forward};
use crate::radix::Radix;
use crate::scalar::Scalar;
use crate::view::{DigitView, DigitViewMut};


/// Cursor which supports random-access movement
///
/// Implemented by every cursor flavour, so the functions in
/// [`algorithm`](crate::algorithm) work in either direction and
/// with either access mode.
pub trait RandomAccess: Copy + Ord {
    /// Accessor produced by dereferencing the cursor
    type Digit: ReadDigit;

    /// Position of the cursor
    fn index(&self) -> usize;

    /// True if cursor is past the last digit
    fn is_end(&self) -> bool;

    /// Cursor moved by `n` positions, saturating at either end
    fn offset(&self, n: isize) -> Self;

    /// Signed number of positions from `other` to `self`
    fn distance(&self, other: &Self) -> isize;

    /// Accessor of the digit under the cursor
    fn digit(&self) -> Self::Digit;
}


/// Read-only cursor
pub struct Cursor<'a, T, R, D = Forward> {
    view: DigitView<'a, T, R>,
    index: usize,
    _direction: PhantomData<D>,
}

/// Read-write cursor
pub struct CursorMut<'a, T, R, D = Forward> {
    view: DigitViewMut<'a, T, R>,
    index: usize,
    _direction: PhantomData<D>,
}


/// Operations shared by both cursor flavours
macro_rules! impl_cursor {
    ($cursor:ident, $view:ident, $digit:ident) => {
        impl<T, R, D> Clone for $cursor<'_, T, R, D> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T, R, D> Copy for $cursor<'_, T, R, D> {}

        impl<'a, T: Scalar, R: Radix, D: Direction> $cursor<'a, T, R, D> {
            pub(crate) fn new(view: $view<'a, T, R>, index: usize) -> Self {
                Self {
                    view: view,
                    index: position::clamp_index(index, view.len()),
                    _direction: PhantomData,
                }
            }

            /// Position of the cursor
            pub fn index(&self) -> usize {
                self.index
            }

            /// True if cursor is past the last digit
            pub fn is_end(&self) -> bool {
                self.index == self.view.len()
            }

            /// Move one position towards the end (`++it`)
            pub fn step_forward(&mut self) -> &mut Self {
                if self.index < self.view.len() {
                    self.index += 1;
                }
                self
            }

            /// Move one position towards the beginning (`--it`)
            pub fn step_back(&mut self) -> &mut Self {
                if self.index > 0 {
                    self.index -= 1;
                }
                self
            }

            /// Step forward, returning the cursor as it was before (`it++`)
            pub fn post_step_forward(&mut self) -> Self {
                let prior = *self;
                self.step_forward();
                prior
            }

            /// Step back, returning the cursor as it was before (`it--`)
            pub fn post_step_back(&mut self) -> Self {
                let prior = *self;
                self.step_back();
                prior
            }

            /// Move by `n` positions, saturating at either end
            pub fn advance(&mut self, n: isize) -> &mut Self {
                self.index = position::offset_index(self.index, n, self.view.len());
                self
            }

            /// Move back by `n` positions, saturating at either end
            pub fn retreat(&mut self, n: isize) -> &mut Self {
                self.advance(n.saturating_neg())
            }

            /// Copy of this cursor moved by `n` positions
            pub fn offset(&self, n: isize) -> Self {
                let mut moved = *self;
                moved.advance(n);
                moved
            }

            /// Signed number of positions from `other` to `self`
            pub fn distance(&self, other: &Self) -> isize {
                position::index_distance(self.index, other.index)
            }

            /// Accessor of the digit under the cursor
            ///
            /// Must not be called on the end cursor.
            pub fn digit(&self) -> $digit<'a, T, R> {
                debug_assert!(!self.is_end(), "dereferenced end cursor");
                self.view.digit_at::<D>(self.index)
            }

            /// Accessor of the digit under the cursor, None at the end
            pub fn get(&self) -> Option<$digit<'a, T, R>> {
                if self.is_end() {
                    None
                } else {
                    Some(self.view.digit_at::<D>(self.index))
                }
            }
        }

        impl<'a, T: Scalar, R: Radix, D: Direction> RandomAccess for $cursor<'a, T, R, D> {
            type Digit = $digit<'a, T, R>;

            fn index(&self) -> usize {
                self.index
            }

            fn is_end(&self) -> bool {
                $cursor::is_end(self)
            }

            fn offset(&self, n: isize) -> Self {
                $cursor::offset(self, n)
            }

            fn distance(&self, other: &Self) -> isize {
                $cursor::distance(self, other)
            }

            fn digit(&self) -> Self::Digit {
                $cursor::digit(self)
            }
        }

        impl<T, R, D> PartialEq for $cursor<'_, T, R, D> {
            fn eq(&self, rhs: &Self) -> bool {
                self.index == rhs.index
            }
        }

        impl<T, R, D> Eq for $cursor<'_, T, R, D> {}

        impl<T, R, D> PartialOrd for $cursor<'_, T, R, D> {
            fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                Some(self.cmp(rhs))
            }
        }

        impl<T, R, D> Ord for $cursor<'_, T, R, D> {
            fn cmp(&self, rhs: &Self) -> Ordering {
                self.index.cmp(&rhs.index)
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> Add<isize> for $cursor<'_, T, R, D> {
            type Output = Self;

            fn add(self, n: isize) -> Self {
                self.offset(n)
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> Sub<isize> for $cursor<'_, T, R, D> {
            type Output = Self;

            fn sub(self, n: isize) -> Self {
                self.offset(n.saturating_neg())
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> Sub for $cursor<'_, T, R, D> {
            type Output = isize;

            fn sub(self, rhs: Self) -> isize {
                self.distance(&rhs)
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> AddAssign<isize> for $cursor<'_, T, R, D> {
            fn add_assign(&mut self, n: isize) {
                self.advance(n);
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> SubAssign<isize> for $cursor<'_, T, R, D> {
            fn sub_assign(&mut self, n: isize) {
                self.retreat(n);
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> fmt::Debug for $cursor<'_, T, R, D> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                 .field("direction", &D::NAME)
                 .field("index", &self.index)
                 .field("digits", &self.view.len())
                 .finish()
            }
        }
    };
}

impl_cursor!(Cursor, DigitView, DigitRef);
impl_cursor!(CursorMut, DigitViewMut, DigitMut);


impl<'a, T: Scalar, R: Radix, D: Direction> Cursor<'a, T, R, D> {
    /// Iterator over digits from this cursor up to (not including) `end`
    pub fn until(self, end: Self) -> Iter<'a, T, R, D> {
        Iter {
            view: self.view,
            front: self.index,
            back: end.index.max(self.index),
            _direction: PhantomData,
        }
    }
}

impl<'a, T: Scalar, R: Radix, D: Direction> CursorMut<'a, T, R, D> {
    /// Read-only cursor at the same position
    pub fn to_const(&self) -> Cursor<'a, T, R, D> {
        Cursor::new(self.view.as_view(), self.index)
    }

    /// Iterator over mutable digits from this cursor up to (not including) `end`
    pub fn until(self, end: Self) -> IterMut<'a, T, R, D> {
        IterMut {
            view: self.view,
            front: self.index,
            back: end.index.max(self.index),
            _direction: PhantomData,
        }
    }
}

impl<'a, T: Scalar, R: Radix, D: Direction> From<CursorMut<'a, T, R, D>> for Cursor<'a, T, R, D> {
    fn from(cursor: CursorMut<'a, T, R, D>) -> Self {
        cursor.to_const()
    }
}


/// Iterator over read-only digits of a view
pub struct Iter<'a, T, R, D = Forward> {
    view: DigitView<'a, T, R>,
    front: usize,
    back: usize,
    _direction: PhantomData<D>,
}

/// Iterator over mutable digits of a view
pub struct IterMut<'a, T, R, D = Forward> {
    view: DigitViewMut<'a, T, R>,
    front: usize,
    back: usize,
    _direction: PhantomData<D>,
}

macro_rules! impl_iter {
    ($iter:ident, $digit:ident) => {
        impl<T, R, D> Clone for $iter<'_, T, R, D> {
            fn clone(&self) -> Self {
                Self {
                    view: self.view,
                    front: self.front,
                    back: self.back,
                    _direction: PhantomData,
                }
            }
        }

        impl<'a, T: Scalar, R: Radix, D: Direction> Iterator for $iter<'a, T, R, D> {
            type Item = $digit<'a, T, R>;

            fn next(&mut self) -> Option<Self::Item> {
                if self.front < self.back {
                    let digit = self.view.digit_at::<D>(self.front);
                    self.front += 1;
                    Some(digit)
                } else {
                    None
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let n = self.back - self.front;
                (n, Some(n))
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> DoubleEndedIterator for $iter<'_, T, R, D> {
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.front < self.back {
                    self.back -= 1;
                    Some(self.view.digit_at::<D>(self.back))
                } else {
                    None
                }
            }
        }

        impl<T: Scalar, R: Radix, D: Direction> ExactSizeIterator for $iter<'_, T, R, D> {}

        impl<T: Scalar, R: Radix, D: Direction> FusedIterator for $iter<'_, T, R, D> {}

        impl<T: Scalar, R: Radix, D: Direction> fmt::Debug for $iter<'_, T, R, D> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_struct(stringify!($iter))
                 .field("direction", &D::NAME)
                 .field("front", &self.front)
                 .field("back", &self.back)
                 .finish()
            }
        }
    };
}

impl_iter!(Iter, DigitRef);
impl_iter!(IterMut, DigitMut);


#[cfg(test)]
mod test {
    use super::*;
    include!("cursor.tests.rs");
}
