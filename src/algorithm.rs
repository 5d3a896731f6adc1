//! Generic sequence algorithms over cursor ranges
//!
//! Each function takes a half-open range `[first, last)` of
//! [`RandomAccess`] cursors, so the same code sorts, reverses or
//! compares digits in forward or reverse order. None of them allocate.
//!
//! ```
//! use digit_view::{algorithm, DigitViewMut, Decimal};
//!
//! let mut n = 8675309u32;
//! let view = DigitViewMut::<_, Decimal>::new(&mut n);
//!
//! // sorting least significant digit first yields descending digits
//! algorithm::sort(view.rbegin(), view.rend());
//! assert_eq!(view.value(), 9876530);
//! ```

use crate::stdlib::cmp::Ordering;

use crate::cursor::RandomAccess;
use crate::digit::{ReadDigit, WriteDigit};


/// Digit type behind a cursor
type NumberOf<C> = <<C as RandomAccess>::Digit as ReadDigit>::Number;


/// Number of positions in `[first, last)`, zero if `last` precedes `first`
fn range_len<C: RandomAccess>(first: &C, last: &C) -> usize {
    let n = last.distance(first);
    if n > 0 { n as usize } else { 0 }
}

/// Reverse digits in `[first, last)`
pub fn reverse<C>(first: C, last: C)
where
    C: RandomAccess,
    C::Digit: WriteDigit,
{
    let mut lo = first;
    let mut hi = last;
    while lo < hi {
        hi = hi.offset(-1);
        if lo == hi {
            break;
        }
        lo.digit().swap_with(&hi.digit());
        lo = lo.offset(1);
    }
}

/// Sort digits in `[first, last)` ascending
pub fn sort<C>(first: C, last: C)
where
    C: RandomAccess,
    C::Digit: WriteDigit,
{
    sort_by(first, last, |a, b| a.cmp(b));
}

/// Sort digits in `[first, last)` with comparator
///
/// Insertion sort: stable and in place. Quadratic in the number of
/// digits, which stays small for primitive integers.
pub fn sort_by<C, F>(first: C, last: C, mut compare: F)
where
    C: RandomAccess,
    C::Digit: WriteDigit,
    F: FnMut(&NumberOf<C>, &NumberOf<C>) -> Ordering,
{
    let len = range_len(&first, &last);
    for i in 1..len {
        let mut j = i as isize;
        while j > 0 {
            let prev = first.offset(j - 1).digit();
            let curr = first.offset(j).digit();
            if compare(&curr.get(), &prev.get()) != Ordering::Less {
                break;
            }
            prev.swap_with(&curr);
            j -= 1;
        }
    }
}

/// True if digits in `[first, last)` are in non-decreasing order
pub fn is_sorted<C: RandomAccess>(first: C, last: C) -> bool {
    let len = range_len(&first, &last) as isize;
    (1..len).all(|i| first.offset(i - 1).digit().get() <= first.offset(i).digit().get())
}

/// True if `[first1, last1)` holds the same digit values as the range
/// starting at `first2`
///
/// A second range which runs out early compares unequal.
pub fn equal<C1, C2>(first1: C1, last1: C1, first2: C2) -> bool
where
    C1: RandomAccess,
    C2: RandomAccess,
    C2::Digit: ReadDigit<Number = NumberOf<C1>>,
{
    let len = range_len(&first1, &last1) as isize;
    for i in 0..len {
        let other = first2.offset(i);
        if other.is_end() || first1.offset(i).digit().get() != other.digit().get() {
            return false;
        }
    }
    true
}

/// Copy digit values of `[first, last)` into the range starting at `dest`
///
/// Stops early if `dest` reaches its end. Returns the cursor past the
/// last digit written.
pub fn copy<C, O>(first: C, last: C, dest: O) -> O
where
    C: RandomAccess,
    O: RandomAccess,
    O::Digit: WriteDigit<Number = NumberOf<C>>,
{
    let mut out = dest;
    let len = range_len(&first, &last) as isize;
    for i in 0..len {
        if out.is_end() {
            break;
        }
        out.digit().set(first.offset(i).digit().get());
        out = out.offset(1);
    }
    out
}

/// Set every digit in `[first, last)` to `digit` (modulo the radix)
pub fn fill<C>(first: C, last: C, digit: NumberOf<C>)
where
    C: RandomAccess,
    C::Digit: WriteDigit,
{
    let len = range_len(&first, &last) as isize;
    for i in 0..len {
        first.offset(i).digit().set(digit);
    }
}

/// Replace each digit in `[first, last)` with `f(digit)` (modulo the radix)
pub fn transform<C, F>(first: C, last: C, mut f: F)
where
    C: RandomAccess,
    C::Digit: WriteDigit,
    F: FnMut(NumberOf<C>) -> NumberOf<C>,
{
    let len = range_len(&first, &last) as isize;
    for i in 0..len {
        let digit = first.offset(i).digit();
        digit.set(f(digit.get()));
    }
}


#[cfg(test)]
mod test {
    use super::*;
    include!("algorithm.tests.rs");
}
