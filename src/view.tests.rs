use paste::paste;
use crate::stdlib::cell::Cell;
use crate::digit::ReadDigit;
use crate::radix::{Decimal, Hexadecimal, Octal, Base};

include!("test_macros.rs");

macro_rules! impl_case {
    (len $radix:ident: $n:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< len_ $radix:lower _ $n >]() {
                let n: i64 = $n;
                assert_eq!(DigitView::<_, $radix>::new(&n).len(), $expected);
                let m = -n;
                assert_eq!(DigitView::<_, $radix>::new(&m).len(), $expected);
            }
        }
    };
}

impl_case!(len Octal: 0 => 1);
impl_case!(len Octal: 7 => 1);
impl_case!(len Octal: 8 => 2);
impl_case!(len Octal: 63 => 2);
impl_case!(len Octal: 64 => 3);
impl_case!(len Octal: 512 => 4);
impl_case!(len Octal: 12345 => 5);
impl_case!(len Decimal: 0 => 1);
impl_case!(len Decimal: 9 => 1);
impl_case!(len Decimal: 10 => 2);
impl_case!(len Decimal: 99 => 2);
impl_case!(len Decimal: 100 => 3);
impl_case!(len Decimal: 12345 => 5);
impl_case!(len Decimal: 4294967295 => 10);
impl_case!(len Hexadecimal: 0 => 1);
impl_case!(len Hexadecimal: 15 => 1);
impl_case!(len Hexadecimal: 16 => 2);
impl_case!(len Hexadecimal: 255 => 2);
impl_case!(len Hexadecimal: 256 => 3);
impl_case!(len Hexadecimal: 74565 => 5);
impl_case!(len Hexadecimal: 4294967295 => 8);

#[test]
fn len_extremes() {
    assert_eq!(DigitView::<_, Decimal>::new(&u128::MAX).len(), 39);
    assert_eq!(DigitView::<_, Decimal>::new(&i8::MIN).len(), 3);
    assert_eq!(DigitView::<_, Hexadecimal>::new(&u64::MAX).len(), 16);
}

#[test]
fn digits_12345() {
    let n = 12345;
    assert_digits!(DigitView::<_, Decimal>::new(&n), [1, 2, 3, 4, 5]);
}

#[test]
fn digits_hex_12345() {
    let n = 0x12345;
    assert_digits!(DigitView::<_, Hexadecimal>::new(&n), [1, 2, 3, 4, 5]);
}

#[test]
fn zero_has_one_digit() {
    let mut n = 0;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    assert_digits!(view, [0]);
    view.digit(0).set(3);
    assert_eq!(view.value(), 3);
}

#[test]
fn set_digit_12345() {
    let mut n = 12345;
    DigitViewMut::<_, Decimal>::new(&mut n).digit(0).set(6);
    assert_eq!(n, 62345);
}

#[test]
fn narrow_window_leaves_high_digits() {
    let mut n = 12345;
    let view = DigitViewMut::<_, Decimal>::with_digits(&mut n, 3);
    assert_digits!(view, [3, 4, 5]);

    view.digit(0).set(9);
    view.reverse();
    assert_eq!(view.value(), 12549);
}

#[test]
fn wide_window_has_leading_zeros() {
    let mut n = 42;
    let view = DigitViewMut::<_, Decimal>::with_digits(&mut n, 5);
    assert_digits!(view, [0, 0, 0, 4, 2]);

    view.digit(0).set(1);
    assert_eq!(view.value(), 10042);
}

#[test]
fn read_only_with_digits() {
    let n = 7;
    assert_digits!(DigitView::<_, Decimal>::with_digits(&n, 3), [0, 0, 7]);
}

#[test]
fn empty_window() {
    let n = 123;
    let view = DigitView::<_, Decimal>::with_digits(&n, 0);
    assert!(view.is_empty());
    assert_eq!(view.iter().count(), 0);
    assert!(view.get(0).is_none());
    assert_eq!(view.begin(), view.end());
}

#[test]
fn view_size_is_fixed() {
    let mut n = 999;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(0).set(0);
    view.digit(1).set(0);
    assert_eq!(view.value(), 9);
    assert_eq!(view.len(), 3);
}

#[test]
fn get_checks_range() {
    let n = 123;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!(view.get(2).map(|d| d.get()), Some(3));
    assert!(view.get(3).is_none());
    assert!(view.get(usize::MAX).is_none());

    let mut m = 456;
    let view = DigitViewMut::<_, Decimal>::new(&mut m);
    assert_eq!(view.get(0).map(|d| d.get()), Some(4));
    assert!(view.get(3).is_none());
}

#[test]
fn digit_index_is_clamped() {
    let n = 123;
    let view = DigitView::<_, Decimal>::new(&n);
    // the end sentinel in forward order has divisor 1
    assert_eq!(view.digit(3).divisor(), 1);
    assert_eq!(view.digit(1000).divisor(), 1);
}

#[test]
fn as_view_follows_writes() {
    let mut n = 100;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    let read_only = view.as_view();
    view.digit(2).set(5);
    assert_eq!(read_only.value(), 105);
    assert_digits!(read_only, [1, 0, 5]);

    let converted: DigitView<_, _> = view.into();
    assert_eq!(converted.len(), 3);
}

#[test]
fn views_with_different_radix_share_number() {
    let n = Cell::new(0x1234);
    let hex = DigitViewMut::<_, Hexadecimal>::from_cell(&n);
    let dec = DigitView::<_, Decimal>::from_cell(&n);
    assert_digits!(dec, [4, 6, 6, 0]);

    hex.digit(0).set(0);
    assert_eq!(n.get(), 0x234);
    assert_eq!(dec.value(), 564);
    // digit count was fixed when `dec` was bound
    assert_digits!(dec, [0, 5, 6, 4]);
}

#[test]
fn from_cell_with_digits() {
    let n = Cell::new(5u16);
    let view = DigitViewMut::<_, Octal>::from_cell_with_digits(&n, 3);
    view.digit(0).set(1);
    assert_eq!(n.get(), 0o105);
    assert_digits!(DigitView::<_, Octal>::from_cell_with_digits(&n, 2), [0, 5]);
}

#[test]
fn for_loop_over_view() {
    let n = 2468;
    let view = DigitView::<_, Decimal>::new(&n);
    let mut sum = 0;
    for d in &view {
        sum += d.get();
    }
    assert_eq!(sum, 20);
}

#[test]
fn for_loop_over_mut_view() {
    let mut n = 1234;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    for d in view {
        d.increment();
    }
    assert_eq!(n, 2345);
}

#[test]
fn sort_reverse_fill_swap() {
    let mut n = 8675309;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.reverse();
    assert_eq!(view.value(), 9035768);
    view.sort();
    assert_eq!(view.value(), 356789);
    view.swap(0, 6);
    assert_eq!(view.value(), 9356780);
    view.fill(4);
    assert_eq!(view.value(), 4444444);
}

#[test]
fn read_digits_trait() {
    fn digit_sum<'a, V: ReadDigits<'a, Number = i64>>(view: &V) -> i64 {
        view.iter_ref().map(|d| d.get()).sum()
    }

    let n = 9999i64;
    assert_eq!(digit_sum(&DigitView::<_, Decimal>::new(&n)), 36);

    let mut m = 123i64;
    let view = DigitViewMut::<_, Decimal>::new(&mut m);
    assert_eq!(digit_sum(&view), 6);
    assert_eq!(view.get_ref(1).map(|d| d.get()), Some(2));
    assert!(view.get_ref(3).is_none());
}

#[test]
fn write_digits_trait() {
    fn zero_all<'a, V: WriteDigits<'a>>(view: &V) {
        for d in view.iter_digits_mut() {
            d.set(num_traits::Zero::zero());
        }
    }

    let mut n = -987;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.set_digit(2, 0);
    assert_eq!(view.value(), -980);
    assert!(view.get_mut(3).is_none());
    zero_all(&view);
    assert_eq!(n, 0);
}

#[test]
fn display() {
    let n = 12345;
    assert_eq!(format!("{}", DigitView::<_, Decimal>::new(&n)), "12345");

    let n = -0x1a2b;
    assert_eq!(format!("{}", DigitView::<_, Hexadecimal>::new(&n)), "1a2b");

    let n = 7;
    assert_eq!(format!("{}", DigitView::<_, Decimal>::with_digits(&n, 3)), "007");

    let n = 12345;
    assert_eq!(format!("{}", DigitView::<_, Base<100>>::new(&n)), "1.23.45");

    let mut n = 255u8;
    assert_eq!(format!("{}", DigitViewMut::<_, Base<2>>::new(&mut n)), "11111111");
}

#[test]
fn debug() {
    let n = 12345;
    assert_eq!(
        format!("{:?}", DigitView::<_, Decimal>::new(&n)),
        "DigitView { value: 12345, digits: 5, radix: 10 }"
    );

    let mut n = -5;
    assert_eq!(
        format!("{:?}", DigitViewMut::<_, Hexadecimal>::new(&mut n)),
        "DigitViewMut { value: -5, digits: 1, radix: 16 }"
    );
}

#[test]
fn default_radix() {
    let n = 12345u64;
    let view: DigitView<u64> = DigitView::new(&n);
    assert_eq!(view.digit(0).radix(), crate::radix::DefaultRadix::RADIX);
}

#[test]
fn window_past_u128_reads_zero() {
    let n = u128::MAX;
    let view = DigitView::<_, Decimal>::with_digits(&n, 40);
    assert_eq!(view.digit(0).get(), 0);
    assert_eq!(view.digit(1).get(), 3);
    assert_eq!(view.digit(39).get(), 5);

    let mut m = u128::MAX;
    let view = DigitViewMut::<_, Decimal>::with_digits(&mut m, 40);
    view.digit(0).set(9);
    assert_eq!(view.value(), u128::MAX);
}
