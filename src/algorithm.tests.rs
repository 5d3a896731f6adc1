use crate::radix::{Decimal, Hexadecimal, Base};
use crate::view::{DigitView, DigitViewMut};

include!("test_macros.rs");

#[test]
fn reverse_forward() {
    let mut n = 8675309u32;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    reverse(view.begin(), view.end());
    assert_eq!(view.value(), 9035768);
}

#[test]
fn reverse_even_length() {
    let mut n = 1234;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    reverse(view.begin(), view.end());
    assert_eq!(view.value(), 4321);
}

#[test]
fn reverse_forward_and_reverse_agree() {
    let mut a = -8675309i64;
    let mut b = a;
    let va = DigitViewMut::<_, Decimal>::new(&mut a);
    let vb = DigitViewMut::<_, Decimal>::new(&mut b);
    reverse(va.begin(), va.end());
    reverse(vb.rbegin(), vb.rend());
    assert_eq!(va.value(), vb.value());
    assert_eq!(va.value(), -9035768);
}

#[test]
fn reverse_empty_and_single() {
    let mut n = 123;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    reverse(view.begin(), view.begin());
    reverse(view.begin() + 1, view.begin() + 2);
    reverse(view.end(), view.begin());
    assert_eq!(view.value(), 123);
}

#[test]
fn reverse_subrange() {
    let mut n = 123456;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    reverse(view.begin() + 1, view.end() - 1);
    assert_eq!(view.value(), 154326);
}

#[test]
fn sort_forward_8675309() {
    let mut n = 8675309;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    sort(view.begin(), view.end());
    assert_eq!(view.value(), 356789);
    assert_digits!(view, [0, 3, 5, 6, 7, 8, 9]);
    assert!(is_sorted(view.begin(), view.end()));
}

#[test]
fn sort_reverse_is_mirror() {
    let mut n = 8675309;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    sort(view.rbegin(), view.rend());
    assert_eq!(view.value(), 9876530);
    assert!(is_sorted(view.rbegin(), view.rend()));
    assert!(!is_sorted(view.begin(), view.end()));
}

#[test]
fn sort_hex() {
    let mut n = 0xf00dbeefu32;
    let view = DigitViewMut::<_, Hexadecimal>::new(&mut n);
    sort(view.begin(), view.end());
    assert_eq!(view.value(), 0x00bdeeff);
}

#[test]
fn sort_by_descending() {
    let mut n = 31415;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    sort_by(view.begin(), view.end(), |a, b| b.cmp(a));
    assert_eq!(view.value(), 54311);
}

#[test]
fn is_sorted_read_only() {
    let n = 1223;
    let view = DigitView::<_, Decimal>::new(&n);
    assert!(is_sorted(view.begin(), view.end()));
    assert!(!is_sorted(view.rbegin(), view.rend()));
    assert!(is_sorted(view.begin(), view.begin()));
}

#[test]
fn equal_ranges() {
    let a = 12345;
    let b = 54321;
    let va = DigitView::<_, Decimal>::new(&a);
    let vb = DigitView::<_, Decimal>::new(&b);
    assert!(equal(va.begin(), va.end(), vb.rbegin()));
    assert!(!equal(va.begin(), va.end(), vb.begin()));
    assert!(equal(va.begin(), va.begin() + 1, vb.begin() + 4));
}

#[test]
fn equal_mixed_access() {
    let mut a = 2718;
    let b = 2718;
    let va = DigitViewMut::<_, Decimal>::new(&mut a);
    let vb = DigitView::<_, Decimal>::new(&b);
    assert!(equal(va.begin(), va.end(), vb.begin()));
}

#[test]
fn equal_short_second_range() {
    let a = 12345;
    let b = 123;
    let va = DigitView::<_, Decimal>::new(&a);
    let vb = DigitView::<_, Decimal>::new(&b);
    assert!(!equal(va.begin(), va.end(), vb.begin()));
}

#[test]
fn copy_between_views() {
    let src = 9876;
    let mut dst = 11111111;
    let vs = DigitView::<_, Decimal>::new(&src);
    let vd = DigitViewMut::<_, Decimal>::new(&mut dst);
    let out = copy(vs.begin(), vs.end(), vd.begin() + 2);
    assert_eq!(out.index(), 6);
    assert_eq!(vd.value(), 11987611);
}

#[test]
fn copy_stops_at_destination_end() {
    let src = 9876;
    let mut dst = 111;
    let vs = DigitView::<_, Decimal>::new(&src);
    let vd = DigitViewMut::<_, Decimal>::new(&mut dst);
    let out = copy(vs.begin(), vs.end(), vd.begin() + 1);
    assert!(out.is_end());
    assert_eq!(vd.value(), 198);
}

#[test]
fn copy_reversed() {
    let src = 123;
    let mut dst = 0;
    let vs = DigitView::<_, Decimal>::new(&src);
    let vd = DigitViewMut::<_, Decimal>::with_digits(&mut dst, 3);
    copy(vs.rbegin(), vs.rend(), vd.begin());
    assert_eq!(vd.value(), 321);
}

#[test]
fn fill_range() {
    let mut n = 123456;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    fill(view.begin() + 2, view.end(), 0);
    assert_eq!(view.value(), 120000);
    fill(view.rbegin(), view.rbegin() + 1, 17);
    assert_eq!(view.value(), 120007);
}

#[test]
fn transform_wraps_each_digit() {
    let mut n = 1299;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    transform(view.begin(), view.end(), |d| d + 1);
    assert_eq!(view.value(), 2300);
}

#[test]
fn transform_radix_5() {
    let mut n = 8675309;
    let view = DigitViewMut::<_, Base<5>>::new(&mut n);
    transform(view.begin(), view.end(), |d| 4 - d);
    assert_digits!(view, [0, 2, 3, 4, 3, 4, 2, 2, 3, 0]);
}

#[test]
fn reverse_negative_with_zeros() {
    let mut n = -10;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    reverse(view.begin(), view.end());
    assert_eq!(view.value(), -1);

    let mut n = -1002;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    reverse(view.rbegin(), view.rend());
    assert_eq!(view.value(), -2001);
}

#[test]
fn sort_negative_with_zeros() {
    let mut n = -10;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    sort(view.begin(), view.end());
    assert_eq!(view.value(), -1);

    let mut n = -3050i64;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    sort(view.begin(), view.end());
    assert_eq!(view.value(), -35);
    sort(view.rbegin(), view.rend());
    assert_eq!(view.value(), -5300);
}
