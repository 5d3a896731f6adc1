use crate::stdlib::cell::Cell;
use crate::radix::{Decimal, Hexadecimal, Base};
use crate::view::{DigitView, DigitViewMut};

#[test]
fn read_digits_12345() {
    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);
    let expected = [1, 2, 3, 4, 5];
    for (i, &e) in expected.iter().enumerate() {
        assert_eq!(view.digit(i).get(), e);
    }
}

#[test]
fn read_ignores_sign() {
    let n = -12345;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!(view.digit(0).get(), 1);
    assert_eq!(view.digit(4).get(), 5);
}

#[test]
fn set_then_get_round_trips() {
    let mut n = 12345;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    for i in 0..5 {
        for v in 0..10 {
            assert_eq!(view.digit(i).set(v).get(), v);
        }
    }
}

#[test]
fn set_leaves_other_positions_alone() {
    let mut n = 12345;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    let first = view.digit(0);
    let last = view.digit(4);

    first.set(6);
    assert_eq!(first.get(), 6);
    assert_eq!(last.get(), 5);
    assert_eq!(view.value(), 62345);
}

#[test]
fn set_reduces_out_of_range_digits() {
    let mut n = 12345u32;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(4).set(13);
    assert_eq!(view.value(), 12343);
    view.digit(3).set(10);
    assert_eq!(view.value(), 12303);
}

#[test]
fn set_reduces_negative_digits() {
    let mut n = 12345;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(4).set(-1);
    assert_eq!(view.value(), 12349);
}

#[test]
fn negative_number_keeps_sign() {
    let mut n = -12345;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    for i in 0..4 {
        view.digit(i).set(0);
    }
    assert_eq!(view.value(), -5);

    view.digit(0).set(1);
    assert_eq!(view.value(), -10005);
}

#[test]
fn zeroing_every_digit_drops_sign() {
    let mut n = -305;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(0).set(0);
    view.digit(2).set(0);
    assert_eq!(view.value(), 0);

    view.digit(2).set(7);
    assert_eq!(view.value(), 7);
}

#[test]
fn increment_wraps_without_carry() {
    let mut n = 19;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(1).increment();
    assert_eq!(view.value(), 10);
}

#[test]
fn decrement_wraps_without_borrow() {
    let mut n = 10u8;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(1).decrement();
    assert_eq!(view.value(), 19);
}

#[test]
fn hex_increment_wraps_at_f() {
    let mut n = 0x1fu32;
    let view = DigitViewMut::<_, Hexadecimal>::new(&mut n);
    view.digit(1).increment().increment();
    assert_eq!(view.value(), 0x11);
}

#[test]
fn post_increment_returns_prior_digit() {
    let mut n = 356789;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    assert_eq!(view.digit(4).post_increment(), 8);
    assert_eq!(view.value(), 356799);
    assert_eq!(view.digit(4).post_decrement(), 9);
    assert_eq!(view.value(), 356789);
}

#[test]
fn assign_copies_digit_value() {
    let mut a = 123;
    let b = 789;
    let dst = DigitViewMut::<_, Decimal>::new(&mut a);
    let src = DigitView::<_, Decimal>::new(&b);

    let d = dst.digit(0);
    d.assign(&src.digit(2));
    assert_eq!(dst.value(), 923);
    // accessor is still bound to position 0 of `a`
    assert_eq!(d.divisor(), 100);
}

#[test]
fn assign_from_same_number() {
    let mut n = 12345;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(0).assign(&view.digit(4));
    assert_eq!(view.value(), 52345);
}

#[test]
fn compare_digits_across_views() {
    let mut m = 8675309;
    let c = 8675319;
    let mda = DigitViewMut::<_, Decimal>::new(&mut m);
    let cda = DigitView::<_, Decimal>::new(&c);

    for i in 0..7 {
        assert_eq!(mda.digit(i) == cda.digit(i), i != 5);
    }
    assert!(mda.digit(5) < cda.digit(5));
    assert!(cda.digit(5) > mda.digit(5));
    assert!(mda.digit(0) > mda.digit(1));
    assert_eq!(mda.digit(6), mda.digit(6).to_ref());
}

#[test]
fn compare_values_not_positions() {
    let n = 4224;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!(view.digit(0), view.digit(3));
    assert_eq!(view.digit(1), view.digit(2));
    assert_eq!(view.digit(0).cmp(&view.digit(1)), crate::stdlib::cmp::Ordering::Greater);
}

#[test]
fn swap_same_number() {
    let mut n = 8675309;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    swap(view.digit(0), view.digit(1));
    assert_eq!(view.value(), 6875309);
    assert_eq!(view.digit(0).get(), 6);
    assert_eq!(view.digit(1).get(), 8);
}

#[test]
fn swap_twice_restores() {
    let mut n = -8675309;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    view.digit(2).swap(&view.digit(6));
    assert_eq!(view.value(), -8695307);
    view.digit(2).swap(&view.digit(6));
    assert_eq!(view.value(), -8675309);
}

#[test]
fn swap_with_itself_is_noop() {
    let mut n = 4321;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    swap(view.digit(1), view.digit(1));
    assert_eq!(view.value(), 4321);
}

#[test]
fn swap_between_numbers() {
    let mut a = 111;
    let mut b = 999;
    let va = DigitViewMut::<_, Decimal>::new(&mut a);
    let vb = DigitViewMut::<_, Decimal>::new(&mut b);
    swap(va.digit(1), vb.digit(2));
    assert_eq!(va.value(), 191);
    assert_eq!(vb.value(), 991);
}

#[test]
fn swap_radix_5() {
    let mut n = 8675309;
    let view = DigitViewMut::<_, Base<5>>::new(&mut n);
    swap(view.digit(0), view.digit(1));
    assert_eq!(view.value(), 5550309);
}

#[test]
fn trait_swap_with() {
    let mut n = 12;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    WriteDigit::swap_with(&view.digit(0), &view.digit(1));
    assert_eq!(view.value(), 21);
}

#[test]
fn pointer_dereferences_to_accessor() {
    let mut n = 12345;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    let ptr = view.digit(2).pointer();
    assert_eq!(ptr.get(), 3);
    (*ptr).set(9);
    assert_eq!(view.value(), 12945);

    let cptr: DigitPtr<_, _> = ptr.into();
    assert_eq!(cptr.get(), 9);
    assert_eq!(view.as_view().digit(2).pointer().get(), 9);
}

#[test]
fn converted_ref_sees_later_writes() {
    let mut n = 500;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    let digit = view.digit(0);
    let read_only: DigitRef<_, _> = digit.into();
    digit.set(7);
    assert_eq!(read_only.get(), 7);
}

#[test]
fn aliasing_views_share_writes() {
    let n = Cell::new(1234);
    let a = DigitViewMut::<_, Decimal>::from_cell(&n);
    let b = DigitViewMut::<_, Decimal>::from_cell(&n);
    a.digit(0).set(9);
    b.digit(3).set(0);
    assert_eq!(n.get(), 9230);
    assert_eq!(a.digit(3).get(), 0);
}

#[test]
fn signed_min_digits() {
    let n = i32::MIN;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_digit_list(view, &[2, 1, 4, 7, 4, 8, 3, 6, 4, 8]);
}

#[test]
fn accessor_radix() {
    let n = 0xffu8;
    let view = DigitView::<_, Hexadecimal>::new(&n);
    assert_eq!(view.digit(0).radix(), 16);
    assert_eq!(view.digit(0).get(), 15);
}

#[test]
fn debug_and_display() {
    let n = 123;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!(format!("{}", view.digit(1)), "2");
    assert_eq!(
        format!("{:?}", view.digit(1)),
        "DigitRef { digit: 2, divisor: 10, radix: 10 }"
    );
}

#[test]
fn generic_write_digit() {
    fn bump<D: WriteDigit>(d: &D) -> D::Number {
        d.increment();
        d.get()
    }

    let mut n = 98;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    assert_eq!(bump(&view.digit(0)), 0);
    assert_eq!(view.value(), 8);
}

fn assert_digit_list<T: Scalar, R: Radix>(view: DigitView<T, R>, expected: &[T]) {
    assert_eq!(view.len(), expected.len());
    for (i, &e) in expected.iter().enumerate() {
        assert_eq!(view.digit(i).get(), e, "digit {}", i);
    }
}

#[test]
fn swap_keeps_sign_through_zero_digit() {
    let mut n = -0x50i16;
    let view = DigitViewMut::<_, Hexadecimal>::new(&mut n);
    view.swap(1, 0);
    assert_eq!(view.value(), -5);
    view.swap(1, 0);
    assert_eq!(view.value(), -0x50);
}

#[test]
fn trait_swap_with_keeps_sign() {
    let mut n = -10;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    WriteDigit::swap_with(&view.digit(0), &view.digit(1));
    assert_eq!(view.value(), -1);
}

#[test]
fn swap_between_shared_cells_keeps_sign() {
    let n = Cell::new(-100);
    let a = DigitViewMut::<_, Decimal>::from_cell(&n);
    let b = DigitViewMut::<_, Decimal>::from_cell(&n);
    swap(a.digit(0), b.digit(2));
    assert_eq!(n.get(), -1);
}
