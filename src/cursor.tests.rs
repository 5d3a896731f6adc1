use crate::radix::Decimal;
use crate::position::Reverse;

#[test]
fn begin_end_span_view() {
    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!(view.end() - view.begin(), 5);
    assert_eq!(view.begin() - view.end(), -5);
    assert_eq!(view.rend().distance(&view.rbegin()), 5);
    assert!(view.end().is_end());
    assert!(!view.begin().is_end());
}

#[test]
fn forward_cursor_reads_most_significant_first() {
    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);
    let mut it = view.begin();
    let mut seen = 0;
    while it != view.end() {
        seen = seen * 10 + it.digit().get();
        it.step_forward();
    }
    assert_eq!(seen, 12345);
}

#[test]
fn reverse_cursor_reads_least_significant_first() {
    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);
    assert!(view.rbegin().until(view.rend()).map(|d| d.get()).eq([5, 4, 3, 2, 1]));
}

#[test]
fn stepping_saturates() {
    let n = 123;
    let view = DigitView::<_, Decimal>::new(&n);

    let mut it = view.begin();
    it.step_back();
    assert_eq!(it.index(), 0);

    let mut it = view.end();
    it.step_forward().step_forward();
    assert_eq!(it.index(), 3);
}

#[test]
fn advance_saturates() {
    let n = 1234567;
    let view = DigitView::<_, Decimal>::new(&n);

    let mut it = view.begin();
    it.advance(3);
    assert_eq!(it.digit().get(), 4);
    it.advance(100);
    assert_eq!(it, view.end());
    it.retreat(2);
    assert_eq!(it.digit().get(), 6);
    it.retreat(100);
    assert_eq!(it, view.begin());
    it.advance(-5);
    assert_eq!(it.index(), 0);
    it.retreat(isize::MIN);
    assert_eq!(it, view.end());
}

#[test]
fn arithmetic_operators() {
    let n = 1234567;
    let view = DigitView::<_, Decimal>::new(&n);
    let b = view.begin();

    assert_eq!((b + 2).digit().get(), 3);
    assert_eq!(((b + 5) - 1).digit().get(), 5);
    assert_eq!(b - 1, b);
    assert_eq!(b + 50, view.end());
    assert_eq!((view.end() - 1).digit().get(), 7);

    let mut it = b;
    it += 4;
    assert_eq!(it.index(), 4);
    it -= 3;
    assert_eq!(it.index(), 1);
    assert_eq!(it - b, 1);
}

#[test]
fn relational_comparison() {
    let n = 1234;
    let view = DigitView::<_, Decimal>::new(&n);
    let a = view.begin() + 1;
    let b = view.begin() + 3;
    assert!(a < b);
    assert!(b > a);
    assert!(a <= a);
    assert!(b >= a);
    assert!(a != b);
}

#[test]
fn post_step_returns_prior_position() {
    let mut n = 8675309;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    let mut ri = view.rbegin();
    ri.post_step_forward().digit().set(1);
    ri.post_step_forward().digit().set(2);
    ri.post_step_forward().digit().set(3);
    ri.post_step_forward().digit().set(4);
    assert_eq!(ri.index(), 4);
    assert_eq!(view.value(), 8674321);

    let prior = ri.post_step_back();
    assert_eq!(prior.index(), 4);
    assert_eq!(ri.index(), 3);
}

#[test]
fn get_is_none_at_end() {
    let mut n = 42;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    assert!(view.end().get().is_none());
    assert!(view.rend().get().is_none());
    assert_eq!(view.begin().get().map(|d| d.get()), Some(4));
    assert_eq!(view.rbegin().get().map(|d| d.get()), Some(2));
    assert!(view.cend().get().is_none());
}

#[test]
fn reverse_end_divisor() {
    let n = 123;
    let view = DigitView::<_, Decimal>::new(&n);
    let end = view.rend();
    assert_eq!(end.view.digit_at::<Reverse>(end.index()).divisor(), 1000);
}

#[test]
fn mutable_cursor_writes() {
    let mut n = 1000;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    let it = view.begin() + 1;
    it.digit().set(9);
    assert_eq!(view.value(), 1900);

    let read_only = it.to_const();
    assert_eq!(read_only.digit().get(), 9);
    let converted: Cursor<_, _, _> = it.into();
    assert_eq!(converted.index(), 1);
}

#[test]
fn const_cursors_of_mut_view() {
    let mut n = 507;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    assert!(view.cbegin().until(view.cend()).map(|d| d.get()).eq([5, 0, 7]));
    assert!(view.crbegin().until(view.crend()).map(|d| d.get()).eq([7, 0, 5]));
}

#[test]
fn iter_is_double_ended_and_exact() {
    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);

    let mut iter = view.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next().map(|d| d.get()), Some(1));
    assert_eq!(iter.next_back().map(|d| d.get()), Some(5));
    assert_eq!(iter.len(), 3);
    assert!(iter.clone().map(|d| d.get()).eq([2, 3, 4]));

    let forward_reversed = view.iter().rev().map(|d| d.get());
    let reverse = view.rbegin().until(view.rend()).map(|d| d.get());
    assert!(forward_reversed.eq(reverse));
}

#[test]
fn iter_exhausted_stays_exhausted() {
    let n = 5;
    let view = DigitView::<_, Decimal>::new(&n);
    let mut iter = view.iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
    assert!(iter.next_back().is_none());
}

#[test]
fn until_backwards_range_is_empty() {
    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!((view.begin() + 3).until(view.begin() + 1).count(), 0);
    assert_eq!((view.begin() + 1).until(view.begin() + 3).count(), 2);
}

#[test]
fn iter_mut_writes() {
    let mut n = 1111;
    let view = DigitViewMut::<_, Decimal>::new(&mut n);
    for (i, d) in view.iter_mut().enumerate() {
        d.set(i as i32);
    }
    assert_eq!(view.value(), 123);

    for d in view.rbegin().until(view.rend()).take(2) {
        d.set(9);
    }
    assert_eq!(view.value(), 199);
}

#[test]
fn random_access_trait() {
    fn middle<C: RandomAccess>(first: C, last: C) -> C::Digit {
        first.offset(last.distance(&first) / 2).digit()
    }

    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!(middle(view.begin(), view.end()).get(), 3);
    assert_eq!(middle(view.rbegin() + 1, view.rend()).get(), 2);
    assert_eq!(RandomAccess::index(&view.end()), 5);
}

#[test]
fn debug() {
    let n = 12345;
    let view = DigitView::<_, Decimal>::new(&n);
    assert_eq!(
        format!("{:?}", view.rbegin() + 2),
        "Cursor { direction: \"Reverse\", index: 2, digits: 5 }"
    );
    assert_eq!(
        format!("{:?}", view.iter()),
        "Iter { direction: \"Forward\", front: 0, back: 5 }"
    );
}
