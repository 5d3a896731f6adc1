// Property tests to be included by lib.rs

use paste::paste;

mod size {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< matches_printed_length_ $t >](n in any::<$t>()) {
                    let m = n as i128;
                    let abs = m.unsigned_abs();
                    prop_assert_eq!(DigitView::<_, Decimal>::new(&n).len(), format!("{}", abs).len());
                    prop_assert_eq!(DigitView::<_, Octal>::new(&n).len(), format!("{:o}", abs).len());
                    prop_assert_eq!(DigitView::<_, Hexadecimal>::new(&n).len(), format!("{:x}", abs).len());
                    prop_assert_eq!(DigitView::<_, Binary>::new(&n).len(), format!("{:b}", abs).len());
                }
            } }
        };
    }

    impl_test!(i8);
    impl_test!(u16);
    impl_test!(i32);
    impl_test!(u32);
    impl_test!(i64);
    impl_test!(u64);
}

mod digits {
    use super::*;

    // values of the narrower type never overflow the wider one when
    // their digits are rewritten
    macro_rules! impl_test {
        ($src:ty => $t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< set_then_get_ $t >](n in any::<$src>(), index in any::<usize>(), digit in 0..10 as $t) {
                    let mut n = n as $t;
                    let view = DigitViewMut::<_, Decimal>::new(&mut n);
                    let index = index % view.len();
                    let before: Vec<$t> = view.iter().map(|d| d.get()).collect();

                    view.digit(index).set(digit);
                    prop_assert_eq!(view.digit(index).get(), digit);

                    for (i, d) in view.iter().enumerate() {
                        if i != index {
                            prop_assert_eq!(d.get(), before[i]);
                        }
                    }
                }

                #[test]
                fn [< swap_twice_is_identity_ $t >](n in any::<$src>(), a in any::<usize>(), b in any::<usize>()) {
                    let n = n as $t;
                    let mut m = n;
                    let view = DigitViewMut::<_, Hexadecimal>::new(&mut m);
                    let (a, b) = (a % view.len(), b % view.len());
                    view.swap(a, b);
                    view.swap(a, b);
                    prop_assert_eq!(view.value(), n);
                }
            } }
        };
    }

    impl_test!(i8 => i16);
    impl_test!(u16 => u32);
    impl_test!(i32 => i64);
    impl_test!(u64 => u128);

    proptest! {
        #[test]
        fn sign_survives_nonzero_writes(n in any::<i32>(), index in any::<usize>(), digit in 1..10i64) {
            let negative = n < 0;
            let mut n = n as i64;
            let view = DigitViewMut::<_, Decimal>::new(&mut n);
            view.digit(index % view.len()).set(digit);
            prop_assert_eq!(view.value() < 0, negative);
        }
    }
}

mod negative {
    use super::*;

    proptest! {
        // trailing zeros of n become interior or leading zeros once the
        // digits are permuted
        #[test]
        fn permuting_digits_keeps_sign(n in i32::MIN..0, zeros in 0u32..7) {
            let n = n as i64 * 10i64.pow(zeros);

            let mut reversed = n;
            DigitViewMut::<_, Decimal>::new(&mut reversed).reverse();
            prop_assert!(reversed < 0);

            let mut sorted = n;
            DigitViewMut::<_, Decimal>::new(&mut sorted).sort();
            prop_assert!(sorted < 0);

            let mut descending = n;
            let view = DigitViewMut::<_, Hexadecimal>::new(&mut descending);
            algorithm::sort(view.rbegin(), view.rend());
            prop_assert!(view.value() < 0);

            let mut swapped = n;
            let view = DigitViewMut::<_, Decimal>::new(&mut swapped);
            view.swap(0, view.len() - 1);
            prop_assert!(view.value() < 0);
            view.swap(0, view.len() - 1);
            prop_assert_eq!(view.value(), n);
        }
    }
}

mod algorithms {
    use super::*;

    macro_rules! impl_test {
        ($src:ty => $t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< sort_is_non_decreasing_ $t >](n in any::<$src>()) {
                    let mut n = n as $t;
                    let view = DigitViewMut::<_, Decimal>::new(&mut n);
                    view.sort();
                    prop_assert!(algorithm::is_sorted(view.begin(), view.end()));

                    let digits: Vec<$t> = view.iter().map(|d| d.get()).collect();
                    prop_assert!(digits.windows(2).all(|w| w[0] <= w[1]));
                }

                #[test]
                fn [< reverse_sort_mirrors_sort_ $t >](n in any::<$src>()) {
                    let (mut a, mut b) = (n as $t, n as $t);
                    let va = DigitViewMut::<_, Decimal>::new(&mut a);
                    let vb = DigitViewMut::<_, Decimal>::new(&mut b);
                    algorithm::sort(va.begin(), va.end());
                    algorithm::sort(vb.rbegin(), vb.rend());
                    prop_assert!(algorithm::equal(va.begin(), va.end(), vb.crbegin()));
                }

                #[test]
                fn [< reverse_by_either_cursor_ $t >](n in any::<$src>()) {
                    let n = n as $t;
                    let (mut a, mut b) = (n, n);
                    let va = DigitViewMut::<_, Base<7>>::new(&mut a);
                    let vb = DigitViewMut::<_, Base<7>>::new(&mut b);
                    algorithm::reverse(va.begin(), va.end());
                    algorithm::reverse(vb.rbegin(), vb.rend());
                    prop_assert_eq!(va.value(), vb.value());

                    let original = DigitView::<_, Base<7>>::new(&n);
                    va.reverse();
                    prop_assert!(algorithm::equal(va.begin(), va.end(), original.begin()));
                }
            } }
        };
    }

    impl_test!(i16 => i32);
    impl_test!(u32 => u64);
    impl_test!(i64 => i128);
}
