// Tests of the public surface, included by lib.rs

use paste::paste;

mod scenarios {
    use super::*;

    #[test]
    fn read_12345() {
        let n = 12345;
        let view = DigitView::<_, Decimal>::new(&n);
        assert_eq!(view.len(), 5);
        assert_digits!(view, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn write_negative_12345() {
        let mut n = -12345;
        let view = DigitViewMut::<_, Decimal>::new(&mut n);
        view.digit(0).set(9);
        assert_eq!(view.value(), -92345);
        view.digit(4).set(0);
        assert_eq!(view.value(), -92340);
        assert_digits!(view, [9, 2, 3, 4, 0]);
    }

    #[test]
    fn zero_has_one_digit() {
        let n = 0u8;
        let view = DigitView::<_, Decimal>::new(&n);
        assert_eq!(view.len(), 1);
        assert_digits!(view, [0]);
    }

    #[test]
    fn sort_8675309() {
        let mut n = 8675309;
        DigitViewMut::<_, Decimal>::new(&mut n).sort();
        assert_eq!(n, 356789);
    }

    #[test]
    fn hex_0x12345() {
        let mut n = 0x12345u32;
        let view = DigitViewMut::<_, Hexadecimal>::new(&mut n);
        assert_digits!(view, [1, 2, 3, 4, 5]);
        view.reverse();
        assert_eq!(view.value(), 0x54321);
        view.digit(2).set(0xf);
        assert_eq!(n, 0x54f21);
    }

    #[test]
    fn octal_and_binary() {
        let n = 0o777u16;
        assert_eq!(DigitView::<_, Octal>::new(&n).len(), 3);
        assert_eq!(DigitView::<_, Binary>::new(&n).len(), 9);
    }
}

/// Replay of a walk through the whole api: reverse, sort, increment,
/// decrement, assign, and writes through a reverse cursor
macro_rules! impl_walk_case {
    ($name:ident: $t:ty, $radix:ty, $sign:literal, [
        $start:literal,
        $reversed:literal,
        $sorted:literal,
        $incremented:literal,
        $assigned:literal,
        $written:literal $(,)?
    ]) => {
        paste! {
            #[test]
            fn [< walk_ $name >]() {
                let sign: $t = $sign;
                let mut n: $t = sign * 8675309;
                let da = DigitViewMut::<_, $radix>::new(&mut n);
                let len = da.len();

                assert_eq!(da.value(), sign * $start);

                da.reverse();
                assert_eq!(da.value(), sign * $reversed);

                da.sort();
                assert_eq!(da.value(), sign * $sorted);
                assert_eq!(da.len(), len);

                da.digit(4).increment();
                assert_eq!(da.value(), sign * $incremented);

                da.digit(4).decrement();
                assert_eq!(da.value(), sign * $sorted);

                da.digit(0).set(1);
                assert_eq!(da.value(), sign * $assigned);

                let mut ri = da.rbegin();
                for k in 1..5 {
                    ri.post_step_forward().digit().set(k);
                }
                assert_eq!(ri.index(), 4);
                assert_eq!(da.value(), sign * $written);
            }
        }
    };
}

mod walk {
    use super::*;

    mod decimal {
        use super::*;

        impl_walk_case!(u32_pos: u32, Decimal, 1, [8675309, 9035768, 356789, 356889, 1356789, 1354321]);
        impl_walk_case!(i32_pos: i32, Decimal, 1, [8675309, 9035768, 356789, 356889, 1356789, 1354321]);
        impl_walk_case!(i32_neg: i32, Decimal, -1, [8675309, 9035768, 356789, 356889, 1356789, 1354321]);
        impl_walk_case!(i64_neg: i64, Decimal, -1, [8675309, 9035768, 356789, 356889, 1356789, 1354321]);
        impl_walk_case!(u64_pos: u64, Decimal, 1, [8675309, 9035768, 356789, 356889, 1356789, 1354321]);
    }

    mod radix_5 {
        use super::*;

        impl_walk_case!(u32_pos: u32, Base<5>, 1, [8675309, 8391289, 98449, 101574, 2051574, 2051836]);
        impl_walk_case!(i32_pos: i32, Base<5>, 1, [8675309, 8391289, 98449, 101574, 2051574, 2051836]);
        impl_walk_case!(i32_neg: i32, Base<5>, -1, [8675309, 8391289, 98449, 101574, 2051574, 2051836]);
        impl_walk_case!(i64_neg: i64, Base<5>, -1, [8675309, 8391289, 98449, 101574, 2051574, 2051836]);
    }
}

mod radix_5_digits {
    use super::*;

    #[test]
    fn digits_of_8675309() {
        let n = 8675309;
        let view = DigitView::<_, Base<5>>::new(&n);
        assert_digits!(view, [4, 2, 1, 0, 1, 0, 2, 2, 1, 4]);
        assert_eq!(format!("{}", view), "4210102214");
    }

    #[test]
    fn neighbouring_values_differ_at_one_digit() {
        let a = 8675309;
        let b = 8675319;
        let va = DigitView::<_, Base<5>>::new(&a);
        let vb = DigitView::<_, Base<5>>::new(&b);
        let differing: usize = va.iter().zip(vb.iter()).filter(|(x, y)| x != y).count();
        assert_eq!(differing, 1);
        assert_ne!(va.digit(8), vb.digit(8));
        assert_eq!(vb.digit(8).get(), 3);
    }
}

mod shared_cell {
    use super::*;
    use crate::stdlib::cell::Cell;

    #[test]
    fn views_over_one_cell_see_each_other() {
        let mut n = 4096u32;
        let cell = Cell::from_mut(&mut n);
        let dec = DigitViewMut::<_, Decimal>::from_cell(cell);
        let hex = DigitView::<_, Hexadecimal>::from_cell(cell);

        assert_digits!(hex, [1, 0, 0, 0]);
        dec.digit(3).set(7);
        assert_eq!(hex.value(), 0x1001);
        assert_digits!(hex, [1, 0, 0, 1]);
        assert_eq!(n, 4097);
    }
}
