use paste::paste;
use crate::radix::{Decimal, Hexadecimal, Octal, Base};

macro_rules! impl_case {
    (count $radix:ident: $n:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< count_digits_ $radix:lower _ $n >]() {
                assert_eq!(count_digits::<$radix>($n), $expected);
            }
        }
    };
    (divisor $dir:ident [$index:literal of $digits:literal] => $expected:literal) => {
        paste! {
            #[test]
            fn [< divisor_ $dir:lower _ $index _of_ $digits >]() {
                assert_eq!(divisor::<Decimal, $dir>($index, $digits), $expected);
            }
        }
    };
}

impl_case!(count Decimal: 0 => 1);
impl_case!(count Decimal: 1 => 1);
impl_case!(count Decimal: 9 => 1);
impl_case!(count Decimal: 10 => 2);
impl_case!(count Decimal: 12345 => 5);
impl_case!(count Decimal: 8675309 => 7);
impl_case!(count Decimal: 4294967295 => 10);
impl_case!(count Hexadecimal: 0 => 1);
impl_case!(count Hexadecimal: 15 => 1);
impl_case!(count Hexadecimal: 16 => 2);
impl_case!(count Hexadecimal: 74565 => 5);
impl_case!(count Octal: 7 => 1);
impl_case!(count Octal: 8 => 2);
impl_case!(count Octal: 511 => 3);
impl_case!(count Octal: 512 => 4);

impl_case!(divisor Forward [0 of 5] => 10000);
impl_case!(divisor Forward [2 of 5] => 100);
impl_case!(divisor Forward [4 of 5] => 1);
impl_case!(divisor Forward [5 of 5] => 1);
impl_case!(divisor Forward [9 of 5] => 1);
impl_case!(divisor Reverse [0 of 5] => 1);
impl_case!(divisor Reverse [4 of 5] => 10000);
impl_case!(divisor Reverse [5 of 5] => 100000);
impl_case!(divisor Reverse [9 of 5] => 100000);

#[test]
fn count_digits_u128_max() {
    assert_eq!(count_digits::<Decimal>(u128::MAX), 39);
    assert_eq!(count_digits::<Hexadecimal>(u128::MAX), 32);
}

#[test]
fn forward_and_reverse_are_mirrors() {
    for i in 0..7 {
        assert_eq!(
            divisor::<Decimal, Forward>(i, 7),
            divisor::<Decimal, Reverse>(6 - i, 7)
        );
    }
}

#[test]
fn digit_at_12345() {
    let digits: [u128; 5] = [1, 2, 3, 4, 5];
    for (i, &d) in digits.iter().enumerate() {
        let divisor = divisor::<Decimal, Forward>(i, 5);
        assert_eq!(digit_at::<Decimal>(12345, divisor), d);
    }
}

#[test]
fn replace_digit_12345() {
    assert_eq!(replace_digit::<Decimal>(12345, 10000, 6), 62345);
    assert_eq!(replace_digit::<Decimal>(12345, 1, 0), 12340);
    assert_eq!(replace_digit::<Decimal>(12345, 100, 9), 12945);
}

#[test]
fn replace_digit_beyond_magnitude() {
    // writing past the most significant digit grows the number
    assert_eq!(replace_digit::<Decimal>(5, 1000, 7), 7005);
}

#[test]
fn replace_digit_radix_5() {
    // 8675309 = 4210102214 in base 5
    let n = 8675309;
    assert_eq!(digit_at::<Base<5>>(n, 1), 4);
    assert_eq!(replace_digit::<Base<5>>(n, 1, 0), n - 4);
}

#[test]
fn offset_index_saturates() {
    assert_eq!(offset_index(2, -5, 7), 0);
    assert_eq!(offset_index(2, 3, 7), 5);
    assert_eq!(offset_index(2, 30, 7), 7);
    assert_eq!(offset_index(2, isize::MIN, 7), 0);
    assert_eq!(offset_index(2, isize::MAX, 7), 7);
}

#[test]
fn index_distance_signed() {
    assert_eq!(index_distance(5, 2), 3);
    assert_eq!(index_distance(2, 5), -3);
    assert_eq!(index_distance(4, 4), 0);
}

#[test]
fn out_of_range_divisor_reads_zero() {
    assert_eq!(divisor::<Decimal, Forward>(0, 40), OUT_OF_RANGE);
    assert_eq!(digit_at::<Decimal>(u128::MAX, OUT_OF_RANGE), 0);
    assert_eq!(replace_digit::<Decimal>(u128::MAX, OUT_OF_RANGE, 7), u128::MAX);
}

#[test]
fn replace_digit_keeps_lower_digits() {
    assert_eq!(replace_digit::<Hexadecimal>(0xabcdef, 0x100, 0), 0xabc0ef);
    assert_eq!(replace_digit::<Base<5>>(24, 5, 0), 4);
}
