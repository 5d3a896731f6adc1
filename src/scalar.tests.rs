use paste::paste;

macro_rules! impl_case {
    (magnitude $name:ident: $n:expr => $expected:literal) => {
        paste! {
            #[test]
            fn [< magnitude_ $name >]() {
                assert_eq!(($n).magnitude(), $expected);
            }
        }
    };
    (reduce $name:ident: $n:expr, $radix:literal => $expected:literal) => {
        paste! {
            #[test]
            fn [< reduce_ $name >]() {
                assert_eq!(($n).reduce($radix), $expected);
            }
        }
    };
}

impl_case!(magnitude zero_i32: 0i32 => 0);
impl_case!(magnitude neg_12345: -12345i32 => 12345);
impl_case!(magnitude i8_min: i8::MIN => 128);
impl_case!(magnitude i64_min: i64::MIN => 9223372036854775808);
impl_case!(magnitude i128_min: i128::MIN => 170141183460469231731687303715884105728);
impl_case!(magnitude u128_max: u128::MAX => 340282366920938463463374607431768211455);
impl_case!(magnitude usize_7: 7usize => 7);

impl_case!(reduce pos_13_10: 13i32, 10 => 3);
impl_case!(reduce neg_1_10: -1i32, 10 => 9);
impl_case!(reduce neg_10_10: -10i64, 10 => 0);
impl_case!(reduce neg_17_16: -17i16, 16 => 15);
impl_case!(reduce u8_255_16: 255u8, 16 => 15);
impl_case!(reduce i8_min_10: i8::MIN, 10 => 2);

#[test]
fn is_negative_unsigned_never() {
    assert!(!Scalar::is_negative(0u32));
    assert!(!Scalar::is_negative(u64::MAX));
}

#[test]
fn is_negative_signed() {
    assert!(Scalar::is_negative(-1i32));
    assert!(!Scalar::is_negative(0i32));
    assert!(Scalar::is_negative(i128::MIN));
}

#[test]
fn from_magnitude_restores_sign() {
    assert_eq!(i32::from_magnitude(12345, true), -12345);
    assert_eq!(i32::from_magnitude(12345, false), 12345);
    assert_eq!(u32::from_magnitude(12345, true), 12345);
}

#[test]
fn from_magnitude_zero_is_positive() {
    let z = i32::from_magnitude(0, true);
    assert_eq!(z, 0);
    assert!(!Scalar::is_negative(z));
}

#[test]
fn from_magnitude_signed_min() {
    assert_eq!(i8::from_magnitude(128, true), i8::MIN);
    assert_eq!(i64::from_magnitude(i64::MIN.magnitude(), true), i64::MIN);
}

#[test]
fn from_magnitude_wraps_oversized() {
    assert_eq!(u8::from_magnitude(955, false), 187);
}
