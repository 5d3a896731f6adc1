use paste::paste;

macro_rules! impl_case {
    ($radix:ident ^ $exp:literal => $expected:expr) => {
        paste! {
            #[test]
            fn [< pow_ $radix:lower _ $exp >]() {
                assert_eq!($radix::pow($exp), $expected);
            }
        }
    };
}

impl_case!(Decimal ^ 0 => 1);
impl_case!(Decimal ^ 1 => 10);
impl_case!(Decimal ^ 5 => 100000);
impl_case!(Decimal ^ 38 => 10u128.pow(38));
impl_case!(Decimal ^ 39 => u128::MAX);
impl_case!(Decimal ^ 500 => u128::MAX);
impl_case!(Hexadecimal ^ 4 => 0x10000);
impl_case!(Hexadecimal ^ 32 => u128::MAX);
impl_case!(Octal ^ 3 => 512);
impl_case!(Binary ^ 127 => 1u128 << 127);

#[test]
fn radix_constants() {
    assert_eq!(Binary::RADIX, 2);
    assert_eq!(Octal::RADIX, 8);
    assert_eq!(Decimal::RADIX, 10);
    assert_eq!(Hexadecimal::RADIX, 16);
    assert_eq!(Base::<5>::RADIX, 5);
}

#[test]
fn default_radix_is_valid() {
    assert!(DefaultRadix::RADIX > 1);
    assert_eq!(DefaultRadix::RADIX, DEFAULT_RADIX);
}

#[test]
fn valid_digits() {
    assert!(Decimal::is_valid_digit(0));
    assert!(Decimal::is_valid_digit(9));
    assert!(!Decimal::is_valid_digit(10));
    assert!(Hexadecimal::is_valid_digit(15));
    assert!(!Hexadecimal::is_valid_digit(16));
}
