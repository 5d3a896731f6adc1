// file to be included in tests modules

/// Assert the digits of a view, most significant first
macro_rules! assert_digits {
    ($view:expr, [ $($d:expr),+ $(,)* ]) => {{
        let view = $view;
        let expected = [ $( $d ),+ ];
        assert_eq!(view.len(), expected.len(), "digit count of {:?}", view);
        for (i, (digit, e)) in view.iter().zip(expected.iter()).enumerate() {
            assert_eq!(digit.get(), *e, "digit {} of {:?}", i, view);
        }
    }};
}
