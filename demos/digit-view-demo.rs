//! Walk through the digit view api on a few numbers
//!
//! Run with `cargo run --example digit-view-demo`

extern crate digit_view;

use digit_view::{algorithm, swap, Base, Decimal, DigitView, DigitViewMut, Radix, ReadDigits, Scalar};


/// Print digits, then the number itself
fn output_digits<'a, V: ReadDigits<'a>>(digits: &V) {
    for d in digits.iter_ref() {
        print!("{}", d);
    }
    println!(" {}", digits.value());
}

fn walk<T: Scalar, R: Radix>(mut n: T) {
    let da = DigitViewMut::<_, R>::new(&mut n);

    output_digits(&da);
    algorithm::reverse(da.begin(), da.end());
    output_digits(&da);
    algorithm::sort(da.begin(), da.end());
    output_digits(&da);
    da.digit(4).post_increment();
    output_digits(&da);
    da.digit(4).decrement();
    output_digits(&da);
    da.digit(0).set(T::one());
    output_digits(&da);

    let mut ri = da.rbegin();
    let mut k = T::zero();
    for _ in 0..4 {
        k = k + T::one();
        ri.post_step_forward().digit().set(k);
    }
    output_digits(&da);
}

fn compare<R: Radix>(mut mu: i32, cu: i32) {
    let mda = DigitViewMut::<_, R>::new(&mut mu);
    let cda = DigitView::<_, R>::new(&cu);
    let len = mda.len().min(cda.len());

    for i in 0..len {
        println!("mda[{i}] == cda[{i}]? {}", mda.digit(i) == cda.digit(i));
    }

    println!("mda[0] = {}  mda[1] = {}", mda.digit(0), mda.digit(1));
    swap(mda.digit(0), mda.digit(1));
    println!("mda[0] = {}  mda[1] = {}", mda.digit(0), mda.digit(1));

    for i in 0..len {
        println!("mda[{i}] + cda[{i}]? {}", mda.digit(i).get() + cda.digit(i).get());
    }
}

fn main() {
    walk::<u32, Decimal>(8675309);
    walk::<i32, Decimal>(-8675309);
    compare::<Decimal>(8675309, 8675319);

    walk::<u32, Base<5>>(8675309);
    walk::<i32, Base<5>>(-8675309);
    compare::<Base<5>>(8675309, 8675319);
}
