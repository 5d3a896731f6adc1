#[cfg(test)]
#[macro_use]
extern crate std;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cell,
        cmp,
        fmt,
        iter,
        marker,
        ops,
        ptr,
    };
}
