
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cell,
        cmp,
        fmt,
        iter,
        marker,
        ops,
        ptr,
    };
}
