//! A set of utilities for working with numbers in the asset register.

/// Create a number.
///
/// This is mostly a wrapper around `rust_decimal_macros::dec!` that makes it
/// easier to swap out the number type used for money project-wide without
/// having to change each instance by hand, but can also be used by callers of
/// the core to create amounts more seamlessly.
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
