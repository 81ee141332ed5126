/// Shorthand for creating a raw rational value over `i32` in tests.
///
/// # Panics
///
/// When the denominator is zero.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::RawRational::<i32>::new($value, 1).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::RawRational::<i32>::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a simplified rational value over `i32` in tests.
///
/// # Panics
///
/// When the denominator is zero.
#[macro_export]
macro_rules! SR32 {
    ($numer:expr, $denom:expr) => {
        $crate::SimplifiedRational::<i32>::new($numer, $denom).unwrap()
    };
}
