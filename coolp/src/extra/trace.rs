//! Parser tracing, compiled in with the `trace` feature
//!
//! Trace lines go to stderr, next to the diagnostics, so that they never mix with a tree
//! printed on stdout.

#[cfg(feature = "trace")]
#[macro_export]
macro_rules! coolp_trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        eprintln!(concat!("[coolp] ", $fmt) $(, $arg)*)
    };
}

#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! coolp_trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        // Borrow the arguments so they still count as used
        if false {
            let _ = ($(&$arg,)*);
        }
    }};
}
