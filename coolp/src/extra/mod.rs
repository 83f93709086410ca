#[cfg(feature = "logos_support")]
pub mod scanner;

pub mod trace;
