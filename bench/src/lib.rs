//! Benchmarks for the COOL parser live in `benches/`
