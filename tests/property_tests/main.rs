//! Property-based tests for the value object laws
//!
//! Generators build valid model values; the properties check that mutators
//! copy instead of mutate and that equality is structural.

mod generators;
mod value_laws;
