//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in the simulator MUST go through this module.
//!
//! The engine never talks to a concrete generator. It is generic over
//! [`RandomSource`], and [`RngManager`] is the default implementation.

mod source;
mod xorshift;

pub use source::RandomSource;
pub use xorshift::RngManager;
