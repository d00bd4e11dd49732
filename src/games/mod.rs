//! Concrete game implementations.
//!
//! Only one lives in-crate: [`steppers`], a deliberately tiny game used
//! by tests, docs, and benches to exercise the
//! [`Searchable`](crate::game::Searchable) contract end to end. Real
//! games implement the contract in their own crates.

pub mod steppers;

pub use steppers::Steppers;
