//! Field arithmetic primitives for the commitment engine.
//! Contains the Goldilocks field and dense polynomial utilities.

pub mod polynomial;
pub mod prime_field;

pub use polynomial::{lagrange_evaluate, Polynomial};
pub use prime_field::{CanonicalSerialize, FieldDeserializeError, FieldElement, FieldElementOps};
