#![forbid(unsafe_code)]

//! Canonical parameter registry for the commitment engine.
//!
//! [`LpcParams`] is the single source of truth for every security and
//! performance relevant knob consumed at construction time: the hash family,
//! FRI domain and folding depth, Merkle arity, query count, grinding
//! difficulty and transcript framing.  Nothing here is discovered at
//! runtime.
//!
//! | Group | Description |
//! |-------|-------------|
//! | Hash | Byte hash shared by Merkle leaves, nodes and the transcript. |
//! | FRI | Domain size, final collapse size, query repetitions and folding policy. |
//! | Merkle | Tree arity and domain separation. |
//! | Grinding | Proof-of-work difficulty, mask placement and search bound. |
//! | LPC | Quotient batching and evaluation-point redraw budget. |
//! | Transcript | Protocol tag and seed used to initialise Fiat–Shamir. |
//!
//! Validation lives in the internal `validate` module, the canonical byte
//! layout in `ser`, and the stable digest is exposed via
//! [`LpcParams::params_hash`].  Consumers are expected to go through
//! [`LpcParamsBuilder`], which offers [`BuiltinProfile`] presets.
//!
//! # Invariants
//!
//! * The canonical serialisation is strictly ordered and stable.
//! * [`LpcParams::params_hash`] commits to that serialisation and therefore
//!   identifies compatible parameter sets.
//! * [`LpcParams::is_compatible_with`] only tolerates a different grinding
//!   search bound.

mod builder;
mod hash;
mod lpc_params;
mod ser;
mod types;
mod validate;

pub use crate::ser::{SerError, SerKind};
pub use builder::{BuiltinProfile, LpcParamsBuilder};
pub use hash::params_hash;
pub use lpc_params::LpcParams;
pub use ser::{deserialize_params, serialize_params, PARAMS_ENCODED_LEN};
pub use types::{
    FoldingPolicy, FriParams, GrindingParams, GrindingTarget, HashFamily, LpcPolicy, MerkleArity,
    MerkleParams, QuotientBatching, TranscriptParams,
};
pub use validate::{validate, ParamsError, ValidationReport, SUPPORTED_PARAMS_VERSION};
