//! Batched FRI low-degree test over the Goldilocks field.
//!
//! A round-0 oracle of `width` columns evaluated over the coset
//! `offset * <omega>` of size `N` is folded `R = domain_log2 - final_log2`
//! times.  Round `r` maps a layer of size `n` to size `n/2` with
//!
//! ```text
//! f'(x^2) = (f(x) + f(-x)) / 2 + alpha * (f(x) - f(-x)) / (2x)
//! ```
//!
//! where `f(-x)` sits at index `(i + n/2) mod n`.  Layers `1..R` are
//! committed with the configured Merkle tree; the last fold must produce a
//! constant per column, which the proof carries in the clear.
//!
//! Transcript order, after the caller absorbed the round-0 commitment:
//!
//! | Step | Label |
//! |------|-------|
//! | fold challenges of round `r` | `FriFoldChallenge(r)` |
//! | root of layer `r + 1` (if `r + 1 < R`) | `FriRoot(r + 1)` |
//! | final constants | `FriFinal` |
//! | grinding nonce | `GrindingNonce` |
//! | `queries` positions in `0..N` | `QueryIndex` |
//!
//! [`prove`] and [`verify`] wrap the batched core for a single codeword and
//! manage round 0 themselves.

mod batch;
mod config;
mod folding;
mod layer;
mod proof;
mod prover;
mod types;
mod verifier;

pub use batch::draw_fold_challenges;
pub use config::FriConfig;
pub use folding::{fold_at, fold_column, fold_pair, next_index, sibling_index, INV_TWO};
pub use layer::FriLayer;
pub use proof::{BasicFriProof, FriProof, FriQueryProof, FriRoundQuery};
pub use prover::{prove, prove_batched};
pub use types::{FoldingPolicy, FriError};
pub use verifier::{verify, verify_batched};

pub(crate) use layer::rows_of;
pub(crate) use proof::{read_pair, read_proof, write_pair, write_proof};
pub(crate) use verifier::LayerCheck;
