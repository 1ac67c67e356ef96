//! Round-0 commitments of the list polynomial commitment.

use tracing::{debug, instrument};

use crate::fft::low_degree_extend;
use crate::field::{FieldElement, Polynomial};
use crate::fri::{rows_of, FriConfig, FriError, FriRoundQuery, LayerCheck};
use crate::merkle::{Digest, MerkleTree};
use crate::params::{LpcParams, LpcPolicy};

use super::types::LpcError;

/// Batched polynomial commitment backed by FRI.
///
/// Polynomials are committed as evaluation columns over the FRI initial
/// domain.  Several commitments may be opened together at one
/// transcript-derived point.
#[derive(Debug, Clone)]
pub struct LpcScheme {
    fri: FriConfig,
    policy: LpcPolicy,
}

/// Prover data kept for one commitment.
#[derive(Debug, Clone)]
pub struct LpcBatch {
    tree: MerkleTree,
    polynomials: Vec<Polynomial>,
    columns: Vec<Vec<FieldElement>>,
}

impl LpcScheme {
    /// Validates `params` and resolves the FRI configuration.
    ///
    /// The final FRI layer must hold at least two points.  With a single
    /// point the degree bound equals the domain size and a quotient built
    /// from a false claimed value would still be accepted.
    pub fn new(params: &LpcParams) -> Result<Self, LpcError> {
        let fri = FriConfig::from_params(params)?;
        if fri.degree_bound() >= fri.domain_size() {
            return Err(LpcError::RateTooHigh {
                degree_bound: fri.degree_bound(),
                domain_size: fri.domain_size(),
            });
        }
        Ok(Self {
            fri,
            policy: *params.lpc(),
        })
    }

    /// FRI configuration shared by prover and verifier.
    pub fn fri(&self) -> &FriConfig {
        &self.fri
    }

    /// Quotient batching and redraw policy.
    pub fn policy(&self) -> &LpcPolicy {
        &self.policy
    }

    /// Size of the evaluation domain every column must cover.
    pub fn domain_size(&self) -> usize {
        self.fri.domain_size()
    }

    /// Exclusive degree bound a committed polynomial must respect.
    pub fn degree_bound(&self) -> usize {
        self.fri.degree_bound()
    }

    /// Commits to polynomials given by their evaluations over the initial
    /// domain, one column per polynomial.
    #[instrument(skip_all, fields(columns = columns.len()))]
    pub fn commit(&self, columns: Vec<Vec<FieldElement>>) -> Result<(Digest, LpcBatch), LpcError> {
        if columns.is_empty() {
            return Err(LpcError::EmptyBatch);
        }
        let domain = self.fri.initial_domain();
        let bound = self.degree_bound();
        let mut polynomials = Vec::with_capacity(columns.len());
        for (column, values) in columns.iter().enumerate() {
            let polynomial = domain.interpolate(values)?;
            if let Some(degree) = polynomial.degree().filter(|degree| *degree >= bound) {
                return Err(LpcError::DegreeTooLarge {
                    column,
                    degree,
                    bound,
                });
            }
            polynomials.push(polynomial);
        }

        let rows = rows_of(&columns)?;
        let (root, tree) = MerkleTree::commit(self.fri.hash(), *self.fri.merkle(), rows)?;
        debug!(root = ?root, "lpc batch committed");
        Ok((
            root,
            LpcBatch {
                tree,
                polynomials,
                columns,
            },
        ))
    }

    /// Extends coefficient-form polynomials onto the initial domain and
    /// commits to the result.
    pub fn commit_coefficients(
        &self,
        polynomials: &[Polynomial],
    ) -> Result<(Digest, LpcBatch), LpcError> {
        let bound = self.degree_bound();
        if let Some((column, degree)) = polynomials
            .iter()
            .enumerate()
            .find_map(|(column, polynomial)| {
                polynomial
                    .degree()
                    .filter(|degree| *degree >= bound)
                    .map(|degree| (column, degree))
            })
        {
            return Err(LpcError::DegreeTooLarge {
                column,
                degree,
                bound,
            });
        }
        let columns = low_degree_extend(polynomials, self.fri.initial_domain())?;
        self.commit(columns)
    }

    pub(crate) fn check_initial_pair(
        &self,
        root: &Digest,
        width: usize,
        position: usize,
        pair: &FriRoundQuery,
    ) -> Result<(), FriError> {
        let layer = LayerCheck {
            root,
            round: 0,
            size: self.domain_size(),
            width,
        };
        layer.check_pair(&self.fri, position, pair)
    }
}

impl LpcBatch {
    /// Commitment root.
    pub fn root(&self) -> Digest {
        self.tree.root()
    }

    /// Number of committed polynomials.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Committed polynomials in coefficient form.
    pub fn polynomials(&self) -> &[Polynomial] {
        &self.polynomials
    }

    /// Committed evaluation columns.
    pub fn columns(&self) -> &[Vec<FieldElement>] {
        &self.columns
    }

    pub(crate) fn open_pair(&self, position: usize) -> Result<FriRoundQuery, LpcError> {
        let sibling = crate::fri::sibling_index(position, self.tree.leaf_count());
        Ok(FriRoundQuery {
            opening: self.tree.open_one(position)?,
            sibling: self.tree.open_one(sibling)?,
        })
    }
}
