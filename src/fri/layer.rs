//! Committed FRI layers.
//!
//! A layer stores its columns and a Merkle tree whose leaf `i` is the row
//! `(column_0[i], column_1[i], ..)`, so one authentication path opens every
//! batched column at once.

use crate::field::FieldElement;
use crate::merkle::{Digest, MerkleOpening, MerkleTree};

use super::config::FriConfig;
use super::proof::FriRoundQuery;
use super::types::FriError;

/// Evaluations of one round together with their commitment.
#[derive(Debug, Clone)]
pub struct FriLayer {
    columns: Vec<Vec<FieldElement>>,
    tree: MerkleTree,
}

impl FriLayer {
    /// Commits to `columns`, which must be non-empty and of equal length.
    pub fn commit(config: &FriConfig, columns: Vec<Vec<FieldElement>>) -> Result<Self, FriError> {
        let rows = rows_of(&columns)?;
        let (_, tree) = MerkleTree::commit(config.hash(), *config.merkle(), rows)?;
        Ok(Self { columns, tree })
    }

    /// Root of the layer commitment.
    pub fn root(&self) -> Digest {
        self.tree.root()
    }

    /// Number of evaluations per column.
    pub fn size(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Committed columns.
    pub fn columns(&self) -> &[Vec<FieldElement>] {
        &self.columns
    }

    /// Opens the row at `position`.
    pub fn open(&self, position: usize) -> Result<MerkleOpening, FriError> {
        Ok(self.tree.open_one(position)?)
    }

    /// Opens `position` and its folding partner.
    pub fn open_pair(&self, position: usize) -> Result<FriRoundQuery, FriError> {
        let sibling = super::folding::sibling_index(position, self.size());
        Ok(FriRoundQuery {
            opening: self.open(position)?,
            sibling: self.open(sibling)?,
        })
    }
}

/// Transposes column-major data into Merkle leaves.
pub(crate) fn rows_of(columns: &[Vec<FieldElement>]) -> Result<Vec<Vec<FieldElement>>, FriError> {
    let size = columns.first().map(Vec::len).ok_or(FriError::EmptyCodeword)?;
    if size == 0 {
        return Err(FriError::EmptyCodeword);
    }
    if let Some(bad) = columns.iter().find(|column| column.len() != size) {
        return Err(FriError::ColumnLengthMismatch {
            expected: size,
            actual: bad.len(),
        });
    }
    Ok((0..size)
        .map(|row| columns.iter().map(|column| column[row]).collect())
        .collect())
}
