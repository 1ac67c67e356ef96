//! FRI verifier.

use tracing::{instrument, trace};

use crate::field::FieldElement;
use crate::merkle::{check_opening, Digest, MerkleOpening};
use crate::transcript::{Transcript, TranscriptLabel};

use super::batch::{draw_fold_challenges, round_tag};
use super::config::FriConfig;
use super::folding::{fold_at, next_index, sibling_index};
use super::proof::{BasicFriProof, FriProof, FriRoundQuery};
use super::types::FriError;

/// Verifies a batched FRI proof of `width` columns.
///
/// `round0(query, position)` must authenticate the caller's round-0 oracle
/// at `position` and return `(row at position, row at its sibling)`, each of
/// `width` values.  The transcript must be in the state the prover saw when
/// [`prove_batched`](super::prove_batched) started.
#[instrument(skip_all, fields(width = width, rounds = config.rounds()))]
pub fn verify_batched<F>(
    config: &FriConfig,
    width: usize,
    proof: &FriProof,
    transcript: &mut Transcript,
    mut round0: F,
) -> Result<(), FriError>
where
    F: FnMut(usize, usize) -> Result<(Vec<FieldElement>, Vec<FieldElement>), FriError>,
{
    let rounds = config.rounds();
    check_structure(config, width, proof)?;

    let mut alphas = Vec::with_capacity(rounds);
    for round in 0..rounds {
        alphas.push(draw_fold_challenges(
            transcript,
            round_tag(round)?,
            config.folding(),
            width,
        ));
        if let Some(root) = proof.layer_roots.get(round) {
            transcript.absorb_digest(TranscriptLabel::FriRoot(round_tag(round + 1)?), root);
        }
    }
    transcript.absorb_field_elements(TranscriptLabel::FriFinal, &proof.final_values);

    if !config.grinding().verify(transcript, proof.grinding_nonce) {
        return Err(FriError::GrindingFailed);
    }

    let domain_size = config.domain_size();
    for (query_index, query) in proof.queries.iter().enumerate() {
        let expected = transcript.challenge_index(TranscriptLabel::QueryIndex, domain_size)?;
        if query.position as usize != expected {
            return Err(FriError::QueryPositionMismatch {
                query: query_index,
                expected,
                actual: query.position as usize,
            });
        }

        let (mut at_position, mut at_sibling) = round0(query_index, expected)?;
        if at_position.len() != width || at_sibling.len() != width {
            return Err(FriError::InvalidStructure("round 0 row width"));
        }

        let mut position = expected;
        let mut size = domain_size;
        for round in 0..rounds {
            let domain = config
                .domain(round)
                .ok_or(FriError::InvalidStructure("round domain"))?;
            let folded: Vec<FieldElement> = (0..width)
                .map(|column| {
                    fold_at(
                        position,
                        size,
                        at_position[column],
                        at_sibling[column],
                        alphas[round][column],
                        domain,
                    )
                })
                .collect();
            position = next_index(position, size);
            size /= 2;

            match (query.rounds.get(round), proof.layer_roots.get(round)) {
                (Some(pair), Some(root)) => {
                    let layer = LayerCheck {
                        root,
                        round: round + 1,
                        size,
                        width,
                    };
                    layer.check_pair(config, position, pair)?;
                    if pair.opening.leaf != folded {
                        return Err(FriError::FoldMismatch {
                            round: round + 1,
                            query: query_index,
                        });
                    }
                    at_position.clone_from(&pair.opening.leaf);
                    at_sibling.clone_from(&pair.sibling.leaf);
                }
                _ => {
                    if folded != proof.final_values {
                        return Err(FriError::FinalMismatch { query: query_index });
                    }
                }
            }
        }
        trace!(query = query_index, position = expected, "fri query accepted");
    }
    Ok(())
}

/// Verifies a [`BasicFriProof`] produced by [`prove`](super::prove).
pub fn verify(
    config: &FriConfig,
    proof: &BasicFriProof,
    transcript: &mut Transcript,
) -> Result<(), FriError> {
    if proof.initial_openings.len() != config.queries() {
        return Err(FriError::InvalidStructure("initial opening count"));
    }
    transcript.absorb_digest(TranscriptLabel::FriRoot(0), &proof.initial_root);
    let size = config.domain_size();
    verify_batched(config, 1, &proof.fri, transcript, |query, position| {
        let pair = &proof.initial_openings[query];
        let layer = LayerCheck {
            root: &proof.initial_root,
            round: 0,
            size,
            width: 1,
        };
        layer.check_pair(config, position, pair)?;
        Ok((pair.opening.leaf.clone(), pair.sibling.leaf.clone()))
    })
}

/// Committed layer a pair of openings is checked against.
pub(crate) struct LayerCheck<'a> {
    pub(crate) root: &'a Digest,
    pub(crate) round: usize,
    pub(crate) size: usize,
    pub(crate) width: usize,
}

impl LayerCheck<'_> {
    /// Checks that `pair` opens `position` and its sibling.
    pub(crate) fn check_pair(
        &self,
        config: &FriConfig,
        position: usize,
        pair: &FriRoundQuery,
    ) -> Result<(), FriError> {
        self.check_one(config, position, &pair.opening)?;
        self.check_one(config, sibling_index(position, self.size), &pair.sibling)
    }

    fn check_one(
        &self,
        config: &FriConfig,
        position: usize,
        opening: &MerkleOpening,
    ) -> Result<(), FriError> {
        if opening.index as usize != position {
            return Err(FriError::InvalidStructure("opening index"));
        }
        if opening.leaf.len() != self.width {
            return Err(FriError::InvalidStructure("opening width"));
        }
        check_opening(&config.hash(), config.merkle(), self.root, self.size, opening).map_err(
            |reason| FriError::PathInvalid {
                round: self.round,
                reason,
            },
        )
    }
}

fn check_structure(config: &FriConfig, width: usize, proof: &FriProof) -> Result<(), FriError> {
    if width == 0 {
        return Err(FriError::EmptyCodeword);
    }
    let committed = config.rounds() - 1;
    if proof.layer_roots.len() != committed {
        return Err(FriError::InvalidStructure("layer root count"));
    }
    if proof.final_values.len() != width {
        return Err(FriError::InvalidStructure("final value count"));
    }
    if proof.queries.len() != config.queries() {
        return Err(FriError::InvalidStructure("query count"));
    }
    if proof
        .queries
        .iter()
        .any(|query| query.rounds.len() != committed)
    {
        return Err(FriError::InvalidStructure("query round count"));
    }
    Ok(())
}
