//! FRI prover.

use rand::RngCore;
use tracing::{debug, instrument};

use crate::field::FieldElement;
use crate::transcript::{Transcript, TranscriptLabel};

use super::batch::{draw_fold_challenges, round_tag};
use super::config::FriConfig;
use super::folding::fold_column;
use super::layer::FriLayer;
use super::proof::{BasicFriProof, FriProof, FriQueryProof};
use super::types::FriError;

/// Runs the batched FRI prover over `columns`.
///
/// The columns are the round-0 oracle, evaluated over
/// [`FriConfig::initial_domain`]; the caller has already committed to them
/// and absorbed that commitment.  The returned proof carries the openings of
/// every later layer; round-0 openings are the caller's responsibility, at
/// the positions recorded in [`FriQueryProof::position`].
#[instrument(skip_all, fields(width = columns.len(), rounds = config.rounds()))]
pub fn prove_batched<R: RngCore + ?Sized>(
    config: &FriConfig,
    columns: &[Vec<FieldElement>],
    transcript: &mut Transcript,
    rng: &mut R,
) -> Result<FriProof, FriError> {
    check_columns(config, columns)?;
    let width = columns.len();
    let rounds = config.rounds();

    let mut layers: Vec<FriLayer> = Vec::with_capacity(rounds.saturating_sub(1));
    let mut last = Vec::new();
    for round in 0..rounds {
        let alphas = draw_fold_challenges(transcript, round_tag(round)?, config.folding(), width);
        let domain = config
            .domain(round)
            .ok_or(FriError::InvalidStructure("round domain"))?;
        let next: Vec<Vec<FieldElement>> = {
            let source = match layers.last() {
                Some(layer) => layer.columns(),
                None => columns,
            };
            source
                .iter()
                .zip(&alphas)
                .map(|(column, alpha)| fold_column(column, *alpha, domain))
                .collect()
        };
        if round + 1 < rounds {
            let layer = FriLayer::commit(config, next)?;
            let root = layer.root();
            transcript.absorb_digest(TranscriptLabel::FriRoot(round_tag(round + 1)?), &root);
            debug!(round = round + 1, size = layer.size(), root = ?root, "fri layer committed");
            layers.push(layer);
        } else {
            last = next;
        }
    }

    let final_values = last
        .iter()
        .enumerate()
        .map(|(column, values)| match values.split_first() {
            Some((first, rest)) if rest.iter().all(|value| value == first) => Ok(*first),
            _ => Err(FriError::NotLowDegree { column }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    transcript.absorb_field_elements(TranscriptLabel::FriFinal, &final_values);

    let witness = config.grinding().generate(transcript, rng)?;

    let domain_size = config.domain_size();
    let mut queries = Vec::with_capacity(config.queries());
    for _ in 0..config.queries() {
        let position = transcript.challenge_index(TranscriptLabel::QueryIndex, domain_size)?;
        let rounds = layers
            .iter()
            .map(|layer| layer.open_pair(position % layer.size()))
            .collect::<Result<Vec<_>, _>>()?;
        queries.push(FriQueryProof {
            position: position as u32,
            rounds,
        });
    }

    Ok(FriProof {
        layer_roots: layers.iter().map(FriLayer::root).collect(),
        final_values,
        grinding_nonce: witness.nonce,
        queries,
    })
}

/// Proves that a single codeword is close to a polynomial of degree below
/// [`FriConfig::degree_bound`].
///
/// Commits to the codeword, absorbs its root as `FriRoot(0)` and opens it at
/// every query position next to the batched proof.
pub fn prove<R: RngCore + ?Sized>(
    config: &FriConfig,
    codeword: &[FieldElement],
    transcript: &mut Transcript,
    rng: &mut R,
) -> Result<BasicFriProof, FriError> {
    let initial = FriLayer::commit(config, vec![codeword.to_vec()])?;
    let initial_root = initial.root();
    transcript.absorb_digest(TranscriptLabel::FriRoot(0), &initial_root);

    let fri = prove_batched(config, initial.columns(), transcript, rng)?;
    let initial_openings = fri
        .queries
        .iter()
        .map(|query| initial.open_pair(query.position as usize))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BasicFriProof {
        initial_root,
        initial_openings,
        fri,
    })
}

fn check_columns(config: &FriConfig, columns: &[Vec<FieldElement>]) -> Result<(), FriError> {
    if columns.is_empty() {
        return Err(FriError::EmptyCodeword);
    }
    let expected = config.domain_size();
    match columns.iter().find(|column| column.len() != expected) {
        Some(bad) => Err(FriError::ColumnLengthMismatch {
            expected,
            actual: bad.len(),
        }),
        None => Ok(()),
    }
}
