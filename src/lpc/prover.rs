use rand::RngCore;
use tracing::{debug, instrument};

use crate::fri::prove_batched;
use crate::transcript::{Transcript, TranscriptLabel};

use super::proof::LpcProof;
use super::quotient::{
    combine_columns, draw_batching_challenge, draw_evaluation_point, quotient_columns,
};
use super::scheme::{LpcBatch, LpcScheme};
use super::types::LpcError;

impl LpcScheme {
    /// Opens every polynomial of `batches` at a transcript-derived point.
    ///
    /// Transcript order: `Commitment(b)` for each batch, `EvaluationPoint`
    /// (redrawn while inside the domain), `ClaimedEvaluations` per batch,
    /// `QuotientBatching` under the linear-combination policy, then the FRI
    /// transcript of the quotient oracle.
    #[instrument(skip_all, fields(batches = batches.len()))]
    pub fn prove<R: RngCore + ?Sized>(
        &self,
        batches: &[&LpcBatch],
        transcript: &mut Transcript,
        rng: &mut R,
    ) -> Result<LpcProof, LpcError> {
        check_batch_count(batches.len())?;
        for (index, batch) in batches.iter().enumerate() {
            transcript.absorb_digest(commitment_label(index)?, &batch.root());
        }

        let domain = self.fri().initial_domain();
        let z = draw_evaluation_point(transcript, domain, self.policy().max_evaluation_redraws)?;

        let mut claimed_evaluations = Vec::with_capacity(batches.len());
        for batch in batches {
            let claimed: Vec<_> = batch
                .polynomials()
                .iter()
                .map(|polynomial| polynomial.evaluate(z))
                .collect();
            transcript.absorb_field_elements(TranscriptLabel::ClaimedEvaluations, &claimed);
            claimed_evaluations.push(claimed);
        }

        let theta = draw_batching_challenge(transcript, self.policy().quotient_batching);
        let quotients = batches
            .iter()
            .zip(&claimed_evaluations)
            .flat_map(|(batch, claimed)| quotient_columns(domain, z, batch.columns(), claimed))
            .collect();
        let oracle = combine_columns(quotients, theta);
        debug!(columns = oracle.len(), "quotient oracle built");

        let fri = prove_batched(self.fri(), &oracle, transcript, rng)?;
        let initial_openings = fri
            .queries
            .iter()
            .map(|query| {
                batches
                    .iter()
                    .map(|batch| batch.open_pair(query.position as usize))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LpcProof {
            evaluation_point: z,
            claimed_evaluations,
            initial_openings,
            fri,
        })
    }
}

/// Label of the `index`-th commitment; [`check_batch_count`] keeps every
/// index of an accepted batch list inside the `u8` tag.
pub(crate) fn commitment_label(index: usize) -> Result<TranscriptLabel, LpcError> {
    u8::try_from(index)
        .map(TranscriptLabel::Commitment)
        .map_err(|_| LpcError::TooManyBatches { count: index + 1 })
}

pub(crate) fn check_batch_count(count: usize) -> Result<(), LpcError> {
    if count == 0 {
        Err(LpcError::EmptyBatch)
    } else if count > usize::from(u8::MAX) + 1 {
        Err(LpcError::TooManyBatches { count })
    } else {
        Ok(())
    }
}
