use tracing::instrument;

use crate::fri::{sibling_index, verify_batched, FriError};
use crate::merkle::Digest;
use crate::params::QuotientBatching;
use crate::transcript::{Transcript, TranscriptLabel};

use super::prover::{check_batch_count, commitment_label};
use super::proof::LpcProof;
use super::quotient::{combine_row, draw_batching_challenge, draw_evaluation_point, quotient_row};
use super::scheme::LpcScheme;
use super::types::LpcError;

impl LpcScheme {
    /// Verifies `proof` against `commitments`, replaying the transcript of
    /// [`LpcScheme::prove`].
    ///
    /// The number of polynomials per commitment is taken from the claimed
    /// evaluations; every opened row must match it.
    #[instrument(skip_all, fields(batches = commitments.len()))]
    pub fn verify(
        &self,
        commitments: &[Digest],
        proof: &LpcProof,
        transcript: &mut Transcript,
    ) -> Result<(), LpcError> {
        check_batch_count(commitments.len())?;
        if proof.claimed_evaluations.len() != commitments.len() {
            return Err(LpcError::InvalidStructure("claimed evaluation batches"));
        }
        if proof.claimed_evaluations.iter().any(Vec::is_empty) {
            return Err(LpcError::InvalidStructure("empty claimed evaluations"));
        }
        if proof.initial_openings.len() != self.fri().queries()
            || proof
                .initial_openings
                .iter()
                .any(|pairs| pairs.len() != commitments.len())
        {
            return Err(LpcError::InvalidStructure("initial openings"));
        }

        for (index, root) in commitments.iter().enumerate() {
            transcript.absorb_digest(commitment_label(index)?, root);
        }
        let domain = self.fri().initial_domain();
        let z = draw_evaluation_point(transcript, domain, self.policy().max_evaluation_redraws)?;
        if z != proof.evaluation_point {
            return Err(LpcError::EvaluationPointMismatch);
        }
        for claimed in &proof.claimed_evaluations {
            transcript.absorb_field_elements(TranscriptLabel::ClaimedEvaluations, claimed);
        }
        let theta = draw_batching_challenge(transcript, self.policy().quotient_batching);

        let total: usize = proof.claimed_evaluations.iter().map(Vec::len).sum();
        let width = match self.policy().quotient_batching {
            QuotientBatching::LinearCombination => 1,
            QuotientBatching::PerPolynomial => total,
        };
        let size = self.domain_size();

        verify_batched(self.fri(), width, &proof.fri, transcript, |query, position| {
            let pairs = &proof.initial_openings[query];
            let x = domain.element_at(position);
            let x_sibling = domain.element_at(sibling_index(position, size));
            let mut at_position = Vec::with_capacity(total);
            let mut at_sibling = Vec::with_capacity(total);
            for ((root, claimed), pair) in commitments
                .iter()
                .zip(&proof.claimed_evaluations)
                .zip(pairs)
            {
                self.check_initial_pair(root, claimed.len(), position, pair)?;
                at_position.extend(
                    quotient_row(x, z, &pair.opening.leaf, claimed)
                        .ok_or(FriError::InvalidStructure("evaluation point in domain"))?,
                );
                at_sibling.extend(
                    quotient_row(x_sibling, z, &pair.sibling.leaf, claimed)
                        .ok_or(FriError::InvalidStructure("evaluation point in domain"))?,
                );
            }
            Ok((combine_row(at_position, theta), combine_row(at_sibling, theta)))
        })?;
        Ok(())
    }

    /// Boolean form of [`LpcScheme::verify`].
    pub fn is_valid(
        &self,
        commitments: &[Digest],
        proof: &LpcProof,
        transcript: &mut Transcript,
    ) -> bool {
        self.verify(commitments, proof, transcript).is_ok()
    }
}
