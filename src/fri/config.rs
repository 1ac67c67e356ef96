//! Resolved FRI configuration shared by prover and verifier.

use crate::fft::{evaluation_domain, EvaluationDomain};
use crate::field::FieldElement;
use crate::grinding::ProofOfWork;
use crate::params::{
    FoldingPolicy, FriParams, GrindingParams, HashFamily, LpcParams, MerkleParams, ParamsError,
};

use super::types::FriError;

/// FRI parameters with every round domain materialised.
///
/// `domain(0)` is the initial evaluation domain and `domain(rounds())` the
/// domain of the final constant layer; each is the image of the previous one
/// under squaring.
#[derive(Debug, Clone)]
pub struct FriConfig {
    hash: HashFamily,
    fri: FriParams,
    merkle: MerkleParams,
    grinding: ProofOfWork,
    domains: Vec<EvaluationDomain>,
}

impl FriConfig {
    /// Builds a configuration from explicit parameter groups.
    pub fn new(
        hash: HashFamily,
        fri: FriParams,
        merkle: MerkleParams,
        grinding: GrindingParams,
    ) -> Result<Self, FriError> {
        if fri.final_log2 >= fri.domain_log2 {
            return Err(ParamsError::InvalidFinalSize {
                domain_log2: fri.domain_log2,
                final_log2: fri.final_log2,
            }
            .into());
        }
        if fri.queries == 0 {
            return Err(ParamsError::InvalidQueries {
                min: 1,
                got: fri.queries,
            }
            .into());
        }
        if fri.domain_offset == 0 || fri.domain_offset >= FieldElement::MODULUS.value {
            return Err(ParamsError::InvalidDomainOffset {
                got: fri.domain_offset,
            }
            .into());
        }
        let grinding = ProofOfWork::new(grinding)?;

        let size = 1usize
            .checked_shl(u32::from(fri.domain_log2))
            .ok_or(ParamsError::DomainTooLarge {
                max: FieldElement::MODULUS.two_adicity as u8,
                got: fri.domain_log2,
            })?;
        let mut domains = Vec::with_capacity(fri.rounds() + 1);
        let mut domain = evaluation_domain(size, FieldElement::new(fri.domain_offset))?;
        for _ in 0..fri.rounds() {
            let next = domain.halve()?;
            domains.push(domain);
            domain = next;
        }
        domains.push(domain);

        Ok(Self {
            hash,
            fri,
            merkle,
            grinding,
            domains,
        })
    }

    /// Validates `params` and resolves the FRI view of it.
    pub fn from_params(params: &LpcParams) -> Result<Self, FriError> {
        crate::params::validate(params)?;
        Self::new(
            params.hash(),
            *params.fri(),
            *params.merkle(),
            *params.grinding(),
        )
    }

    /// Hash family used for layer commitments.
    pub fn hash(&self) -> HashFamily {
        self.hash
    }

    /// Raw FRI parameters.
    pub fn params(&self) -> &FriParams {
        &self.fri
    }

    /// Merkle parameters used for layer commitments.
    pub fn merkle(&self) -> &MerkleParams {
        &self.merkle
    }

    /// Proof-of-work engine run before query sampling.
    pub fn grinding(&self) -> &ProofOfWork {
        &self.grinding
    }

    /// Challenge policy for multi-column instances.
    pub fn folding(&self) -> FoldingPolicy {
        self.fri.folding
    }

    /// Number of folding rounds `R`.
    pub fn rounds(&self) -> usize {
        self.fri.rounds()
    }

    /// Number of query repetitions.
    pub fn queries(&self) -> usize {
        usize::from(self.fri.queries)
    }

    /// Size `N` of the initial domain.
    pub fn domain_size(&self) -> usize {
        self.domains[0].size()
    }

    /// Size of the final constant layer.
    pub fn final_size(&self) -> usize {
        self.fri.final_size()
    }

    /// Domain of round `round`, `0 ..= rounds()`.
    pub fn domain(&self, round: usize) -> Option<&EvaluationDomain> {
        self.domains.get(round)
    }

    /// Initial evaluation domain.
    pub fn initial_domain(&self) -> &EvaluationDomain {
        &self.domains[0]
    }

    /// Largest degree bound (exclusive) the proof certifies.
    pub fn degree_bound(&self) -> usize {
        self.domain_size() / self.final_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{BuiltinProfile, LpcParamsBuilder};

    #[test]
    fn domains_halve_each_round() {
        let params = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST)
            .build()
            .unwrap();
        let config = FriConfig::from_params(&params).unwrap();
        assert_eq!(config.rounds(), 4);
        for round in 0..=config.rounds() {
            assert_eq!(config.domain(round).unwrap().size(), 16 >> round);
        }
        assert!(config.domain(5).is_none());
        assert_eq!(config.degree_bound(), 16);
    }

    #[test]
    fn coset_offset_is_squared() {
        let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
        builder.fri.domain_offset = 7;
        let config = FriConfig::from_params(&builder.build().unwrap()).unwrap();
        let seven = FieldElement::new(7);
        assert_eq!(config.domain(1).unwrap().offset(), seven * seven);
    }

    #[test]
    fn zero_rounds_are_rejected() {
        let mut fri = *LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST)
            .build()
            .unwrap()
            .fri();
        fri.final_log2 = fri.domain_log2;
        let err = FriConfig::new(
            HashFamily::Blake2s,
            fri,
            MerkleParams::default(),
            GrindingParams {
                bits: 0,
                target: Default::default(),
                max_attempts: 1,
            },
        )
        .unwrap_err();
        assert!(matches!(err, FriError::Params(ParamsError::InvalidFinalSize { .. })));
    }
}
