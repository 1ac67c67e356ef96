use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpp_lpc::field::FieldElement;
use rpp_lpc::grinding::ProofOfWork;
use rpp_lpc::merkle::Digest;
use rpp_lpc::params::{BuiltinProfile, GrindingParams, GrindingTarget, LpcParams, LpcParamsBuilder};
use rpp_lpc::transcript::{Transcript, TranscriptLabel};

fn sample_params() -> LpcParams {
    LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_STANDARD)
        .build()
        .expect("valid profile")
}

fn prepare_for_queries(params: &LpcParams) -> Transcript {
    let mut transcript = Transcript::from_params(params, b"bench");
    transcript.absorb_digest(TranscriptLabel::Commitment(0), &Digest::new([1u8; 32]));
    let _ = transcript.challenge_field(TranscriptLabel::EvaluationPoint);
    let rounds = params.fri().rounds();
    for round in 0..rounds {
        let _ = transcript.challenge_field(TranscriptLabel::FriFoldChallenge(round as u8));
        if round + 1 < rounds {
            transcript.absorb_digest(
                TranscriptLabel::FriRoot((round + 1) as u8),
                &Digest::new([10 + round as u8; 32]),
            );
        }
    }
    transcript.absorb_field_elements(TranscriptLabel::FriFinal, &[FieldElement::ONE]);
    transcript
}

fn bench_initialise(c: &mut Criterion) {
    let params = sample_params();
    c.bench_function("transcript_from_params", |b| {
        b.iter(|| Transcript::from_params(black_box(&params), b"bench"))
    });
}

fn bench_fold_challenges(c: &mut Criterion) {
    let params = sample_params();
    c.bench_function("transcript_fri_rounds", |b| {
        b.iter(|| prepare_for_queries(black_box(&params)))
    });
}

fn bench_query_indices(c: &mut Criterion) {
    let params = sample_params();
    let base = prepare_for_queries(&params);
    let domain_size = params.fri().domain_size();
    let queries = params.fri().queries as usize;
    c.bench_function("transcript_query_indices", |b| {
        b.iter(|| {
            let mut transcript = base.clone();
            (0..queries)
                .map(|_| {
                    transcript
                        .challenge_index(TranscriptLabel::QueryIndex, domain_size)
                        .expect("non-zero range")
                })
                .collect::<Vec<_>>()
        })
    });
}

fn bench_grinding(c: &mut Criterion) {
    let params = sample_params();
    let base = prepare_for_queries(&params);
    let pow = ProofOfWork::new(GrindingParams {
        bits: 10,
        target: GrindingTarget::Integer,
        max_attempts: 1 << 24,
    })
    .expect("difficulty");
    let mut seed = 0u64;
    c.bench_function("grinding_10_bits", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(seed);
            pow.generate(&mut base.clone(), &mut rng).expect("nonce")
        })
    });
}

criterion_group!(
    benches,
    bench_initialise,
    bench_fold_challenges,
    bench_query_indices,
    bench_grinding
);
criterion_main!(benches);
