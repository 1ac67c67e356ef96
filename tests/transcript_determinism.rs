use proptest::prelude::*;
use rpp_lpc::field::FieldElement;
use rpp_lpc::merkle::Digest;
use rpp_lpc::params::{BuiltinProfile, HashFamily, LpcParams, LpcParamsBuilder};
use rpp_lpc::transcript::{Transcript, TranscriptError, TranscriptLabel};

fn sample_params(profile: BuiltinProfile) -> LpcParams {
    LpcParamsBuilder::from_profile(profile)
        .build()
        .expect("profile must be valid")
}

fn replay(transcript: &mut Transcript, root: u8, claims: &[u64]) -> (FieldElement, u64, usize) {
    transcript.absorb_digest(TranscriptLabel::Commitment(0), &Digest::new([root; 32]));
    let z = transcript.challenge_field(TranscriptLabel::EvaluationPoint);
    let claims: Vec<FieldElement> = claims.iter().copied().map(FieldElement::new).collect();
    transcript.absorb_field_elements(TranscriptLabel::ClaimedEvaluations, &claims);
    let alpha: u64 = transcript.challenge(TranscriptLabel::FriFoldChallenge(0));
    let index = transcript
        .challenge_index(TranscriptLabel::QueryIndex, 1 << 16)
        .unwrap();
    (z, alpha, index)
}

#[test]
fn deterministic_state_digest() {
    let params = sample_params(BuiltinProfile::PROFILE_STANDARD);
    let mut t1 = Transcript::from_params(&params, b"ctx");
    let mut t2 = Transcript::from_params(&params, b"ctx");
    assert_eq!(t1.state_digest(), t2.state_digest());

    let a = replay(&mut t1, 7, &[1, 2, 3]);
    let b = replay(&mut t2, 7, &[1, 2, 3]);
    assert_eq!(a, b);
    assert_eq!(t1.state_digest(), t2.state_digest());
    assert_eq!(t1.challenge_counter(), 3);
}

#[test]
fn params_and_context_separate_transcripts() {
    let standard = sample_params(BuiltinProfile::PROFILE_STANDARD);
    let hisec = sample_params(BuiltinProfile::PROFILE_HISEC);
    let base = Transcript::from_params(&standard, b"ctx");
    assert_ne!(
        base.state_digest(),
        Transcript::from_params(&hisec, b"ctx").state_digest()
    );
    assert_ne!(
        base.state_digest(),
        Transcript::from_params(&standard, b"other").state_digest()
    );
    assert_eq!(
        Transcript::from_params(&hisec, b"ctx").hash_family(),
        HashFamily::Blake3
    );
}

#[test]
fn labels_separate_identical_payloads() {
    let mut a = Transcript::new(HashFamily::Blake2s, b"labels");
    let mut b = a.clone();
    a.absorb_bytes(TranscriptLabel::FriRoot(1), b"root");
    b.absorb_bytes(TranscriptLabel::FriRoot(2), b"root");
    assert_ne!(a.state_digest(), b.state_digest());

    let mut c = Transcript::new(HashFamily::Blake2s, b"labels");
    let mut d = c.clone();
    let x: u64 = c.challenge(TranscriptLabel::QueryIndex);
    let y: u64 = d.challenge(TranscriptLabel::GrindingNonce);
    assert_ne!(x, y);
}

#[test]
fn fork_is_independent_of_parent() {
    let mut parent = Transcript::new(HashFamily::Blake3, b"fork");
    parent.absorb_u64(TranscriptLabel::ProtocolTag, 5);
    let before = parent.state_digest();

    let mut child = parent.fork();
    let _: u64 = child.challenge(TranscriptLabel::QueryIndex);
    assert_eq!(parent.state_digest(), before);
    assert_ne!(child.state_digest(), before);

    let sub = parent.fork_with_context(b"sub");
    assert_ne!(sub.state_digest(), before);
    assert_eq!(sub.challenge_counter(), 0);
}

#[test]
fn zero_range_is_an_error() {
    let mut transcript = Transcript::new(HashFamily::Blake2s, b"range");
    assert_eq!(
        transcript.challenge_index(TranscriptLabel::QueryIndex, 0),
        Err(TranscriptError::RangeZero)
    );
}

#[test]
fn field_challenges_are_canonical() {
    let mut transcript = Transcript::new(HashFamily::Blake2s, b"canonical");
    for _ in 0..64 {
        let value = transcript.challenge_field(TranscriptLabel::EvaluationPoint);
        assert!(value.as_u64() < FieldElement::MODULUS.value);
    }
    let bytes = transcript.challenge_bytes(TranscriptLabel::Fork, 100);
    assert_eq!(bytes.len(), 100);
}

proptest! {
    #[test]
    fn identical_inputs_give_identical_challenges(
        root in any::<u8>(),
        claims in prop::collection::vec(any::<u64>(), 0..8),
    ) {
        let params = sample_params(BuiltinProfile::PROFILE_TEST);
        let mut a = Transcript::from_params(&params, b"prop");
        let mut b = Transcript::from_params(&params, b"prop");
        prop_assert_eq!(replay(&mut a, root, &claims), replay(&mut b, root, &claims));
    }

    #[test]
    fn diverging_claims_diverge_afterwards(
        claims in prop::collection::vec(any::<u64>(), 1..8),
        slot in any::<prop::sample::Index>(),
    ) {
        let params = sample_params(BuiltinProfile::PROFILE_TEST);
        let mut tweaked = claims.clone();
        let slot = slot.index(tweaked.len());
        tweaked[slot] = (tweaked[slot] % FieldElement::MODULUS.value).wrapping_add(1) % FieldElement::MODULUS.value;
        let mut a = Transcript::from_params(&params, b"prop");
        let mut b = Transcript::from_params(&params, b"prop");
        let (za, alpha_a, _) = replay(&mut a, 3, &claims);
        let (zb, alpha_b, _) = replay(&mut b, 3, &tweaked);
        prop_assert_eq!(za, zb);
        prop_assert_ne!(alpha_a, alpha_b);
        prop_assert_ne!(a.state_digest(), b.state_digest());
    }
}
