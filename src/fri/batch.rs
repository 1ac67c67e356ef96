//! Folding challenges for multi-column instances.

use crate::field::FieldElement;
use crate::transcript::{Transcript, TranscriptLabel};

use super::types::{FoldingPolicy, FriError};

/// Tag carried by the per-round labels `FriFoldChallenge` and `FriRoot`.
///
/// Rounds never exceed the field's two-adicity (32), so a valid
/// configuration always fits; anything larger is reported instead of
/// silently wrapping onto another round's label.
pub(crate) fn round_tag(round: usize) -> Result<u8, FriError> {
    u8::try_from(round).map_err(|_| FriError::InvalidStructure("round index exceeds label range"))
}

/// Draws the folding challenges of `round` for `width` columns.
///
/// The returned vector always has one entry per column.  Under
/// [`FoldingPolicy::Shared`] a single challenge is drawn and repeated;
/// under [`FoldingPolicy::PerColumn`] `width` challenges are drawn in
/// column order.
pub fn draw_fold_challenges(
    transcript: &mut Transcript,
    round: u8,
    policy: FoldingPolicy,
    width: usize,
) -> Vec<FieldElement> {
    let label = TranscriptLabel::FriFoldChallenge(round);
    match policy {
        FoldingPolicy::Shared => vec![transcript.challenge_field(label); width],
        FoldingPolicy::PerColumn => (0..width)
            .map(|_| transcript.challenge_field(label))
            .collect(),
    }
}
