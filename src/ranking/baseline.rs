use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::Talent;

/// Uniform shuffle, signal-free reference ordering
pub fn rank<R: Rng + ?Sized>(candidates: &[Talent], rng: &mut R) -> Vec<Talent> {
    let mut shuffled = candidates.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
