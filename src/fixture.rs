use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ALPHABET: &[u8] = b"ACGT";

fn random_strand(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generate a deterministic (source, target) pair over the `ACGT` alphabet.
///
/// A block of the source (a quarter of the shorter length) is planted in the
/// target at a random position, so the pair always shares at least that much.
pub fn generate_pair(seed: u64, source_len: usize, target_len: usize) -> (String, String) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let source = random_strand(&mut rng, source_len);
    let mut target = random_strand(&mut rng, target_len);

    let block = source_len.min(target_len) / 4;
    if block > 0 {
        let from = rng.gen_range(0..=source_len - block);
        let to = rng.gen_range(0..=target_len - block);
        target.replace_range(to..to + block, &source[from..from + block]);
    }
    (source, target)
}
