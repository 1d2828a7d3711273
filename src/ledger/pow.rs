use sha2::{Digest, Sha256};

use super::DIFFICULTY_PREFIX;

/// Digest of the puzzle relation between a candidate proof and the
/// previous block's proof. The preimage is the decimal text of
/// `candidate^2 - previous^2` (sign included when negative), not the
/// binary encoding of the integers.
pub fn puzzle_digest(candidate: u64, previous: u64) -> String {
    let gap = (candidate as i128) * (candidate as i128) - (previous as i128) * (previous as i128);
    let digest = Sha256::digest(gap.to_string().as_bytes());
    hex::encode(digest)
}

/// Whether `candidate` solves the puzzle posed by `previous`.
pub fn puzzle_satisfied(candidate: u64, previous: u64) -> bool {
    puzzle_digest(candidate, previous).starts_with(DIFFICULTY_PREFIX)
}

/// Find the smallest positive proof solving the puzzle posed by `previous`.
/// Linear search from 1; deterministic for a fixed `previous`. Runs until a
/// solution is found (CPU-bound, blocks the caller).
pub fn solve(previous: u64) -> u64 {
    let mut candidate = 1u64;
    loop {
        if puzzle_satisfied(candidate, previous) {
            return candidate;
        }
        candidate += 1;
    }
}

/// Like [`solve`], but gives up after `max_attempts` candidates. `None`
/// means the budget ran out, not that the puzzle is unsolvable.
pub fn solve_bounded(previous: u64, max_attempts: u64) -> Option<u64> {
    (1..=max_attempts).find(|&candidate| puzzle_satisfied(candidate, previous))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_is_deterministic_and_minimal() {
        let proof = solve(1);
        assert_eq!(proof, solve(1));
        assert!(puzzle_satisfied(proof, 1));
        for candidate in 1..proof {
            assert!(!puzzle_satisfied(candidate, 1));
        }
    }

    #[test]
    fn solved_proof_digest_has_difficulty_prefix() {
        let proof = solve(1);
        assert!(puzzle_digest(proof, 1).starts_with("00000"));
    }

    #[test]
    fn negative_gap_hashes_the_signed_decimal_text() {
        // candidate < previous makes the squared difference negative;
        // the preimage is then "-N", matching str() of a negative int.
        use sha2::{Digest, Sha256};
        let expected = hex::encode(Sha256::digest(b"-9999"));
        assert_eq!(puzzle_digest(1, 100), expected);
    }

    #[test]
    fn solve_bounded_respects_the_budget() {
        let proof = solve(1);
        assert_eq!(solve_bounded(1, proof), Some(proof));
        assert_eq!(solve_bounded(1, proof - 1), None);
    }
}
