//! Minimal cover selection over prime implicants.
//!
//! Picking the cheapest subset of prime implicants that covers every required
//! constituent is a weighted set-cover instance, solved here exactly with a
//! bitmask dynamic program: one layer per implicant, one state per subset of
//! constituents covered so far. A backtrack table records, for every improved
//! state, the predecessor subset, so the chosen implicants can be
//! reconstructed after the forward pass.
//!
//! # Performance
//!
//! The table is `O(|implicants| * 2^m)` in time and space for `m` covered
//! constituents. The exponential is deliberately placed on the constituent
//! count rather than the implicant count: prime implicants can number up to
//! `O(3^n / sqrt(n))`, while `m` is bounded by the constituents the caller
//! actually asks to cover. Callers enforce a hard cap on `m` before invoking
//! the solver (see [`minimize::MAX_COVER_TERMS`][crate::minimize::MAX_COVER_TERMS]).

use log::debug;

use crate::implicant::Implicant;

/// Returns the coverage bitmask of `implicant` over the ordered constituent
/// list: bit `j` is set iff the implicant covers `terms[j]`.
///
/// # Panics
///
/// Panics if `terms.len()` exceeds the width of the coverage mask.
///
/// # Examples
///
/// ```
/// use qmc_rs::cover::coverage;
/// use qmc_rs::implicant::Implicant;
///
/// let imp = Implicant::new(0b00, 0b01); // A'B' v A'B
/// assert_eq!(coverage(imp, &[0b00, 0b01, 0b10]), 0b011);
/// ```
pub fn coverage(implicant: Implicant, terms: &[u32]) -> u32 {
    assert!(terms.len() < 32, "Coverage mask width exceeded");
    let mut mask = 0u32;
    for (idx, &term) in terms.iter().enumerate() {
        if implicant.covers(term) {
            mask |= 1 << idx;
        }
    }
    mask
}

/// Selects a minimal-cost subset of `primes` whose coverage over `terms` is
/// complete, returning the chosen implicants (in input order) and the total
/// cost (sum of literal counts).
///
/// Every element of `terms` must be covered by at least one prime; this holds
/// by construction for Quine-McCluskey output, and the solver asserts it.
/// Ties are broken deterministically: the program keeps the first-found
/// minimum, so for a fixed prime order the same cover is reconstructed every
/// time.
///
/// # Panics
///
/// Panics if `terms.len()` exceeds the width of the coverage mask, or if no
/// subset of `primes` covers all of `terms` (an impossibility for well-formed
/// input, kept as an internal invariant).
pub fn min_cover(primes: &[Implicant], terms: &[u32], num_vars: u32) -> (Vec<Implicant>, u32) {
    let m = terms.len();
    assert!(m < 32, "Coverage mask width exceeded");
    let num_states = 1usize << m;
    let full = num_states - 1;
    let num_primes = primes.len();

    debug!("min_cover: {} primes, {} terms, {} states per layer", num_primes, m, num_states);

    // cost[i][s]: minimal cost achieving coverage s with the first i primes;
    // None marks an unreachable state. back[i][s]: predecessor coverage at
    // layer i-1, meaningful only where cost[i][s] is Some.
    let mut cost: Vec<Vec<Option<u32>>> = vec![vec![None; num_states]; num_primes + 1];
    let mut back: Vec<Vec<u32>> = vec![vec![0; num_states]; num_primes + 1];
    cost[0][0] = Some(0);

    for (i, &prime) in primes.iter().enumerate() {
        let cover_mask = coverage(prime, terms) as usize;
        let weight = prime.cost(num_vars);

        for state in 0..num_states {
            let Some(reached) = cost[i][state] else {
                continue;
            };

            // Skip the implicant: coverage unchanged.
            if cost[i + 1][state].map_or(true, |best| reached < best) {
                cost[i + 1][state] = Some(reached);
                back[i + 1][state] = state as u32;
            }

            // Take the implicant: union in its coverage, pay its literals.
            let union = state | cover_mask;
            let taken = reached + weight;
            if cost[i + 1][union].map_or(true, |best| taken < best) {
                cost[i + 1][union] = Some(taken);
                back[i + 1][union] = state as u32;
            }
        }
    }

    let total = cost[num_primes][full].expect("Prime implicants must cover every required constituent");

    // Walk the backtrack table from the final state down to (0, 0); a layer
    // whose predecessor differs from the current state took its implicant.
    let mut selected = Vec::new();
    let mut state = full;
    for i in (0..num_primes).rev() {
        let prev = back[i + 1][state] as usize;
        if prev != state {
            selected.push(primes[i]);
        }
        state = prev;
    }
    selected.reverse();

    debug!("min_cover: selected {} of {} primes, cost {}", selected.len(), num_primes, total);

    (selected, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_coverage_empty_terms() {
        assert_eq!(coverage(Implicant::minterm(0), &[]), 0);
    }

    #[test]
    #[should_panic(expected = "Coverage mask width exceeded")]
    fn test_coverage_too_many_terms() {
        let terms: Vec<u32> = (0..32).collect();
        coverage(Implicant::new(0, 0b11111), &terms);
    }

    #[test]
    fn test_coverage_full_mask_implicant() {
        let imp = Implicant::new(0, 0b111);
        assert_eq!(coverage(imp, &[0, 3, 5, 7]), 0b1111);
    }

    #[test]
    fn test_min_cover_empty() {
        let (selected, total) = min_cover(&[], &[], 3);
        assert!(selected.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn test_min_cover_single() {
        let primes = vec![Implicant::new(0, 0b011)];
        let (selected, total) = min_cover(&primes, &[0, 1, 2, 3], 3);
        assert_eq!(selected, primes);
        assert_eq!(total, 1);
    }

    #[test]
    fn test_min_cover_prefers_cheap_implicant() {
        // Both primes cover term 1, but the masked one is cheaper.
        let primes = vec![Implicant::minterm(0b01), Implicant::new(0b01, 0b10)];
        let (selected, total) = min_cover(&primes, &[0b01], 2);
        assert_eq!(selected, vec![Implicant::new(0b01, 0b10)]);
        assert_eq!(total, 1);
    }

    #[test]
    fn test_min_cover_needs_two() {
        let primes = vec![Implicant::new(0b000, 0b001), Implicant::new(0b110, 0b001)];
        let (selected, total) = min_cover(&primes, &[0, 1, 6, 7], 3);
        assert_eq!(selected, primes);
        assert_eq!(total, 4);
    }

    #[test]
    fn test_min_cover_avoids_redundancy() {
        // Three primes, middle one redundant once the outer two are chosen:
        // classic cyclic-free chain A'B', B'C... over terms {0, 1}
        let primes = vec![
            Implicant::new(0b000, 0b001),
            Implicant::new(0b000, 0b010),
            Implicant::new(0b001, 0b100),
        ];
        let (selected, total) = min_cover(&primes, &[0b000, 0b001], 3);
        assert_eq!(selected, vec![Implicant::new(0b000, 0b001)]);
        assert_eq!(total, 2);
    }

    /// Brute-force reference: cheapest cost over all subsets of `primes`
    /// whose coverage is complete.
    fn brute_force_cost(primes: &[Implicant], terms: &[u32], num_vars: u32) -> Option<u32> {
        let full: u32 = (1u32 << terms.len()) - 1;
        let mut best: Option<u32> = None;
        for choice in 0u32..(1 << primes.len()) {
            let mut covered = 0u32;
            let mut weight = 0u32;
            for (i, &imp) in primes.iter().enumerate() {
                if choice & (1 << i) != 0 {
                    covered |= coverage(imp, terms);
                    weight += imp.cost(num_vars);
                }
            }
            if covered == full && best.map_or(true, |b| weight < b) {
                best = Some(weight);
            }
        }
        best
    }

    #[test]
    fn test_min_cover_matches_brute_force() {
        use crate::prime::prime_implicants;

        // Exhaustive over every 3-variable function with ones drawn from a
        // fixed 6-assignment pool (keeps the subset enumeration cheap).
        let pool = [0u32, 1, 2, 5, 6, 7];
        for ones_choice in 1u32..(1 << pool.len()) {
            let ones: Vec<u32> = pool
                .iter()
                .enumerate()
                .filter(|&(i, _)| ones_choice & (1 << i) != 0)
                .map(|(_, &t)| t)
                .collect();
            let primes = prime_implicants(&ones, &[], 3);
            let (selected, total) = min_cover(&primes, &ones, 3);

            // Reported cost is consistent with the selection
            let recomputed: u32 = selected.iter().map(|imp| imp.cost(3)).sum();
            assert_eq!(total, recomputed);

            // And optimal against the brute force
            let best = brute_force_cost(&primes, &ones, 3).unwrap();
            assert_eq!(total, best, "suboptimal cover for ones {:?}", ones);

            // And complete
            for &one in &ones {
                assert!(selected.iter().any(|imp| imp.covers(one)));
            }
        }
    }

    #[test]
    fn test_min_cover_no_proper_subset_suffices() {
        let ones = [0u32, 2, 5, 6, 7];
        let primes = crate::prime::prime_implicants(&ones, &[], 3);
        let (selected, _) = min_cover(&primes, &ones, 3);

        for drop in 0..selected.len() {
            let remaining: Vec<_> = selected
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != drop)
                .map(|(_, &imp)| imp)
                .collect();
            let uncovered = ones.iter().any(|&one| !remaining.iter().any(|imp| imp.covers(one)));
            assert!(uncovered, "dropping {} still covers everything", selected[drop]);
        }
    }
}
