//! Prime implicant generation.
//!
//! The generator runs the classical Quine-McCluskey reduction to a fixed
//! point: implicants are bucketed by the popcount of their pattern, adjacent
//! buckets are compared pairwise, and every successful combination feeds the
//! next round. Implicants that never combine are prime.
//!
//! Don't-care constituents join the reduction as ordinary seeds (they are
//! free to merge into larger implicants), but an implicant built *only* from
//! don't-cares can never be required by an optimal cover and is dropped from
//! the output.

use std::collections::HashMap;

use log::debug;

use crate::implicant::Implicant;

/// One round's buckets: implicants keyed by pattern popcount, each carrying
/// a "built only from don't-cares" flag. Equal implicants reached through
/// different source pairs merge their flags with logical AND.
type Buckets = Vec<HashMap<Implicant, bool>>;

/// Computes all prime implicants of the function given by its required-one
/// and don't-care constituents.
///
/// The result is sorted and contains no implicant built purely from
/// don't-cares. Callers are expected to have validated that constituents are
/// in range and that the two sets are disjoint.
///
/// # Examples
///
/// ```
/// use qmc_rs::implicant::Implicant;
/// use qmc_rs::prime::prime_implicants;
///
/// // f = A'B' v AB over (A, B): the minterms are two popcounts apart and
/// // never compared, so both are already prime
/// let primes = prime_implicants(&[0b00, 0b11], &[], 2);
/// assert_eq!(primes, vec![Implicant::minterm(0b00), Implicant::minterm(0b11)]);
///
/// // f = 1: everything collapses into the empty product
/// let primes = prime_implicants(&[0b00, 0b01, 0b10, 0b11], &[], 2);
/// assert_eq!(primes, vec![Implicant::new(0, 0b11)]);
/// ```
pub fn prime_implicants(ones: &[u32], dont_cares: &[u32], num_vars: u32) -> Vec<Implicant> {
    let num_buckets = num_vars as usize + 1;
    let mut buckets: Buckets = vec![HashMap::new(); num_buckets];
    for &one in ones {
        buckets[one.count_ones() as usize].insert(Implicant::minterm(one), false);
    }
    for &dc in dont_cares {
        buckets[dc.count_ones() as usize].insert(Implicant::minterm(dc), true);
    }

    let mut primes = Vec::new();
    let mut round = 0;

    loop {
        round += 1;

        // Materialize each bucket in sorted order so that "used" marks can be
        // tracked by index, then compare adjacent buckets pairwise.
        let levels: Vec<Vec<(Implicant, bool)>> = buckets
            .iter()
            .map(|bucket| {
                let mut level: Vec<_> = bucket.iter().map(|(&imp, &dc)| (imp, dc)).collect();
                level.sort_unstable();
                level
            })
            .collect();
        let mut used: Vec<Vec<bool>> = levels.iter().map(|level| vec![false; level.len()]).collect();
        let mut next: Buckets = vec![HashMap::new(); num_buckets];
        let mut reductions = 0usize;

        for upper in 1..levels.len() {
            for (hi_idx, &(hi, hi_dc)) in levels[upper].iter().enumerate() {
                for (lo_idx, &(lo, lo_dc)) in levels[upper - 1].iter().enumerate() {
                    if lo.can_combine(hi) {
                        used[upper][hi_idx] = true;
                        used[upper - 1][lo_idx] = true;
                        // The combination keeps the lower pattern, so it is
                        // bucketed by the lower popcount of the pair.
                        let combined = lo.combine(hi);
                        let dc = lo_dc && hi_dc;
                        next[lo.pattern().count_ones() as usize]
                            .entry(combined)
                            .and_modify(|flag| *flag &= dc)
                            .or_insert(dc);
                        reductions += 1;
                    }
                }
            }
        }

        // Everything that never combined this round is prime; don't-care-only
        // implicants are never needed and are filtered here.
        for (level, marks) in levels.iter().zip(&used) {
            for (&(imp, dc), &was_used) in level.iter().zip(marks) {
                if !was_used && !dc {
                    primes.push(imp);
                }
            }
        }

        debug!("prime round {}: {} reductions, {} primes so far", round, reductions, primes.len());

        if reductions == 0 {
            break;
        }
        buckets = next;
    }

    primes.sort_unstable();
    primes
}
