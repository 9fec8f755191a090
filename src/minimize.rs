//! Validated minimization problems and the two end-to-end pipelines.
//!
//! A [`Problem`] couples the required-one constituents, the don't-care
//! constituents, and the variable count, validated once at construction. From
//! it, [`minimize_dnf`][Problem::minimize_dnf] produces a minimal-cost
//! sum-of-products form, and [`minimize_cnf`][Problem::minimize_cnf] a
//! minimal-cost product-of-sums form via duality: the disjunctive pipeline is
//! run on the complement function and the resulting implicants are inverted.
//!
//! # Capacity
//!
//! The engine is exact and therefore exponential. Two hard limits keep its
//! tables allocatable and are reported as errors rather than exercised:
//!
//! - [`MAX_VARS`] (26): patterns must fit `u32` and rendering uses the
//!   letters `A`..`Z`.
//! - [`MAX_COVER_TERMS`] (20): the cover DP allocates `2^m` states per
//!   implicant row (~12 MiB per row at the cap, counting the backtrack
//!   column). For the conjunctive form, `m` counts the complement
//!   constituents, so sparse functions of many variables can exceed this
//!   limit even when `ones` is small.

use log::debug;

use crate::cover::min_cover;
use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::prime::prime_implicants;

/// Maximum supported variable count.
pub const MAX_VARS: u32 = 26;

/// Maximum number of constituents the cover solver will index.
pub const MAX_COVER_TERMS: usize = 20;

/// A minimal-cost normal form: the selected implicants (sorted) and the total
/// literal count.
///
/// For a disjunctive solution each implicant is a product term; for a
/// conjunctive solution each implicant is one sum clause. Render with
/// [`expr::render`][crate::expr::render].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The selected implicants, sorted by `(pattern, mask)`.
    pub implicants: Vec<Implicant>,
    /// Total cost: the sum of `num_vars - popcount(mask)` over the selection.
    pub cost: u32,
}

/// A validated minimization problem.
///
/// # Examples
///
/// ```
/// use qmc_rs::minimize::Problem;
///
/// // f(A, B, C) with ones {0, 1, 6, 7}
/// let problem = Problem::new(&[0, 1, 6, 7], &[], 3).unwrap();
/// let dnf = problem.minimize_dnf().unwrap();
/// assert_eq!(dnf.implicants.len(), 2);
/// assert_eq!(dnf.cost, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    ones: Vec<u32>,
    dont_cares: Vec<u32>,
    num_vars: u32,
}

impl Problem {
    /// Creates a problem from its required-one constituents, don't-care
    /// constituents, and variable count.
    ///
    /// Duplicates within either slice are collapsed (the inputs are sets).
    /// Fails if `num_vars` is zero or above [`MAX_VARS`], if any constituent
    /// is outside `[0, 2^num_vars)`, or if the two sets overlap.
    pub fn new(ones: &[u32], dont_cares: &[u32], num_vars: u32) -> Result<Self> {
        if num_vars == 0 {
            return Err(Error::NoVariables);
        }
        if num_vars > MAX_VARS {
            return Err(Error::TooManyVariables { requested: num_vars, max: MAX_VARS });
        }
        let bound = 1u32 << num_vars;
        for &term in ones.iter().chain(dont_cares) {
            if term >= bound {
                return Err(Error::TermOutOfRange { term, num_vars });
            }
        }

        let mut ones = ones.to_vec();
        ones.sort_unstable();
        ones.dedup();
        let mut dont_cares = dont_cares.to_vec();
        dont_cares.sort_unstable();
        dont_cares.dedup();

        for &dc in &dont_cares {
            if ones.binary_search(&dc).is_ok() {
                return Err(Error::OverlappingDontCare { term: dc });
            }
        }

        Ok(Problem { ones, dont_cares, num_vars })
    }

    /// Returns the variable count.
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Returns the required-one constituents, sorted and deduplicated.
    pub fn ones(&self) -> &[u32] {
        &self.ones
    }

    /// Returns the don't-care constituents, sorted and deduplicated.
    pub fn dont_cares(&self) -> &[u32] {
        &self.dont_cares
    }

    /// Computes the minimal-cost disjunctive (sum-of-products) form.
    pub fn minimize_dnf(&self) -> Result<Solution> {
        check_cover_capacity(self.ones.len())?;

        debug!("minimize_dnf: {} ones, {} don't-cares, {} vars", self.ones.len(), self.dont_cares.len(), self.num_vars);

        let primes = prime_implicants(&self.ones, &self.dont_cares, self.num_vars);
        let (mut implicants, cost) = min_cover(&primes, &self.ones, self.num_vars);
        implicants.sort_unstable();
        Ok(Solution { implicants, cost })
    }

    /// Computes the minimal-cost conjunctive (product-of-sums) form.
    ///
    /// By duality, the minimal DNF of the complement function with every
    /// implicant's literals inverted is a minimal CNF of the function itself.
    /// Don't-cares stay don't-cares on the complement side.
    pub fn minimize_cnf(&self) -> Result<Solution> {
        let complement = self.complement();
        check_cover_capacity(complement.len())?;

        debug!("minimize_cnf: complement has {} ones, {} vars", complement.len(), self.num_vars);

        let primes = prime_implicants(&complement, &self.dont_cares, self.num_vars);
        let (selected, cost) = min_cover(&primes, &complement, self.num_vars);
        let mut implicants: Vec<Implicant> = selected.into_iter().map(|imp| imp.invert(self.num_vars)).collect();
        implicants.sort_unstable();
        Ok(Solution { implicants, cost })
    }

    /// Returns the complement constituent set: every assignment that is
    /// neither a required one nor a don't-care, in ascending order.
    fn complement(&self) -> Vec<u32> {
        let bound = 1u32 << self.num_vars;
        let mut present: Vec<u32> = self.ones.iter().chain(&self.dont_cares).copied().collect();
        present.sort_unstable();

        let mut complement = Vec::with_capacity(bound as usize - present.len());
        let mut next = present.into_iter().peekable();
        for term in 0..bound {
            if next.peek() == Some(&term) {
                next.next();
            } else {
                complement.push(term);
            }
        }
        complement
    }
}

fn check_cover_capacity(count: usize) -> Result<()> {
    if count > MAX_COVER_TERMS {
        return Err(Error::TooManyTerms { count, max: MAX_COVER_TERMS });
    }
    Ok(())
}

/// Computes the minimal-cost disjunctive (sum-of-products) form of the
/// function given by its required-one and don't-care constituents.
///
/// Convenience wrapper over [`Problem::new`] + [`Problem::minimize_dnf`].
pub fn minimize_disjunctive(ones: &[u32], dont_cares: &[u32], num_vars: u32) -> Result<Solution> {
    Problem::new(ones, dont_cares, num_vars)?.minimize_dnf()
}

/// Computes the minimal-cost conjunctive (product-of-sums) form of the
/// function given by its required-one and don't-care constituents.
///
/// Convenience wrapper over [`Problem::new`] + [`Problem::minimize_cnf`].
pub fn minimize_conjunctive(ones: &[u32], dont_cares: &[u32], num_vars: u32) -> Result<Solution> {
    Problem::new(ones, dont_cares, num_vars)?.minimize_cnf()
}
