//! # qmc-rs: Exact Boolean function minimization in Rust
//!
//! **`qmc-rs`** implements the **Quine-McCluskey algorithm** with don't-care
//! support: given the assignments for which a Boolean function evaluates to 1,
//! it computes a minimal-cost sum-of-products form and, by duality, a
//! minimal-cost product-of-sums form.
//!
//! ## How it works
//!
//! The pipeline has two exact stages:
//!
//! 1. **Prime implicant generation**: all input constituents (ones and
//!    don't-cares) are reduced pairwise to a fixed point, bucketed by pattern
//!    popcount. Implicants that never combine are prime.
//! 2. **Minimal cover selection**: a bitmask dynamic program picks the
//!    cheapest subset of prime implicants covering every required
//!    constituent, weighted by literal count.
//!
//! Both stages are exponential in the worst case --- the problem is NP-hard
//! --- so hard capacity limits keep the tables allocatable; see
//! [`minimize`] for the limits and the error conditions.
//!
//! ## Key Features
//!
//! - **Exact**: the selected cover is provably minimal in total literal
//!   count, never a heuristic approximation.
//! - **Don't-care support**: unconstrained assignments join the reduction to
//!   enlarge implicants but are never required to be covered.
//! - **Both normal forms**: the conjunctive form is obtained from the same
//!   pipeline on the complement function, with literals inverted.
//! - **Value types throughout**: an [`Implicant`][crate::implicant::Implicant]
//!   is a pair of `u32` words; every predicate is a few bitwise operations.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::expr::{render, Form};
//! use qmc_rs::minimize::Problem;
//!
//! // f(A, B, C) = 1 on {0, 1, 6, 7}
//! let problem = Problem::new(&[0, 1, 6, 7], &[], 3).unwrap();
//!
//! let dnf = problem.minimize_dnf().unwrap();
//! assert_eq!(render(&dnf.implicants, 3, Form::Disjunctive), "A'B'vAB");
//! assert_eq!(dnf.cost, 4);
//!
//! let cnf = problem.minimize_cnf().unwrap();
//! assert_eq!(cnf.cost, 4);
//! ```
//!
//! ## Core Components
//!
//! - **[`minimize`]**: validated problems and the two end-to-end pipelines.
//! - **[`prime`]**: the fixed-point prime implicant generator.
//! - **[`cover`]**: coverage bitmasks and the minimal cover solver.
//! - **[`implicant`]**: the implicant value type and its bit predicates.
//! - **[`expr`]**: rendering of implicant lists to expression strings.

pub mod cover;
pub mod error;
pub mod expr;
pub mod implicant;
pub mod minimize;
pub mod prime;
