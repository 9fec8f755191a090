//! Implicant representation and bit-level predicates.
//!
//! An implicant is a product term over the problem's variables: some variables
//! are fixed to a literal value, the rest have been eliminated and no longer
//! matter. Both halves are packed into a pair of `u32` words, so every
//! predicate in this module is a couple of bitwise operations.

use std::fmt;

/// A product term over `n` Boolean variables.
///
/// - `pattern` holds the literal values of the non-eliminated variables.
/// - `mask` has bit `b` set iff the variable at bit `b` has been eliminated.
///
/// Variable `i` (0-indexed, `A` first) of an `n`-variable problem lives at
/// bit `n - 1 - i`, i.e. variable `A` is the most significant used bit.
///
/// # Invariants
///
/// - `pattern & mask == 0`: pattern bits under the mask are normalized to
///   zero. No predicate ever inspects them, but normalization keeps `Eq` and
///   `Hash` meaningful.
/// - An implicant covers assignment `c` iff `(pattern ^ c) & !mask == 0`,
///   i.e. they agree on every non-eliminated bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Implicant {
    pattern: u32,
    mask: u32,
}

impl Implicant {
    /// Creates an implicant from a pattern and an eliminated-variable mask.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` has a bit set inside `mask`.
    pub fn new(pattern: u32, mask: u32) -> Self {
        assert_eq!(pattern & mask, 0, "Pattern bits under the mask must be zero");
        Implicant { pattern, mask }
    }

    /// Creates the minterm implicant for a single assignment (nothing eliminated).
    pub fn minterm(assignment: u32) -> Self {
        Implicant {
            pattern: assignment,
            mask: 0,
        }
    }

    /// Returns the literal values of the non-eliminated variables.
    pub fn pattern(self) -> u32 {
        self.pattern
    }

    /// Returns the eliminated-variable mask.
    pub fn mask(self) -> u32 {
        self.mask
    }

    /// Returns true if this implicant covers the given assignment.
    ///
    /// Covering means the assignment agrees with the pattern on every
    /// non-eliminated bit; the eliminated bits are free.
    #[inline]
    pub fn covers(self, assignment: u32) -> bool {
        (self.pattern ^ assignment) & !self.mask == 0
    }

    /// Returns the number of literals this implicant contributes to an
    /// expression: one per variable that has not been eliminated.
    pub fn cost(self, num_vars: u32) -> u32 {
        num_vars - self.mask.count_ones()
    }

    /// Returns true if `self` and `other` can be combined into a single
    /// implicant covering both.
    ///
    /// This requires identical masks and patterns differing in exactly one
    /// bit. The check is ordered: `other.pattern` must be the numerically
    /// greater one, so that the combination inherits the lower pattern and
    /// stays normalized.
    #[inline]
    pub fn can_combine(self, other: Implicant) -> bool {
        if self.mask != other.mask || other.pattern <= self.pattern {
            return false;
        }
        let difference = other.pattern ^ self.pattern;
        // n is a power of two iff n & (n-1) == 0
        difference & (difference - 1) == 0
    }

    /// Combines two implicants known to satisfy [`can_combine`][Self::can_combine].
    ///
    /// The differing bit joins the mask; the pattern is inherited from the
    /// lower operand, so the normalization invariant is preserved.
    #[inline]
    pub fn combine(self, other: Implicant) -> Implicant {
        debug_assert!(self.can_combine(other));
        Implicant {
            pattern: self.pattern,
            mask: self.mask | (other.pattern ^ self.pattern),
        }
    }

    /// Complements every non-eliminated literal of this implicant.
    ///
    /// This is the duality step: applied to each implicant of a minimal
    /// disjunctive form of `f'`, it yields the clauses of a minimal
    /// conjunctive form of `f`. The mask is unchanged; mask bits flipped by
    /// the XOR are cleared again to restore normalization.
    pub fn invert(self, num_vars: u32) -> Implicant {
        let full = all_ones(num_vars);
        Implicant {
            pattern: (self.pattern ^ full) & !self.mask,
            mask: self.mask,
        }
    }

    /// Renders this implicant as a cube string, one character per variable
    /// from `A` downward: `0`, `1`, or `-` for an eliminated variable.
    pub fn to_cube(self, num_vars: u32) -> String {
        (0..num_vars)
            .rev()
            .map(|bit| {
                if self.mask & (1 << bit) != 0 {
                    '-'
                } else if self.pattern & (1 << bit) != 0 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pattern, self.mask)
    }
}

/// Returns the all-ones assignment mask for an `n`-variable problem.
pub(crate) fn all_ones(num_vars: u32) -> u32 {
    debug_assert!(num_vars >= 1 && num_vars <= 26);
    (1u32 << num_vars) - 1
}
