//! Expression rendering for minimization results.
//!
//! This is a presentation boundary: the algorithmic core trades only in
//! `(pattern, mask)` implicants, and this module turns a selected implicant
//! list into a human-readable expression string in a single append pass.
//!
//! # Output conventions
//!
//! - Variables are the uppercase letters `A`, `B`, ... in bit order
//!   (variable `A` is the most significant used bit).
//! - Negation is a trailing `'`; conjunction is adjacency; disjunction is `v`.
//! - Disjunctive form joins product terms with `v`; conjunctive form wraps
//!   each sum clause in parentheses, with `v` between literals inside.
//! - A literal appears only for variables not eliminated by the mask. A term
//!   with every variable eliminated is the empty connective of the *other*
//!   kind: a zero-literal product renders as `1`, a zero-literal sum clause
//!   as `(0)`.
//! - An empty implicant list renders as the identity of its connective:
//!   `0` for a disjunction, `1` for a conjunction.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::expr::{render, Form};
//! use qmc_rs::implicant::Implicant;
//!
//! let terms = vec![Implicant::new(0b000, 0b001), Implicant::new(0b110, 0b001)];
//! assert_eq!(render(&terms, 3, Form::Disjunctive), "A'B'vAB");
//!
//! let clauses = vec![Implicant::new(0b11, 0)];
//! assert_eq!(render(&clauses, 2, Form::Conjunctive), "(AvB)");
//! ```

use crate::implicant::Implicant;

/// Which normal form an implicant list represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Form {
    /// Sum of products: each implicant is a product term.
    Disjunctive,
    /// Product of sums: each implicant is a sum clause.
    Conjunctive,
}

/// Renders an implicant list as an expression string.
pub fn render(implicants: &[Implicant], num_vars: u32, form: Form) -> String {
    if implicants.is_empty() {
        return match form {
            Form::Disjunctive => "0".to_string(),
            Form::Conjunctive => "1".to_string(),
        };
    }

    let mut out = String::new();
    for (index, imp) in implicants.iter().enumerate() {
        match form {
            Form::Disjunctive => {
                if index > 0 {
                    out.push('v');
                }
            }
            Form::Conjunctive => out.push('('),
        }

        let mut first_literal = true;
        for bit in (0..num_vars).rev() {
            if imp.mask() & (1 << bit) != 0 {
                continue;
            }
            if !first_literal && form == Form::Conjunctive {
                out.push('v');
            }
            out.push((b'A' + (num_vars - bit - 1) as u8) as char);
            if imp.pattern() & (1 << bit) == 0 {
                out.push('\'');
            }
            first_literal = false;
        }

        // Every variable eliminated: the empty product is the constant 1,
        // the empty sum clause the constant 0
        if first_literal {
            out.push(match form {
                Form::Disjunctive => '1',
                Form::Conjunctive => '0',
            });
        }

        if form == Form::Conjunctive {
            out.push(')');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_minterm() {
        let imp = vec![Implicant::minterm(0b101)];
        assert_eq!(render(&imp, 3, Form::Disjunctive), "AB'C");
    }

    #[test]
    fn test_negations() {
        let imp = vec![Implicant::minterm(0b000)];
        assert_eq!(render(&imp, 3, Form::Disjunctive), "A'B'C'");
    }

    #[test]
    fn test_masked_variable_skipped() {
        let imp = vec![Implicant::new(0b100, 0b010)];
        assert_eq!(render(&imp, 3, Form::Disjunctive), "AC'");
    }

    #[test]
    fn test_disjunction_of_terms() {
        let imps = vec![Implicant::new(0b000, 0b001), Implicant::new(0b110, 0b001)];
        assert_eq!(render(&imps, 3, Form::Disjunctive), "A'B'vAB");
    }

    #[test]
    fn test_fully_eliminated_product_renders_one() {
        let imp = vec![Implicant::new(0, 0b11)];
        assert_eq!(render(&imp, 2, Form::Disjunctive), "1");
    }

    #[test]
    fn test_fully_eliminated_clause_renders_zero() {
        // The empty sum clause is the constant 0, not 1
        let imp = vec![Implicant::new(0, 0b11)];
        assert_eq!(render(&imp, 2, Form::Conjunctive), "(0)");
    }

    #[test]
    fn test_conjunctive_clauses() {
        let clauses = vec![Implicant::new(0b011, 0b100), Implicant::new(0b110, 0b001)];
        assert_eq!(render(&clauses, 3, Form::Conjunctive), "(BvC)(AvB)");
    }

    #[test]
    fn test_conjunctive_negated_literals() {
        let clauses = vec![Implicant::new(0b00, 0)];
        assert_eq!(render(&clauses, 2, Form::Conjunctive), "(A'vB')");
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(render(&[], 3, Form::Disjunctive), "0");
        assert_eq!(render(&[], 3, Form::Conjunctive), "1");
    }

    #[test]
    fn test_alphabet_order() {
        // Four variables: A maps to bit 3, D to bit 0
        let imp = vec![Implicant::minterm(0b1000)];
        assert_eq!(render(&imp, 4, Form::Disjunctive), "AB'C'D'");
    }
}
