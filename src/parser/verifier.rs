use std::fmt::Display;

use crate::grammar::{LSystem, ProductionSet, Symbol};

// How far a probability sum may drift from 1 before it is reported
const TOLERANCE: f64 = 1e-9;

/// Something legal but suspicious about a parsed L-system.
#[derive(Debug, PartialEq)]
pub enum Warning {
    // The alternatives of a predecessor do not add up to a certain choice
    UnbalancedProbabilities { predecessor: Symbol, total: f64 },
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnbalancedProbabilities { predecessor, total } => write!(f, "Probabilities for `{}` add up to {} instead of 1", predecessor, total),
        }
    }
}

fn check_balance(predecessor: &Symbol, productions: &ProductionSet) -> Option<Warning> {
    let total: f64 = productions.iter().map(|p| p.probability).sum();

    if (total - 1.0).abs() > TOLERANCE {
        Some(Warning::UnbalancedProbabilities { predecessor: *predecessor, total })
    } else {
        None
    }
}

// Checks that never fail a parse, reported in predecessor order
pub fn verify(lsystem: &LSystem) -> Vec<Warning> {
    lsystem.productions.iter()
        .filter_map(|(predecessor, productions)| check_balance(predecessor, productions))
        .collect()
}
