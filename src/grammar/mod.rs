/*
    This module is for storing L-systems once they are parsed
*/

use std::collections::BTreeMap;
use std::fmt::Display;

use itertools::Itertools;

// The base unit of an L-system sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    MoveForward,
    JumpForward,
    Word(char),
}

impl Symbol {
    /// Characters that stand for a built-in symbol instead of a word.
    pub const ALIASES: &'static [(char, Symbol)] = &[
        ('F', Symbol::MoveForward),
        ('f', Symbol::JumpForward),
    ];

    pub fn from_char(c: char) -> Symbol {
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == c)
            .map(|(_, symbol)| *symbol)
            .unwrap_or(Symbol::Word(c))
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::Word(c) => *c,
            builtin => Self::ALIASES
                .iter()
                .find(|(_, symbol)| symbol == builtin)
                .map(|(alias, _)| *alias)
                .unwrap_or('?'),
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// An axiom or the right hand side of a production
pub type Sequence = Vec<Symbol>;

/// One weighted alternative for rewriting a predecessor.
#[derive(Clone, Debug, PartialEq)]
pub struct Production {
    /// Weight in `(0, 1]`, `1.0` unless the source gives one.
    pub probability: f64,
    pub successor: Sequence,
}

// All the alternatives for one predecessor, in source order
pub type ProductionSet = Vec<Production>;

pub type ProductionTable = BTreeMap<Symbol, ProductionSet>;

/// A parsed L-system.
///
/// Built once by [`crate::parser::parse`] and owned by the caller afterwards.
/// Its `Display` output is a canonical document which parses back to an equal
/// value.
#[derive(Clone, Debug, PartialEq)]
pub struct LSystem {
    pub generations: u32,
    /// Turning angle in degrees.
    pub angle: f64,
    pub scale: f64,
    pub axiom: Sequence,
    pub productions: ProductionTable,
}

impl LSystem {
    pub fn productions_for(&self, predecessor: &Symbol) -> Option<&ProductionSet> {
        self.productions.get(predecessor)
    }

    // Number of alternatives across every predecessor
    pub fn production_count(&self) -> usize {
        self.productions.values().map(Vec::len).sum()
    }
}

impl Display for LSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "generations:{}", self.generations)?;
        writeln!(f, "angle:{}", self.angle)?;
        writeln!(f, "scale:{}", self.scale)?;
        writeln!(f, "axiom:{}", self.axiom.iter().join(""))?;

        for (predecessor, productions) in &self.productions {
            for production in productions {
                write!(f, "{} ", predecessor)?;
                if production.probability != 1.0 {
                    write!(f, "({}) ", production.probability)?;
                }
                writeln!(f, "-> {}", production.successor.iter().join(""))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn aliases_resolve_to_builtins() {
        let chars = vec!['F', 'f', 'X', '[', '+'];
        let answers = vec![
            Symbol::MoveForward,
            Symbol::JumpForward,
            Symbol::Word('X'),
            Symbol::Word('['),
            Symbol::Word('+')
        ];

        for (c, answer) in zip(chars, answers) {
            assert_eq!(Symbol::from_char(c), answer);
            assert_eq!(answer.as_char(), c);
        }
    }

    #[test]
    fn symbols_order_by_variant_then_payload() {
        let mut symbols = vec![
            Symbol::Word('b'),
            Symbol::JumpForward,
            Symbol::Word('a'),
            Symbol::MoveForward
        ];
        symbols.sort();

        assert_eq!(symbols, vec![
            Symbol::MoveForward,
            Symbol::JumpForward,
            Symbol::Word('a'),
            Symbol::Word('b')
        ]);
        assert_eq!(Symbol::Word('x'), Symbol::Word('x'));
        assert_ne!(Symbol::Word('F'), Symbol::MoveForward);
    }

    #[test]
    fn display_canonical_document() {
        let mut productions = ProductionTable::new();
        productions.insert(Symbol::MoveForward, vec![
            Production {
                probability: 0.5,
                successor: vec![Symbol::MoveForward, Symbol::Word('+'), Symbol::MoveForward]
            },
            Production {
                probability: 0.5,
                successor: vec![Symbol::JumpForward]
            }
        ]);
        productions.insert(Symbol::Word('X'), vec![Production {
            probability: 1.0,
            successor: vec![Symbol::MoveForward, Symbol::Word('X')]
        }]);

        let lsystem = LSystem {
            generations: 3,
            angle: 22.5,
            scale: 1.0,
            axiom: vec![Symbol::Word('X')],
            productions
        };

        assert_eq!(lsystem.to_string(), "generations:3\n\
            angle:22.5\n\
            scale:1\n\
            axiom:X\n\
            F (0.5) -> F+F\n\
            F (0.5) -> f\n\
            X -> FX\n");
        assert_eq!(lsystem.production_count(), 3);
        assert_eq!(lsystem.productions_for(&Symbol::Word('X')).map(Vec::len), Some(1));
        assert_eq!(lsystem.productions_for(&Symbol::Word('Y')), None);
    }
}
