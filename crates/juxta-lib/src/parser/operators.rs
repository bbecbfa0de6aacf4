//! Operator table built from ordered precedence levels.
//!
//! Ranks are assigned by position: the first (loosest) level gets rank 0, each later
//! level one more. Higher rank binds tighter.

use indexmap::{IndexMap, IndexSet};
use juxta_core::{Fixity, OperatorLevel};

use super::tree::Node;
use crate::BuildError;

/// A resolved operator entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub rank: u32,
    pub fixity: Fixity,
    /// Label of the trees this operator builds.
    pub name: String,
}

impl Operator {
    /// Minimum rank for the operand parsed after this operator.
    ///
    /// Left-associative operators demand one rank tighter, which forces left grouping.
    pub fn operand_rank(&self) -> u32 {
        match self.fixity {
            Fixity::Left => self.rank + 1,
            Fixity::Right | Fixity::Prefix | Fixity::Postfix => self.rank,
        }
    }
}

/// How the parser reads the element after a complete operand.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Step<'t> {
    Postfix(&'t Operator),
    Binary(&'t Operator),
    /// Start of another operand: implicit application.
    Apply(&'t Operator),
}

/// Immutable lookup from spelling to operator, per fixity class.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    prefix: IndexMap<String, Operator>,
    postfix: IndexMap<String, Operator>,
    binary: IndexMap<String, Operator>,
    application: Operator,
    multichar: IndexSet<String>,
}

impl OperatorTable {
    pub fn new(levels: &[OperatorLevel]) -> Result<Self, BuildError> {
        let mut prefix = IndexMap::new();
        let mut postfix = IndexMap::new();
        let mut binary = IndexMap::new();
        let mut multichar = IndexSet::new();
        let mut application = None;

        for (rank, level) in levels.iter().enumerate() {
            for entry in &level.operators {
                let operator = Operator {
                    rank: rank as u32,
                    fixity: level.fixity,
                    name: entry.name.clone(),
                };

                let Some(symbol) = &entry.symbol else {
                    if !level.fixity.is_binary() {
                        return Err(BuildError::ApplicationNotBinary);
                    }
                    if application.replace(operator).is_some() {
                        return Err(BuildError::DuplicateApplication);
                    }
                    continue;
                };

                let len = symbol.chars().count();
                if !(1..=2).contains(&len) {
                    return Err(BuildError::OperatorSpelling(symbol.clone()));
                }

                let (class, entries) = match level.fixity {
                    Fixity::Prefix => ("prefix", &mut prefix),
                    Fixity::Postfix => ("postfix", &mut postfix),
                    Fixity::Left | Fixity::Right => ("binary", &mut binary),
                };
                if entries.insert(symbol.clone(), operator).is_some() {
                    return Err(BuildError::DuplicateOperator {
                        symbol: symbol.clone(),
                        class,
                    });
                }
                if len == 2 {
                    multichar.insert(symbol.clone());
                }
            }
        }

        let application = application.ok_or(BuildError::MissingApplication)?;
        log::debug!(
            "operator table: {} levels, {} prefix, {} postfix, {} binary, application at rank {}",
            levels.len(),
            prefix.len(),
            postfix.len(),
            binary.len(),
            application.rank
        );

        Ok(Self {
            prefix,
            postfix,
            binary,
            application,
            multichar,
        })
    }

    pub fn prefix(&self, symbol: &str) -> Option<&Operator> {
        self.prefix.get(symbol)
    }

    pub fn postfix(&self, symbol: &str) -> Option<&Operator> {
        self.postfix.get(symbol)
    }

    pub fn binary(&self, symbol: &str) -> Option<&Operator> {
        self.binary.get(symbol)
    }

    /// The implicit application operator.
    pub fn application(&self) -> &Operator {
        &self.application
    }

    pub fn is_multichar(&self, spelling: &str) -> bool {
        self.multichar.contains(spelling)
    }

    /// Multi-character spellings, in configuration order.
    pub fn multichar(&self) -> impl Iterator<Item = &str> {
        self.multichar.iter().map(String::as_str)
    }

    /// Postfix wins over binary; anything else starts a new operand.
    pub(crate) fn classify<'t>(&'t self, node: &Node) -> Step<'t> {
        if let Some(symbol) = node.symbol() {
            if let Some(op) = self.postfix(symbol) {
                return Step::Postfix(op);
            }
            if let Some(op) = self.binary(symbol) {
                return Step::Binary(op);
            }
        }
        Step::Apply(&self.application)
    }
}
