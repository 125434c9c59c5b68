use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use crate::{
    grammars::{
        parser,
        types::{GrammarError, NonTerminal, Production, Terminal},
    },
    language::Symbol,
};

/// A right-linear grammar: every right-hand side is a single terminal,
/// optionally followed by one non-terminal (`a` or `aB`). Productions keep
/// their declaration order, which makes rewriting and word generation
/// deterministic.
#[derive(Debug, Clone)]
pub struct RegularGrammar {
    start_symbol: NonTerminal,
    non_terminals: IndexSet<NonTerminal>,
    terminals: IndexSet<Terminal>,
    productions: Vec<Production>,
}

impl RegularGrammar {
    pub fn new(start_symbol: NonTerminal) -> Self {
        let non_terminals = IndexSet::from([start_symbol.clone()]);

        Self {
            start_symbol,
            non_terminals,
            terminals: IndexSet::new(),
            productions: Vec::new(),
        }
    }

    /// Builds a grammar from production definition lines like `A → d | aB`,
    /// declaring every symbol the lines mention.
    pub fn from_productions<S: AsRef<str>>(
        start_symbol: S,
        productions: &[impl AsRef<str>],
    ) -> Result<Self, GrammarError> {
        let start_symbol = NonTerminal(Symbol::new(start_symbol.as_ref()));
        let mut grammar = Self::new(start_symbol);

        for line in productions {
            let (lhs, alternatives) = parser::production_line(line.as_ref())?;

            grammar.add_non_terminal(lhs);
            for rhs in alternatives {
                for c in rhs.chars() {
                    if c.is_ascii_uppercase() {
                        grammar.add_non_terminal(c);
                    } else {
                        grammar.add_terminal(c);
                    }
                }

                grammar.add_production(String::from(lhs), rhs)?;
            }
        }

        Ok(grammar)
    }

    pub fn start_symbol(&self) -> &NonTerminal {
        &self.start_symbol
    }

    pub fn non_terminals(&self) -> &IndexSet<NonTerminal> {
        &self.non_terminals
    }

    pub fn terminals(&self) -> &IndexSet<Terminal> {
        &self.terminals
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn add_non_terminal(&mut self, name: impl Into<String>) {
        self.non_terminals.insert(NonTerminal(Symbol::new(name)));
    }

    pub fn add_terminal(&mut self, c: char) {
        self.terminals.insert(Terminal(Symbol::new(c)));
    }

    pub fn is_non_terminal(&self, s: &str) -> bool {
        self.non_terminals.contains(&NonTerminal(Symbol::new(s)))
    }

    pub fn is_terminal(&self, c: char) -> bool {
        self.terminals.contains(&Terminal(Symbol::new(c)))
    }

    /// Appends a production, rejecting malformed ones up front so that
    /// rewriting and the NFA construction only ever see well-formed rules.
    pub fn add_production(
        &mut self,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
    ) -> Result<(), GrammarError> {
        let production = Production {
            lhs: lhs.into(),
            rhs: rhs.into(),
        };

        if production.lhs.is_empty() {
            return Err(GrammarError::EmptyLeftHandSide);
        }

        self.check_shape(&production)?;
        self.productions.push(production);

        Ok(())
    }

    // Right-hand sides must be a declared terminal optionally followed by one
    // declared non-terminal. The NFA construction only covers these shapes.
    fn check_shape(&self, production: &Production) -> Result<(), GrammarError> {
        let mut chars = production.rhs.chars();
        let leading = chars.next().filter(|&c| self.is_terminal(c));
        let trailing = chars.as_str();

        match leading {
            Some(_) if trailing.is_empty() || self.is_non_terminal(trailing) => Ok(()),
            _ => Err(GrammarError::UnsupportedShape {
                production: production.clone(),
            }),
        }
    }

    /// Returns every string obtained by rewriting a suffix of `current` with
    /// one production, in production declaration order. An empty result means
    /// `current` has no non-terminal left to rewrite: it is a finished word.
    pub fn expand(&self, current: &str) -> Vec<String> {
        let mut expansions = Vec::new();

        for production in &self.productions {
            if let Some(prefix) = current.strip_suffix(production.lhs.as_str()) {
                expansions.push(format!("{}{}", prefix, production.rhs));
            }
        }

        expansions
    }

    pub fn definition(&self) -> String {
        let mut grouped: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for production in &self.productions {
            grouped
                .entry(production.lhs.as_str())
                .or_default()
                .push(production.rhs.as_str());
        }

        let mut definition = format!(
            "G = ({{{}}}, {{{}}}, P, {})\n\n",
            self.non_terminals.iter().join(", "),
            self.terminals.iter().join(", "),
            self.start_symbol
        );

        definition += "P = {\n";
        for (lhs, rhs) in grouped {
            definition += &format!("  {} → {}\n", lhs, rhs.join(" | "));
        }
        definition += "}\n";

        definition
    }
}

#[cfg(test)]
mod tests {
    use super::RegularGrammar;
    use crate::grammars::types::GrammarError;

    fn variant_20() -> RegularGrammar {
        RegularGrammar::from_productions("S", &["S → dA", "A → d | aB", "B → bC", "C → cA | aS"])
            .unwrap()
    }

    #[test]
    fn expand_rewrites_every_matching_suffix() {
        let grammar = variant_20();

        assert_eq!(grammar.expand("dA"), vec!["dd", "daB"]);
        assert_eq!(grammar.expand("dabC"), vec!["dabcA", "dabaS"]);
    }

    #[test]
    fn expand_of_finished_word_is_empty() {
        let grammar = variant_20();

        assert!(grammar.expand("dd").is_empty());
    }

    #[test]
    fn expand_ignores_interior_occurrences() {
        let grammar = variant_20();

        // `A` occurs in the middle but only suffixes are rewritten.
        assert!(grammar.expand("dAd").is_empty());
    }

    #[test]
    fn from_productions_declares_symbols() {
        let grammar = variant_20();

        assert_eq!(grammar.start_symbol().to_string(), "S");
        assert_eq!(grammar.non_terminals().len(), 4);
        assert_eq!(grammar.terminals().len(), 4);
        assert_eq!(grammar.productions().len(), 6);
    }

    #[test]
    fn rejects_empty_left_hand_side() {
        let mut grammar = variant_20();

        assert_eq!(
            grammar.add_production("", "d"),
            Err(GrammarError::EmptyLeftHandSide)
        );
    }

    #[test]
    fn rejects_non_right_linear_shapes() {
        let mut grammar = variant_20();

        // Empty right-hand side, leading non-terminal, more than one trailing
        // symbol: none of these fit the `a` / `aB` shape.
        for rhs in ["", "Ba", "abA", "A"] {
            assert!(matches!(
                grammar.add_production("S", rhs),
                Err(GrammarError::UnsupportedShape { .. })
            ));
        }
    }

    #[test]
    fn rejects_undeclared_symbols() {
        let mut grammar = variant_20();

        assert!(grammar.add_production("S", "xA").is_err());
        assert!(grammar.add_production("S", "dZ").is_err());
    }

    #[test]
    fn definition_groups_alternatives() {
        let definition = variant_20().definition();

        assert!(definition.starts_with("G = ({S, A, B, C}, {d, a, b, c}, P, S)"));
        assert!(definition.contains("A → d | aB"));
    }
}
