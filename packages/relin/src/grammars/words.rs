use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::grammars::regular::RegularGrammar;

/// Enumerates words of the grammar's language by breadth-first traversal of
/// the rewrite relation.
#[derive(Debug)]
pub struct WordGenerator<'a> {
    grammar: &'a RegularGrammar,
}

impl<'a> WordGenerator<'a> {
    pub fn new(grammar: &'a RegularGrammar) -> Self {
        Self { grammar }
    }

    /// Generates up to `max_words` distinct words derivable from the start
    /// symbol, in breadth-first order. A dequeued string with no remaining
    /// rewrite is a finished word. The seen-set keyed by the rewritten string
    /// keeps derivation cycles (e.g. `S → … → S`) from re-entering the
    /// frontier, so the traversal terminates even on cyclic grammars: either
    /// the frontier drains (possibly yielding fewer than `max_words` words)
    /// or the bound is reached.
    pub fn generate(&self, max_words: usize) -> Vec<String> {
        let start = self.grammar.start_symbol().to_string();

        let mut words = Vec::new();
        let mut queue = VecDeque::from([start.clone()]);
        let mut seen = IndexSet::from([start]);

        while let Some(current) = queue.pop_front() {
            if words.len() >= max_words {
                break;
            }

            let expansions = self.grammar.expand(&current);

            if expansions.is_empty() {
                words.push(current);
                continue;
            }

            for next in expansions {
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::WordGenerator;
    use crate::grammars::regular::RegularGrammar;

    fn variant_20() -> RegularGrammar {
        RegularGrammar::from_productions("S", &["S → dA", "A → d | aB", "B → bC", "C → cA | aS"])
            .unwrap()
    }

    #[test]
    fn generates_words_in_breadth_first_order() {
        let grammar = variant_20();
        let generator = WordGenerator::new(&grammar);

        assert_eq!(generator.generate(3), vec!["dd", "dabcd", "dabadd"]);
    }

    #[test]
    fn generation_is_deterministic() {
        let grammar = variant_20();
        let generator = WordGenerator::new(&grammar);

        assert_eq!(generator.generate(10), generator.generate(10));
    }

    #[test]
    fn respects_the_word_bound() {
        let grammar = variant_20();
        let generator = WordGenerator::new(&grammar);

        assert_eq!(generator.generate(0).len(), 0);
        assert_eq!(generator.generate(7).len(), 7);
    }

    #[test]
    fn terminates_on_cyclic_grammars() {
        // The C → aS production loops back to the start symbol.
        let grammar = variant_20();
        let generator = WordGenerator::new(&grammar);

        let words = generator.generate(25);
        assert_eq!(words.len(), 25);
        assert!(words.iter().all(|word| word.starts_with('d')));
    }

    #[test]
    fn drains_the_frontier_of_a_finite_language() {
        let grammar = RegularGrammar::from_productions("S", &["S → d"]).unwrap();
        let generator = WordGenerator::new(&grammar);

        assert_eq!(generator.generate(100), vec!["d"]);
    }
}
