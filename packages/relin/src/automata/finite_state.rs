use indexmap::{indexmap, IndexMap, IndexSet};
use itertools::Itertools;
use tabled::{builder::Builder, settings::Style};

use crate::{
    automata::types::{State, StateId},
    grammars::regular::RegularGrammar,
    language::Symbol,
};

/// A nondeterministic finite automaton without epsilon transitions. The
/// transition relation is indexed by (state, symbol); a pair may map to
/// several target states.
#[derive(Debug)]
pub struct Nfa {
    pub states: IndexMap<StateId, State>,
    pub start_state: StateId,
    pub final_states: IndexSet<StateId>,
    pub transitions: IndexMap<StateId, IndexMap<Symbol, IndexSet<StateId>>>,
}

impl Nfa {
    pub fn new(start_state: Option<State>) -> Self {
        let start_state = start_state.unwrap_or_default();
        let start_state_id = start_state.id();

        Nfa {
            start_state: start_state_id,
            states: indexmap! { start_state_id => start_state },
            transitions: IndexMap::new(),
            final_states: IndexSet::new(),
        }
    }

    fn new_state(&mut self) -> StateId {
        let state = State::new();
        let id = state.id();

        self.states.insert(id, state);

        id
    }

    pub fn make_final(&mut self, state: StateId) {
        self.final_states.insert(state);
    }

    /// Adds a transition. Endpoint states must already exist; the symbol is
    /// declared implicitly (the alphabet is whatever the transitions use).
    pub fn link(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.transitions
            .entry(from)
            .or_insert_with(IndexMap::new)
            .entry(symbol)
            .or_insert_with(IndexSet::new)
            .insert(to);
    }

    /// The symbols appearing on at least one transition.
    pub fn symbols(&self) -> IndexSet<&Symbol> {
        self.transitions.values().flat_map(|map| map.keys()).collect()
    }

    /// Decides membership by multi-state simulation: track every state
    /// reachable on the input consumed so far; a character takes the union
    /// of the targets over all active states. An empty next set rejects
    /// immediately, so characters outside the alphabet simply reject. After
    /// the last character, accept iff some active state is final (for the
    /// empty word: iff the start state is final).
    pub fn accepts(&self, word: &str) -> bool {
        let mut active = IndexSet::from([self.start_state]);

        for c in word.chars() {
            let symbol = Symbol::new(c);

            let mut next = IndexSet::new();
            for state in &active {
                if let Some(next_states) = self
                    .transitions
                    .get(state)
                    .and_then(|transitions| transitions.get(&symbol))
                {
                    next.extend(next_states.iter().copied());
                }
            }

            if next.is_empty() {
                return false;
            }
            active = next;
        }

        active
            .iter()
            .any(|state| self.final_states.contains(state))
    }

    pub fn from_definition(
        start_state: &str,
        final_states: &[&str],
        transitions: &[(&str, char, &str)],
    ) -> Nfa {
        let mut nfa = Nfa::new(Some(State::with_name(start_state)));
        let mut state_map = IndexMap::from([(start_state.to_string(), nfa.start_state)]);

        for &final_state in final_states {
            let id = intern(&mut nfa, &mut state_map, final_state);
            nfa.make_final(id);
        }

        for &(from, symbol, to) in transitions {
            let from = intern(&mut nfa, &mut state_map, from);
            let to = intern(&mut nfa, &mut state_map, to);

            nfa.link(from, Symbol::new(symbol), to);
        }

        nfa
    }

    // States derived from grammar symbols keep their names; anonymous states
    // (the accepting sentinel) get fresh q1, q2, … labels.
    fn state_names(&self) -> IndexMap<StateId, String> {
        let mut names = IndexMap::new();
        let mut fresh = 0;

        for state in self.states.values() {
            let name = state.name().map(str::to_owned).unwrap_or_else(|| {
                fresh += 1;
                format!("q{}", fresh)
            });
            names.insert(state.id(), name);
        }

        names
    }

    pub fn transition_table(&self) -> String {
        let names = self.state_names();
        let symbols = self.symbols().into_iter().cloned().collect::<Vec<_>>();

        let mut builder = Builder::default();

        for (id, name) in &names {
            let prefix = if *id == self.start_state { "→" } else { "" };
            let suffix = if self.final_states.contains(id) { "*" } else { "" };

            let mut record = vec![format!("{}{}{}", prefix, name, suffix)];

            let state_transitions = self.transitions.get(id);
            for symbol in &symbols {
                record.push(
                    state_transitions
                        .and_then(|transitions| transitions.get(symbol))
                        .map(|next_states| {
                            format!(
                                "{{{}}}",
                                next_states.iter().map(|next| &names[next]).join(", ")
                            )
                        })
                        .unwrap_or_default(),
                );
            }

            builder.push_record(record);
        }

        builder.insert_record(
            0,
            std::iter::once("δ".to_string()).chain(symbols.iter().map(ToString::to_string)),
        );

        let mut table = builder.build();
        table.with(Style::rounded());

        table.to_string()
    }

    pub fn definition(&self) -> String {
        let names = self.state_names();

        let mut definition = format!(
            "A = ({{{}}}, {{{}}}, δ, {}, {{{}}})\n\n",
            names.values().join(", "),
            self.symbols().iter().join(", "),
            names[&self.start_state],
            self.final_states.iter().map(|id| &names[id]).join(", "),
        );

        definition += "δ = {\n";
        for (from, state_transitions) in &self.transitions {
            for (symbol, next_states) in state_transitions {
                definition += &format!(
                    "  δ({}, {}) = {{{}}}\n",
                    names[from],
                    symbol,
                    next_states.iter().map(|next| &names[next]).join(", "),
                );
            }
        }
        definition += "}\n";

        definition
    }
}

fn intern(nfa: &mut Nfa, state_map: &mut IndexMap<String, StateId>, name: &str) -> StateId {
    *state_map.entry(name.to_string()).or_insert_with(|| {
        let state = State::with_name(name);
        let id = state.id();

        nfa.states.insert(id, state);

        id
    })
}

impl From<&RegularGrammar> for Nfa {
    /// The standard right-linear grammar to NFA construction: non-terminals
    /// become named states, `A → aB` becomes `δ(A, a) ∋ B`, and `A → a` goes
    /// to a single synthesized accepting state. The start state is the
    /// grammar's start symbol.
    fn from(grammar: &RegularGrammar) -> Self {
        let start_symbol = grammar.start_symbol().to_string();

        let mut nfa = Nfa::new(Some(State::with_name(&start_symbol)));
        let mut state_map = IndexMap::from([(start_symbol, nfa.start_state)]);

        let final_state = nfa.new_state();
        nfa.make_final(final_state);

        for production in grammar.productions() {
            let mut rhs = production.rhs.chars();
            let Some(terminal) = rhs.next() else {
                continue;
            };
            let trailing = rhs.as_str().to_string();

            let from = intern(&mut nfa, &mut state_map, &production.lhs);
            let to = if trailing.is_empty() {
                final_state
            } else {
                intern(&mut nfa, &mut state_map, &trailing)
            };

            nfa.link(from, Symbol::new(terminal), to);
        }

        nfa
    }
}
