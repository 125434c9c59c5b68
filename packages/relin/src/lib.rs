pub mod automata;
pub mod grammars;
pub mod language;
