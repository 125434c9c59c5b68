mod parser;
pub mod regular;
pub mod types;
pub mod words;

pub use regular::RegularGrammar;
pub use types::{GrammarError, NonTerminal, Production, Terminal};
pub use words::WordGenerator;
