pub mod finite_state;
pub mod types;

pub use finite_state::Nfa;
pub use types::{State, StateId};
