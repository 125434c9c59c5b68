use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(Uuid);

/// An automaton state. Identity is a fresh UUID; the optional name ties a
/// state back to the grammar symbol it was derived from. Anonymous states
/// can therefore never collide with a grammar symbol, which is what makes
/// the synthesized accepting state a safe sentinel.
#[derive(Debug, Clone)]
pub struct State {
    id: StateId,
    name: Option<String>,
}

impl State {
    pub fn new() -> Self {
        Self {
            id: StateId(Uuid::new_v4()),
            name: None,
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: StateId(Uuid::new_v4()),
            name: Some(name.into()),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
