use super::{PolicyState, PolicyStore};
use crate::error::Result;

/// In-memory policy store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: PolicyState,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolicyStore for InMemoryStore {
    fn load_state(&self) -> PolicyState {
        self.state.clone()
    }

    fn save_state(&mut self, state: &PolicyState) -> Result<()> {
        self.state = state.clone();
        Ok(())
    }
}
