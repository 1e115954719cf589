use super::mem_backend::MemBackend;
use super::TodoStore;

pub type InMemoryStore = TodoStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        TodoStore::load(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_items(mut self, count: usize) -> Self {
            for i in 0..count {
                let _ = self
                    .store
                    .add(&format!("Test item {}", i + 1), &format!("detail {}", i + 1));
            }
            self
        }

        pub fn with_item(mut self, text: &str, detail: &str) -> Self {
            let _ = self.store.add(text, detail);
            self
        }

        pub fn with_completed_item(mut self, text: &str) -> Self {
            let _ = self.store.add(text, "");
            let id = self.store.items()[0].id;
            let _ = self.store.toggle(id, true);
            self
        }
    }
}
