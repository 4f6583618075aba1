use super::BlobStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory blob store for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::StockyError;

    /// Blob store whose reads work but whose writes always fail.
    /// Used to exercise the persistence-failure paths.
    #[derive(Default)]
    pub struct FailingStore {
        inner: InMemoryStore,
    }

    impl FailingStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-seed a blob so reads have something to return.
        pub fn with_blob(mut self, key: &str, value: &str) -> Self {
            self.inner.blobs.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl BlobStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(StockyError::Store("write failed".to_string()))
        }
    }

    /// Blob store whose reads fail outright.
    #[derive(Default)]
    pub struct UnreadableStore;

    impl BlobStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StockyError::Store("read failed".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }
}
