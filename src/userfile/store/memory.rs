use super::Storage;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    bytes: Vec<u8>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            writes: 0,
        }
    }

    pub fn contents(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of `overwrite` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for InMemoryStore {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn overwrite(&mut self, bytes: &[u8]) -> Result<()> {
        self.bytes = bytes.to_vec();
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{encode_users, User};

    pub struct StoreFixture {
        users: Vec<User>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { users: Vec::new() }
        }

        pub fn with_users(mut self, count: usize) -> Self {
            let start = self.users.len();
            for n in start + 1..=start + count {
                self.users
                    .push(User::new(n.to_string(), format!("user{}@example.com", n), 20 + n as i64));
            }
            self
        }

        pub fn with_user(mut self, id: &str, email: &str, age: i64) -> Self {
            self.users.push(User::new(id, email, age));
            self
        }

        pub fn build(self) -> InMemoryStore {
            let bytes = encode_users(&self.users).unwrap();
            InMemoryStore::with_contents(bytes)
        }
    }
}
