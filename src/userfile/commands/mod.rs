//! # Operation Handlers
//!
//! One module per operation. Each handler reads the whole collection through a
//! [`Storage`](crate::store::Storage), works on it in memory, and writes the
//! whole collection back only when it changed something.
//!
//! Handlers return an [`Outcome`] rather than bytes. "Already exists" and "not
//! found" are outcomes, not errors: the operation ran fine, it just had
//! nothing to do. Turning an outcome into output is [`Outcome::render`]'s job.

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// Result of running one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The collection was changed and persisted.
    Written,
    /// A projection of the stored data.
    Data(Vec<u8>),
    /// A lookup matched nothing.
    NoMatch,
    /// Add was skipped because the id is taken.
    AlreadyExists { id: String },
    /// Remove was skipped because the id is absent.
    NotFound { id: String },
}

impl Outcome {
    /// The bytes written to the output sink for this outcome.
    pub fn render(&self) -> Vec<u8> {
        match self {
            Outcome::Written | Outcome::NoMatch => Vec::new(),
            Outcome::Data(bytes) => bytes.clone(),
            Outcome::AlreadyExists { id } => {
                format!("Item with id {} already exists", id).into_bytes()
            }
            Outcome::NotFound { id } => format!("Item with id {} not found", id).into_bytes(),
        }
    }

    /// Whether the operation did what was asked.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Written | Outcome::Data(_))
    }
}
