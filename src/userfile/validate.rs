//! Argument validation.
//!
//! Raw flag values arrive as an [`Arguments`] value and leave as a typed
//! [`Request`]. Checks run in a fixed order and stop at the first failure, so
//! the same bad input always yields the same error. Nothing here touches the
//! filesystem.

use crate::error::{Result, UserFileError};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Flag values exactly as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub operation: Option<String>,
    pub id: Option<String>,
    pub item: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    List,
    FindById,
    Remove,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::List,
        OperationKind::FindById,
        OperationKind::Remove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::List => "list",
            OperationKind::FindById => "findById",
            OperationKind::Remove => "remove",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = UserFileError;

    fn from_str(s: &str) -> Result<Self> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UserFileError::InvalidOperation(s.to_string()))
    }
}

/// A validated operation together with the input it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { item: String },
    List,
    FindById { id: String },
    Remove { id: String },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Add { .. } => OperationKind::Add,
            Operation::List => OperationKind::List,
            Operation::FindById { .. } => OperationKind::FindById,
            Operation::Remove { .. } => OperationKind::Remove,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub operation: Operation,
    pub file_name: PathBuf,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Validate `args`, requiring the file name to end in `.{file_ext}`.
pub fn validate(args: &Arguments, file_ext: &str) -> Result<Request> {
    let kind: OperationKind = present(&args.operation)
        .ok_or(UserFileError::MissingOperation)?
        .parse()?;

    let operation = match kind {
        OperationKind::Add => {
            let item = present(&args.item)
                .filter(|item| *item != "{}")
                .ok_or(UserFileError::MissingItem)?;
            Operation::Add {
                item: item.to_string(),
            }
        }
        OperationKind::List => Operation::List,
        OperationKind::FindById => Operation::FindById {
            id: required_id(args)?,
        },
        OperationKind::Remove => Operation::Remove {
            id: required_id(args)?,
        },
    };

    let file_name = check_file_name(args.file_name.as_deref(), file_ext)?;

    Ok(Request {
        operation,
        file_name: PathBuf::from(file_name),
    })
}

fn required_id(args: &Arguments) -> Result<String> {
    present(&args.id)
        .map(str::to_string)
        .ok_or(UserFileError::MissingId)
}

/// The text after the last `.` must equal `file_ext`. A name without any dot
/// is compared as a whole.
pub fn check_file_name<'a>(file_name: Option<&'a str>, file_ext: &str) -> Result<&'a str> {
    let file_name = file_name
        .filter(|name| !name.is_empty())
        .ok_or(UserFileError::MissingFileName)?;

    match file_name.rsplit('.').next() {
        Some(ext) if ext == file_ext => Ok(file_name),
        _ => Err(UserFileError::InvalidFileExtension),
    }
}
