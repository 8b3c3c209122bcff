//! # Dispatcher
//!
//! The single entry point for running an operation. It:
//! - **Validates** the raw [`Arguments`] into a [`Request`]
//! - **Opens** the backing file for the duration of the call
//! - **Dispatches** to the matching handler in `commands/`
//! - **Writes** the rendered [`Outcome`] to the given sink
//!
//! The backing file is opened only after validation succeeds, and its handle
//! is dropped on every return path.

use crate::commands::{self, Outcome};
use crate::config::Settings;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::Storage;
use crate::validate::{validate, Arguments, Operation, Request};
use std::io::Write;
use tracing::debug;

/// Validate `args`, run the operation against the named file and write its
/// output to `out`.
pub fn perform<W: Write>(args: &Arguments, settings: &Settings, out: &mut W) -> Result<Outcome> {
    let request = validate(args, &settings.file_ext)?;
    let mut store = FileStore::open(&request.file_name, settings.file_mode)?;

    let outcome = execute(&request, &mut store, settings)?;
    out.write_all(&outcome.render())?;
    out.flush()?;
    Ok(outcome)
}

/// Run an already validated request against `store`.
pub fn execute<S: Storage>(request: &Request, store: &mut S, settings: &Settings) -> Result<Outcome> {
    debug!(operation = %request.operation.kind(), file = %request.file_name.display(), "dispatching");

    let outcome = match &request.operation {
        Operation::Add { item } => commands::add::run(store, item)?,
        Operation::List => commands::list::run(store)?,
        Operation::FindById { id } => commands::find::run(store, id)?,
        Operation::Remove { id } => commands::remove::run(store, id, settings.removal_order)?,
    };

    debug!(?outcome, "operation finished");
    Ok(outcome)
}

pub use crate::commands::remove::RemovalOrder;
pub use crate::validate::OperationKind;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserFileError;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ITEM: &str = r#"{"id":"1","email":"a@x.com","age":30}"#;

    fn args(operation: &str, id: Option<&str>, item: Option<&str>, file: &str) -> Arguments {
        Arguments {
            operation: Some(operation.to_string()),
            id: id.map(str::to_string),
            item: item.map(str::to_string),
            file_name: Some(file.to_string()),
        }
    }

    #[test]
    fn execute_dispatches_to_handlers() {
        let settings = Settings::default();
        let mut store = InMemoryStore::new();
        let request = |operation| Request {
            operation,
            file_name: PathBuf::from("users.json"),
        };

        let added = execute(
            &request(Operation::Add { item: ITEM.into() }),
            &mut store,
            &settings,
        )
        .unwrap();
        assert_eq!(added, Outcome::Written);

        let listed = execute(&request(Operation::List), &mut store, &settings).unwrap();
        assert_eq!(listed, Outcome::Data(store.contents().to_vec()));

        let found = execute(
            &request(Operation::FindById { id: "1".into() }),
            &mut store,
            &settings,
        )
        .unwrap();
        assert_eq!(found.render(), ITEM.as_bytes());

        let removed = execute(
            &request(Operation::Remove { id: "1".into() }),
            &mut store,
            &settings,
        )
        .unwrap();
        assert_eq!(removed, Outcome::Written);
        assert_eq!(store.contents(), b"[]");
    }

    #[test]
    fn perform_add_then_list() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("users.json");
        let file = file.to_str().unwrap();
        let settings = Settings::default();

        let mut out: Vec<u8> = Vec::new();
        perform(&args("add", None, Some(ITEM), file), &settings, &mut out).unwrap();
        assert!(out.is_empty());

        perform(&args("list", None, None, file), &settings, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("[{}]", ITEM));
    }

    #[test]
    fn perform_writes_notes_to_output() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("users.json");
        let file = file.to_str().unwrap();
        let settings = Settings::default();

        perform(&args("add", None, Some(ITEM), file), &settings, &mut Vec::<u8>::new()).unwrap();

        let mut out: Vec<u8> = Vec::new();
        let outcome = perform(&args("add", None, Some(ITEM), file), &settings, &mut out).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(out, b"Item with id 1 already exists");

        let mut out: Vec<u8> = Vec::new();
        perform(&args("remove", Some("2"), None, file), &settings, &mut out).unwrap();
        assert_eq!(out, b"Item with id 2 not found");
    }

    #[test]
    fn validation_failure_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("users.json");

        let err = perform(
            &args("remove", None, None, file.to_str().unwrap()),
            &Settings::default(),
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();

        assert!(matches!(err, UserFileError::MissingId));
        assert!(!file.exists());
    }

    #[test]
    fn remove_honours_configured_order() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("users.json");
        fs::write(
            &file,
            r#"[{"id":"1","email":"a","age":1},{"id":"2","email":"b","age":2},{"id":"3","email":"c","age":3}]"#,
        )
        .unwrap();
        let settings = Settings {
            removal_order: RemovalOrder::Stable,
            ..Settings::default()
        };

        perform(
            &args("remove", Some("1"), None, file.to_str().unwrap()),
            &settings,
            &mut Vec::<u8>::new(),
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            r#"[{"id":"2","email":"b","age":2},{"id":"3","email":"c","age":3}]"#
        );
    }

    #[test]
    fn corrupt_file_surfaces_parse_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("users.json");
        fs::write(&file, "not json").unwrap();

        let err = perform(
            &args("findById", Some("1"), None, file.to_str().unwrap()),
            &Settings::default(),
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(matches!(err, UserFileError::Parse(_)));
    }
}
