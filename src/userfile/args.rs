use clap::Parser;
use std::path::PathBuf;
use userfile::validate::Arguments;

const OPERATION_HELP: &str = "Type of operation on the received item. Allowed values:
  add: add new item in file
  list: return the list of items in file
  findById: return item from list by id
  remove: delete item from list by id";

// Flags are all optional here; presence and consistency are checked by
// `userfile::validate` so its errors are the ones reported.
#[derive(Parser, Debug)]
#[command(name = "userfile", version)]
#[command(about = "Manage a list of users stored as a JSON array in a file", long_about = None)]
pub struct Cli {
    #[arg(long, help = OPERATION_HELP)]
    pub operation: Option<String>,

    /// Id of the item in file. Use only with findById and remove
    #[arg(long)]
    pub id: Option<String>,

    /// JSON object describing a user by id, email and age fields
    #[arg(long)]
    pub item: Option<String>,

    /// File holding the list of users. Only .json allowed
    #[arg(long = "fileName", value_name = "FILE")]
    pub file_name: Option<String>,

    /// Settings file (defaults to the platform config dir)
    #[arg(long, env = "USERFILE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose output on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn arguments(&self) -> Arguments {
        Arguments {
            operation: self.operation.clone(),
            id: self.id.clone(),
            item: self.item.clone(),
            file_name: self.file_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_file_name() {
        let cli = Cli::try_parse_from([
            "userfile",
            "--operation",
            "findById",
            "--id",
            "1",
            "--fileName",
            "users.json",
        ])
        .unwrap();

        let args = cli.arguments();
        assert_eq!(args.operation.as_deref(), Some("findById"));
        assert_eq!(args.id.as_deref(), Some("1"));
        assert_eq!(args.item, None);
        assert_eq!(args.file_name.as_deref(), Some("users.json"));
    }

    #[test]
    fn all_flags_are_optional_to_clap() {
        let cli = Cli::try_parse_from(["userfile"]).unwrap();
        assert_eq!(cli.arguments(), Arguments::default());
    }

    #[test]
    fn item_keeps_json_verbatim() {
        let item = r#"{"id":"1","email":"a@x.com","age":30}"#;
        let cli = Cli::try_parse_from(["userfile", "--item", item]).unwrap();
        assert_eq!(cli.arguments().item.as_deref(), Some(item));
    }
}
