use crate::commands::Outcome;
use crate::error::Result;
use crate::model::{decode_users, encode_users};
use crate::store::Storage;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the remaining users are arranged after a removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalOrder {
    /// The last user moves into the removed slot. Matches files written by
    /// earlier versions of the tool.
    #[default]
    SwapLast,
    /// Remaining users keep their relative order.
    Stable,
}

pub fn run<S: Storage>(store: &mut S, id: &str, order: RemovalOrder) -> Result<Outcome> {
    let bytes = store.read_all()?;
    if bytes.is_empty() {
        return Ok(Outcome::NotFound { id: id.to_string() });
    }

    let mut users = decode_users(&bytes)?;
    let Some(position) = users.iter().position(|user| user.id == id) else {
        return Ok(Outcome::NotFound { id: id.to_string() });
    };

    match order {
        RemovalOrder::SwapLast => users.swap_remove(position),
        RemovalOrder::Stable => users.remove(position),
    };
    debug!(id, position, remaining = users.len(), ?order, "removed user");

    store.overwrite(&encode_users(&users)?)?;
    Ok(Outcome::Written)
}
