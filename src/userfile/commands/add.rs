use crate::commands::Outcome;
use crate::error::Result;
use crate::model::{decode_user, decode_users, encode_users};
use crate::store::Storage;
use tracing::debug;

pub fn run<S: Storage>(store: &mut S, item: &str) -> Result<Outcome> {
    let user = decode_user(item.as_bytes())?;
    let mut users = decode_users(&store.read_all()?)?;

    if users.iter().any(|existing| existing.id == user.id) {
        debug!(id = %user.id, "id already present, nothing written");
        return Ok(Outcome::AlreadyExists { id: user.id });
    }

    debug!(id = %user.id, count = users.len() + 1, "appending user");
    users.push(user);
    store.overwrite(&encode_users(&users)?)?;

    Ok(Outcome::Written)
}
