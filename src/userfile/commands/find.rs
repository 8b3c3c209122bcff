use crate::commands::Outcome;
use crate::error::Result;
use crate::model::{decode_users, encode_user};
use crate::store::Storage;

pub fn run<S: Storage>(store: &mut S, id: &str) -> Result<Outcome> {
    let users = decode_users(&store.read_all()?)?;

    match users.iter().find(|user| user.id == id) {
        Some(user) => Ok(Outcome::Data(encode_user(user)?)),
        None => Ok(Outcome::NoMatch),
    }
}
