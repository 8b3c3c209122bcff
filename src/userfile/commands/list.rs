use crate::commands::Outcome;
use crate::error::Result;
use crate::store::Storage;

/// Returns the stored bytes as they are, without reformatting.
pub fn run<S: Storage>(store: &mut S) -> Result<Outcome> {
    Ok(Outcome::Data(store.read_all()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{decode_users, encode_users};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store).unwrap(), Outcome::Data(Vec::new()));
    }

    #[test]
    fn passes_bytes_through_unchanged() {
        let pretty = "[\n  {\"id\": \"1\", \"email\": \"a@x.com\", \"age\": 30}\n]\n";
        let mut store = InMemoryStore::with_contents(pretty);

        assert_eq!(run(&mut store).unwrap().render(), pretty.as_bytes());
    }

    #[test]
    fn listing_decodes_back_to_the_same_users() {
        let mut store = StoreFixture::new().with_users(3).build();
        let listed = run(&mut store).unwrap().render();

        let users = decode_users(&listed).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(encode_users(&users).unwrap(), store.contents());
    }
}
