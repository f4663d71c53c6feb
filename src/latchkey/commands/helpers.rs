use crate::error::{LatchkeyError, Result};
use crate::model::Account;
use crate::store::{KeyValueStore, CURRENT_USER_KEY, USERS_KEY};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Decode the JSON value under `key`. Absent keys are `None`; undecodable
/// values are [`LatchkeyError::StorageCorrupted`].
pub fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| LatchkeyError::StorageCorrupted {
            key: key.to_string(),
            source: source.into(),
        })
}

/// Load the whole account directory, in insertion order.
pub fn load_accounts<S: KeyValueStore>(store: &S) -> Result<Vec<Account>> {
    let accounts: Vec<Account> = load_json(store, USERS_KEY)?.unwrap_or_default();
    debug!(count = accounts.len(), "loaded account directory");
    Ok(accounts)
}

/// Overwrite the whole account directory.
pub fn save_accounts<S: KeyValueStore>(store: &mut S, accounts: &[Account]) -> Result<()> {
    let content = serde_json::to_string(accounts).map_err(LatchkeyError::Serialization)?;
    store.set(USERS_KEY, &content)?;
    debug!(count = accounts.len(), "saved account directory");
    Ok(())
}

pub fn load_session<S: KeyValueStore>(store: &S) -> Result<Option<Account>> {
    load_json(store, CURRENT_USER_KEY)
}

pub fn save_session<S: KeyValueStore>(store: &mut S, account: &Account) -> Result<()> {
    let content = serde_json::to_string(account).map_err(LatchkeyError::Serialization)?;
    store.set(CURRENT_USER_KEY, &content)
}

pub fn clear_session<S: KeyValueStore>(store: &mut S) -> Result<()> {
    store.remove(CURRENT_USER_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    #[test]
    fn missing_directory_is_empty() {
        let store = MemoryStore::new();
        assert!(load_accounts(&store).unwrap().is_empty());
        assert!(load_session(&store).unwrap().is_none());
    }

    #[test]
    fn directory_preserves_order() {
        let mut store = MemoryStore::new();
        let accounts = vec![
            Account::new("b@x.com".into(), "pw".into(), "t1".into()),
            Account::new("a@x.com".into(), "pw".into(), "t2".into()),
        ];
        save_accounts(&mut store, &accounts).unwrap();

        let loaded = load_accounts(&store).unwrap();
        assert_eq!(loaded, accounts);
    }

    #[test]
    fn corrupted_directory_is_reported_with_key() {
        let mut store = MemoryStore::new();
        store.set(USERS_KEY, "[{\"email\":").unwrap();

        match load_accounts(&store) {
            Err(LatchkeyError::StorageCorrupted { key, .. }) => assert_eq!(key, USERS_KEY),
            other => panic!("Expected StorageCorrupted, got {:?}", other),
        }
    }

    #[test]
    fn corrupted_session_is_reported_with_key() {
        let mut store = MemoryStore::new();
        store.set(CURRENT_USER_KEY, "null-ish").unwrap();

        assert!(matches!(
            load_session(&store),
            Err(LatchkeyError::StorageCorrupted { ref key, .. }) if key == CURRENT_USER_KEY
        ));
    }

    #[test]
    fn session_roundtrip_and_clear() {
        let mut store = MemoryStore::new();
        let account = Account::new("a@x.com".into(), "pw".into(), "t".into());

        save_session(&mut store, &account).unwrap();
        assert_eq!(load_session(&store).unwrap(), Some(account));

        clear_session(&mut store).unwrap();
        assert!(load_session(&store).unwrap().is_none());
    }
}
