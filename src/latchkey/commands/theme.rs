use crate::error::{LatchkeyError, Result};
use crate::model::Theme;
use crate::store::{KeyValueStore, THEME_KEY};
use tracing::{info, warn};

/// Read the stored theme, falling back to `default` when none is stored or
/// the stored value is not a theme.
pub fn load<S: KeyValueStore>(store: &S, default: Theme) -> Result<Theme> {
    let raw = match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(default),
        Err(LatchkeyError::StorageCorrupted { source, .. }) => {
            warn!(error = %source, fallback = %default, "ignoring undecodable theme");
            return Ok(default);
        }
        Err(e) => return Err(e),
    };
    match raw.trim().parse() {
        Ok(theme) => Ok(theme),
        Err(_) => {
            warn!(value = %raw, fallback = %default, "ignoring unrecognised theme");
            Ok(default)
        }
    }
}

pub fn save<S: KeyValueStore>(store: &mut S, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())?;
    info!(%theme, "theme set");
    Ok(())
}

/// Flip the stored theme and return the new one.
pub fn toggle<S: KeyValueStore>(store: &mut S, default: Theme) -> Result<Theme> {
    let next = load(store, default)?.toggled();
    save(store, next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::MemoryStore;

    #[test]
    fn defaults_when_unset() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, Theme::Light).unwrap(), Theme::Light);
        assert_eq!(load(&store, Theme::Dark).unwrap(), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = MemoryStore::new();
        assert_eq!(toggle(&mut store, Theme::Light).unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(toggle(&mut store, Theme::Light).unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn stored_value_wins_over_default() {
        let mut store = MemoryStore::new();
        save(&mut store, Theme::Dark).unwrap();
        assert_eq!(load(&store, Theme::Light).unwrap(), Theme::Dark);
    }

    #[test]
    fn unrecognised_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(load(&store, Theme::Light).unwrap(), Theme::Light);
        assert_eq!(toggle(&mut store, Theme::Light).unwrap(), Theme::Dark);
    }

    #[test]
    fn undecodable_bytes_fall_back() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        std::fs::write(temp.path().join(THEME_KEY), [0xff, 0xfe]).unwrap();

        assert_eq!(load(&store, Theme::Dark).unwrap(), Theme::Dark);
        assert_eq!(toggle(&mut store, Theme::Dark).unwrap(), Theme::Light);
    }
}
