use super::{KeyValueStore, StorageError, THEME_KEY};
use crate::models::Theme;

/// Read the stored theme; missing or unknown values mean dark
pub fn load_theme<S: KeyValueStore>(store: &S) -> Result<Theme, StorageError> {
    let stored = store.get(THEME_KEY)?;
    Ok(Theme::from_stored(stored.as_deref()))
}

pub fn save_theme<S: KeyValueStore>(store: &mut S, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}
