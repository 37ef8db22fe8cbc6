use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("This conversion is already in history")]
    DuplicateEntry,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
