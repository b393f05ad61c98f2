// Transaction trait definition

use crate::model::{PlaylistError, PlaylistId};

/// Result type for transaction operations
pub type TransactionResult<T> = Result<T, TransactionError>;

/// Errors that can occur while performing, reversing or replaying transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("Unknown playlist: {0}")]
    UnknownPlaylist(PlaylistId),

    #[error(transparent)]
    Playlist(#[from] PlaylistError),
}

/// A reversible unit of state mutation
///
/// Implementors capture, at construction time, everything they need to undo
/// themselves exactly: `reverse` after `perform` must leave `state` equal to
/// what it was before. The stack guarantees `perform` and `reverse` alternate,
/// starting with `perform`.
///
/// # Example
/// ```
/// use playlister::transaction::{Transaction, TransactionResult};
///
/// struct AddOne;
///
/// impl Transaction<i32> for AddOne {
///     fn perform(&mut self, state: &mut i32) -> TransactionResult<()> {
///         *state += 1;
///         Ok(())
///     }
///
///     fn reverse(&mut self, state: &mut i32) -> TransactionResult<()> {
///         *state -= 1;
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         "Add one".to_string()
///     }
/// }
/// ```
pub trait Transaction<S>: Send {
    /// Apply the change to `state`
    fn perform(&mut self, state: &mut S) -> TransactionResult<()>;

    /// Revert the change made by `perform`
    fn reverse(&mut self, state: &mut S) -> TransactionResult<()>;

    /// Human-readable label (e.g. "Remove Song 3")
    fn description(&self) -> String;
}
