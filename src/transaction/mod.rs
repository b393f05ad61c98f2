// Transaction Processing System - Undo/redo for playlist edits
//
// This module implements reversible edits on top of the playlist model.
// Every change to playlist or song data goes through a Transaction.
//
// Architecture:
// - Transaction trait: Defines perform(), reverse(), description()
// - TransactionStack: Ordered history with a cursor between done and undone
// - Concrete transactions: CreateSong, EditSong, RemoveSong, MoveSong and the
//   playlist-level CreatePlaylist, RenamePlaylist, DuplicatePlaylist, DeletePlaylist
//
// Transactions capture copies of whatever they need to reverse themselves
// when they are constructed, never live references.

pub mod stack;
pub mod trait_def;
pub mod transactions;

pub use stack::TransactionStack;
pub use trait_def::{Transaction, TransactionError, TransactionResult};
pub use transactions::{
    CreatePlaylist, CreateSong, DeletePlaylist, DuplicatePlaylist, EditSong, MoveSong,
    RemoveSong, RenamePlaylist,
};
