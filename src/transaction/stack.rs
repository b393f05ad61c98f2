// TransactionStack - Ordered undo/redo history with a cursor

use crate::transaction::trait_def::{Transaction, TransactionError, TransactionResult};

/// Ordered history of reversible transactions
///
/// A single sequence plus a cursor replaces the usual pair of undo/redo stacks:
/// - Transactions before the cursor have been performed
/// - Transactions at or after the cursor have been undone (or never run)
///
/// Pushing a new transaction drops everything from the cursor onward, so a
/// new edit always invalidates the pending redo branch.
pub struct TransactionStack<S> {
    transactions: Vec<Box<dyn Transaction<S>>>,
    position: usize,
}

impl<S> TransactionStack<S> {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            position: 0,
        }
    }

    /// Perform a transaction and record it
    ///
    /// This will:
    /// 1. Discard any redoable transactions
    /// 2. Perform the transaction against `state`
    /// 3. Append it and advance the cursor (if successful)
    ///
    /// # Errors
    /// Returns the error from `perform`; the transaction is not recorded.
    pub fn push(
        &mut self,
        mut transaction: Box<dyn Transaction<S>>,
        state: &mut S,
    ) -> TransactionResult<()> {
        if self.position < self.transactions.len() {
            log::debug!(
                "Discarding {} redoable transaction(s)",
                self.transactions.len() - self.position
            );
            self.transactions.truncate(self.position);
        }

        transaction.perform(state)?;
        log::debug!("Performed: {}", transaction.description());

        self.transactions.push(transaction);
        self.position += 1;
        Ok(())
    }

    /// Reverse the most recently performed transaction
    ///
    /// Returns its description on success.
    ///
    /// # Errors
    /// `NothingToUndo` when the cursor is at the start, or the error from
    /// `reverse`. The cursor only moves once the reversal succeeded.
    pub fn undo(&mut self, state: &mut S) -> TransactionResult<String> {
        if !self.can_undo() {
            return Err(TransactionError::NothingToUndo);
        }

        let transaction = &mut self.transactions[self.position - 1];
        transaction.reverse(state)?;
        self.position -= 1;

        let description = transaction.description();
        log::debug!("Undid: {}", description);
        Ok(description)
    }

    /// Perform again the most recently undone transaction
    ///
    /// # Errors
    /// `NothingToRedo` when the cursor is at the end, or the error from
    /// `perform`. The cursor only moves once the transaction succeeded.
    pub fn redo(&mut self, state: &mut S) -> TransactionResult<String> {
        if !self.can_redo() {
            return Err(TransactionError::NothingToRedo);
        }

        let transaction = &mut self.transactions[self.position];
        transaction.perform(state)?;
        self.position += 1;

        let description = transaction.description();
        log::debug!("Redid: {}", description);
        Ok(description)
    }

    /// Check if there are transactions that can be undone
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    /// Check if there are transactions that can be redone
    pub fn can_redo(&self) -> bool {
        self.position < self.transactions.len()
    }

    /// Description of the transaction `undo` would reverse
    pub fn undo_description(&self) -> Option<String> {
        self.position
            .checked_sub(1)
            .map(|index| self.transactions[index].description())
    }

    /// Description of the transaction `redo` would perform
    pub fn redo_description(&self) -> Option<String> {
        self.transactions
            .get(self.position)
            .map(|transaction| transaction.description())
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.position = 0;
    }

    /// Cursor position (number of performed transactions)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of recorded transactions, performed or undone
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl<S> Default for TransactionStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for TransactionStack<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStack")
            .field("len", &self.transactions.len())
            .field("position", &self.position)
            .finish()
    }
}
