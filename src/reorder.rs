//! Index-based reordering of projects and systems.

use thiserror::Error;

/// Reordering was asked to touch a position the list does not have.
#[derive(Debug, Clone, Copy, Error)]
pub enum ReorderError {
    #[error("index {index} is out of range for a list of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Move the element at `from` so it ends up at `to`.
///
/// `to` addresses a position of the original list: remaining elements close
/// ranks around the removed one before it is reinserted, so moving the head of
/// `[A, B, C]` to index 2 yields `[B, C, A]`. `from == to` is accepted and
/// leaves the list untouched. Out-of-range indices are reported instead of
/// being ignored so callers can surface a real drag-and-drop bug.
pub fn move_within_list<T>(list: &mut Vec<T>, from: usize, to: usize) -> Result<(), ReorderError> {
    let len = list.len();
    if from >= len {
        return Err(ReorderError::OutOfRange { index: from, len });
    }
    if to >= len {
        return Err(ReorderError::OutOfRange { index: to, len });
    }
    if from == to {
        return Ok(());
    }

    let item = list.remove(from);
    list.insert(to, item);
    Ok(())
}

/// Bookkeeping for an in-flight drag gesture.
///
/// The state machine is deliberately tiny: idle, or holding the index a drag
/// started from. Dropping hands back the move to apply (if any) and returns
/// to idle; pointer geometry stays with the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Grabbed {
        from: usize,
    },
}

impl DragState {
    /// Start a drag from the given index.
    pub fn grab(&mut self, from: usize) {
        *self = DragState::Grabbed { from };
    }

    /// Finish the drag over `to`.
    ///
    /// Returns the `(from, to)` move to apply, or `None` when nothing was
    /// grabbed or the element was dropped where it started.
    pub fn drop_on(&mut self, to: usize) -> Option<(usize, usize)> {
        match std::mem::take(self) {
            DragState::Grabbed { from } if from != to => Some((from, to)),
            _ => None,
        }
    }

    /// Abandon the drag without moving anything.
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Grabbed { .. })
    }
}
