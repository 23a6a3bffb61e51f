use std::{collections::VecDeque, num::NonZeroUsize};

use tracing::{debug, info, warn};

use crate::traits::{
    command::Command,
    history::{History, Step},
};

/// Undo/redo history over two stacks.
///
/// The front of each deque is the top of its stack. A command only moves between the
/// stacks after its `apply`/`reverse` succeeded, so a failing command is left where it
/// was and the history stays consistent.
pub struct CommandHistory<C: Command> {
    undo: VecDeque<C>,
    redo: VecDeque<C>,
    history_limit: Option<NonZeroUsize>,
}

impl<C: Command> CommandHistory<C> {
    /// An empty, unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            history_limit: None,
        }
    }

    /// An empty history that keeps at most `history_limit` commands per stack,
    /// discarding the oldest ones first.
    #[must_use]
    pub fn with_history_limit(history_limit: NonZeroUsize) -> Self {
        Self {
            undo: VecDeque::with_capacity(history_limit.get()),
            redo: VecDeque::with_capacity(history_limit.get()),
            history_limit: Some(history_limit),
        }
    }

    /// Applied commands, most recent first.
    #[must_use]
    pub fn undo_history(&self) -> Option<Vec<&C>> {
        if self.undo.is_empty() {
            None
        } else {
            Some(self.undo.iter().collect())
        }
    }

    /// Undone commands, most recently undone first.
    #[must_use]
    pub fn redo_history(&self) -> Option<Vec<&C>> {
        if self.redo.is_empty() {
            None
        } else {
            Some(self.redo.iter().collect())
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn push_undo(&mut self, command: C) {
        Self::push_bounded(&mut self.undo, command, self.history_limit);
    }

    fn push_redo(&mut self, command: C) {
        Self::push_bounded(&mut self.redo, command, self.history_limit);
    }

    fn push_bounded(stack: &mut VecDeque<C>, command: C, limit: Option<NonZeroUsize>) {
        if let Some(limit) = limit {
            while stack.len() >= limit.get() {
                stack.pop_back();
            }
        }

        stack.push_front(command);
    }
}

impl<C: Command> Default for CommandHistory<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> History<C> for CommandHistory<C> {
    fn execute(&mut self, command: C, ctx: &mut C::Context) -> Result<(), C::Error> {
        command.apply(ctx)?;
        debug!(command = %command.description(), "executed");

        self.push_undo(command);
        self.redo.clear();
        Ok(())
    }

    fn undo(&mut self, ctx: &mut C::Context) -> Result<Step, C::Error> {
        let Some(command) = self.undo.front() else {
            info!("nothing to undo");
            return Ok(Step::NothingToUndo);
        };

        if let Err(err) = command.reverse(ctx) {
            warn!(command = %command.description(), "undo failed, command kept on undo stack");
            return Err(err);
        }
        debug!(command = %command.description(), "undone");

        if let Some(command) = self.undo.pop_front() {
            self.push_redo(command);
        }
        Ok(Step::Undone)
    }

    fn redo(&mut self, ctx: &mut C::Context) -> Result<Step, C::Error> {
        let Some(command) = self.redo.front() else {
            info!("nothing to redo");
            return Ok(Step::NothingToRedo);
        };

        if let Err(err) = command.reapply(ctx) {
            warn!(command = %command.description(), "redo failed, command kept on redo stack");
            return Err(err);
        }
        debug!(command = %command.description(), "redone");

        if let Some(command) = self.redo.pop_front() {
            self.push_undo(command);
        }
        Ok(Step::Redone)
    }

    fn set_history_limit(&mut self, limit: NonZeroUsize) {
        self.history_limit = Some(limit);

        self.undo.truncate(limit.get());
        self.redo.truncate(limit.get());
    }
}
