use std::num::NonZeroUsize;

use super::command::Command;

/// What an undo or redo call actually did.
///
/// An empty stack is not an error: it is reported as one of the `Nothing*` variants
/// so callers can tell it apart from a command that failed.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Undone,
    Redone,
    NothingToUndo,
    NothingToRedo,
}

impl Step {
    /// `true` when the call left both stacks untouched because there was nothing to move.
    #[must_use]
    pub fn is_noop(self) -> bool {
        matches!(self, Step::NothingToUndo | Step::NothingToRedo)
    }
}

pub trait History<C: Command> {
    /// Applies `command` and records it. Clears everything that could have been redone.
    ///
    /// # Errors
    ///
    /// Propagates the command's failure; nothing is recorded in that case.
    fn execute(&mut self, command: C, ctx: &mut C::Context) -> Result<(), C::Error>;

    /// Reverses the most recently applied command.
    ///
    /// # Errors
    ///
    /// Propagates the command's failure; the command stays on the undo stack.
    fn undo(&mut self, ctx: &mut C::Context) -> Result<Step, C::Error>;

    /// Reapplies the most recently undone command.
    ///
    /// # Errors
    ///
    /// Propagates the command's failure; the command stays on the redo stack.
    fn redo(&mut self, ctx: &mut C::Context) -> Result<Step, C::Error>;

    fn set_history_limit(&mut self, limit: NonZeroUsize);

    /// Builds and executes one command per builder, in order, stopping at the first failure.
    ///
    /// Each builder sees the context after the previous command ran, so commands that
    /// snapshot state (moves, recolors) capture what they will actually overwrite.
    ///
    /// # Errors
    ///
    /// Returns the first failure. Commands executed before it stay recorded.
    fn batch_execute<I, F>(&mut self, builders: I, ctx: &mut C::Context) -> Result<(), C::Error>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(&C::Context) -> C,
    {
        for build in builders {
            let command = build(&*ctx);
            self.execute(command, ctx)?;
        }

        Ok(())
    }
}
