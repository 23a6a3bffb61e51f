use std::borrow::Cow;

/// One undoable edit, applied to a context the caller owns.
///
/// A command records what it needs to undo itself when it is built, so `reverse` only
/// replays saved state and never inspects the context to work out what changed. Both
/// directions can fail: the context may refuse the edit (a missing shape, a duplicate),
/// and the command hands that refusal straight back instead of swallowing it.
///
/// `reapply` and `description` have defaults. Override `reapply` when replaying differs
/// from the first application, and `description` to give logs and history listings a
/// readable label.
///
/// ```
/// use shape_history::prelude::Command;
/// use std::convert::Infallible;
///
/// struct Add(i32);
///
/// impl Command for Add {
///     type Context = i32;
///     type Error = Infallible;
///
///     fn apply(&self, ctx: &mut i32) -> Result<(), Infallible> {
///         *ctx += self.0;
///         Ok(())
///     }
///
///     fn reverse(&self, ctx: &mut i32) -> Result<(), Infallible> {
///         *ctx -= self.0;
///         Ok(())
///     }
/// }
///
/// let mut total = 0;
/// let add = Add(3);
/// add.apply(&mut total).unwrap();
/// add.reverse(&mut total).unwrap();
/// assert_eq!(total, 0);
/// assert_eq!(add.description(), "edit");
/// ```
pub trait Command {
    type Context;
    type Error;

    /// Makes the edit.
    ///
    /// # Errors
    ///
    /// The context rejected the edit. Nothing was changed.
    fn apply(&self, ctx: &mut Self::Context) -> Result<(), Self::Error>;

    /// Puts back the state saved at construction.
    ///
    /// # Errors
    ///
    /// The context rejected the restore, usually because something else touched it
    /// since `apply`.
    fn reverse(&self, ctx: &mut Self::Context) -> Result<(), Self::Error>;

    /// Makes the edit again after a `reverse`.
    ///
    /// # Errors
    ///
    /// Same as [`Command::apply`].
    fn reapply(&self, ctx: &mut Self::Context) -> Result<(), Self::Error> {
        self.apply(ctx)
    }

    /// Label used in logs and history listings.
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("edit")
    }
}
