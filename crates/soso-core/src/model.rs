use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait.
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`].
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Events arrive as messages through [`Subscription`]s, commands, or a
///    [`ProgramHandle`](crate::ProgramHandle).
/// 4. [`update`](Model::update) processes each message to completion and
///    returns a [`Command`] for further work.
/// 5. Steps 2--4 repeat until a [`Command::quit`] is returned.
///
/// Every update runs synchronously on the event loop; the model is never
/// touched from two places at once.
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when none is
    /// needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// After `update` returns, the runtime re-renders and reconciles
    /// [`subscriptions`](Model::subscriptions).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions.  Called after every update.
    ///
    /// The runtime diffs the returned list against the active set by
    /// [`SubscriptionId`](crate::SubscriptionId): new ones are started and
    /// missing ones are cancelled.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
