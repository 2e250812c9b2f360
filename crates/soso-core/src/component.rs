use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) with one difference: its
/// [`view`](Component::view) receives the `area` it may draw into, so a parent
/// decides where each child renders.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// lift returned commands with [`Command::map`]:
///
/// ```rust,ignore
/// use soso_core::{Command, Component, Model};
/// use soso_widgets::selector::{self, Selector};
///
/// struct App { pages: Selector<Box<dyn Page>> }
///
/// enum AppMsg { Pages(selector::Message) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Pages(m) => self.pages.update(m).map(AppMsg::Pages),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.pages.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// Messages the component emits for its parent (notifications) travel in
    /// the returned command; the parent maps them into its own message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent collects these and includes them, mapped, in its own
    /// [`Model::subscriptions`](crate::Model::subscriptions).
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
