//! The content contract for pages managed by a [`Selector`](crate::selector::Selector).
//!
//! A page needs only a name and a way to draw itself. Reacting to being shown
//! or hidden is an optional capability: a page that wants it returns a
//! [`PageLifecycle`] from [`Page::lifecycle`].

use ratatui::layout::Rect;
use ratatui::Frame;

/// Failure reported by a page lifecycle hook.
///
/// The selector logs these and carries on; they never reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    /// The hook could not complete.
    #[error("{0}")]
    Failed(String),
}

impl HookError {
    /// Build a [`HookError::Failed`] from any displayable value.
    pub fn msg(message: impl std::fmt::Display) -> Self {
        HookError::Failed(message.to_string())
    }
}

/// Optional hooks run when a page becomes, or stops being, the active page.
///
/// Both default to doing nothing, so a page can implement just one.
pub trait PageLifecycle {
    /// Called after the page has been made visible.
    fn on_activate(&mut self) -> Result<(), HookError> {
        Ok(())
    }

    /// Called before another page takes over, or when no page remains
    /// selected.
    fn on_deactivate(&mut self) -> Result<(), HookError> {
        Ok(())
    }
}

/// A child page placed into a selector.
pub trait Page: Send + 'static {
    /// Space-separated name tokens the page registers under. An empty or
    /// whitespace-only name registers nothing.
    fn name(&self) -> &str {
        ""
    }

    /// Draw the page. Only the active page is asked to render.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// The lifecycle hook capability, if this page has one.
    fn lifecycle(&mut self) -> Option<&mut dyn PageLifecycle> {
        None
    }
}

impl Page for Box<dyn Page> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        (**self).view(frame, area)
    }

    fn lifecycle(&mut self) -> Option<&mut dyn PageLifecycle> {
        (**self).lifecycle()
    }
}
