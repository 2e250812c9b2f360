//! Page selector: shows exactly one of its pages, chosen by name.
//!
//! The selector owns a [`Slot`] of pages and a [`PageRegistry`] mapping name
//! tokens to them. After every registry refresh and every change to the
//! `selected` or `default` key it runs a resolve-and-update pass:
//!
//! 1. resolve the target page (`selected`, else `default`, else none);
//! 2. if the target changed, run the outgoing page's `on_deactivate`;
//! 3. mark the target [`Visibility::Active`] and every other page hidden;
//! 4. make the target current;
//! 5. if the target changed, run its `on_activate`;
//! 6. if a page is current, emit [`Message::NodeSelected`].
//!
//! Hook failures are logged and never interrupt the pass.
//!
//! Structural changes ([`push`](Selector::push), [`remove`](Selector::remove),
//! ...) are delivered with [`refresh_registry`](Selector::refresh_registry) or
//! [`Message::SlotChanged`]. A pass that finds an undelivered change re-scans
//! first, so resolution never reads a stale registry.

use crate::page::Page;
use crate::registry::PageRegistry;
use crate::slot::{PageId, Slot, Visibility};
use ratatui::layout::Rect;
use ratatui::Frame;
use soso_core::command::Command;
use soso_core::component::Component;

/// Fallback page key when none is configured.
pub const DEFAULT_PAGE: &str = "home";

/// Messages for the selector component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Set the selected key. No-op if it is already selected.
    Select(String),
    /// Set the selected key and run a pass even if it is unchanged.
    ForceSelect(String),
    /// Unset the selected key, falling back to the default.
    ClearSelected,
    /// Change the default key.
    SetDefault(String),
    /// The set of mounted pages changed.
    SlotChanged,
    /// Emitted after a pass that left a page active. Does not bubble: the
    /// parent sees it only through the mapped command.
    NodeSelected(PageId),
}

/// Which page, if any, is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// No page resolves; every page is hidden.
    NoSelection,
    /// The given page is shown.
    Active(PageId),
}

/// Keys a [`Selector`] starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Key used when `selected` is unset or unknown.
    pub default: String,
    /// Initially requested key.
    pub selected: Option<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_PAGE.to_string(),
            selected: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Hook {
    Activate,
    Deactivate,
}

/// A container that keeps one page active at a time.
///
/// The selector draws no chrome of its own: the active page gets the whole
/// area. Hidden pages stay mounted and keep their state.
pub struct Selector<P: Page> {
    slot: Slot<P>,
    registry: PageRegistry,
    selected: Option<String>,
    default: String,
    current: Option<PageId>,
}

impl<P: Page> Default for Selector<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> Selector<P> {
    /// Create an empty selector with the `"home"` default.
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Create an empty selector from `config`.
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            slot: Slot::new(),
            registry: PageRegistry::new(),
            selected: config.selected,
            default: config.default,
            current: None,
        }
    }

    /// Set the default key.
    pub fn with_default(mut self, key: impl Into<String>) -> Self {
        self.default = key.into();
        self
    }

    /// Set the initially selected key.
    pub fn with_selected(mut self, key: impl Into<String>) -> Self {
        self.selected = Some(key.into());
        self
    }

    /// Mount `pages` in order. Nothing is active until the first
    /// [`refresh_registry`](Selector::refresh_registry).
    pub fn with_pages(mut self, pages: impl IntoIterator<Item = P>) -> Self {
        for page in pages {
            self.slot.push(page);
        }
        self
    }

    // --- keys -----------------------------------------------------------

    /// The requested key, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The key resolved when `selected` is unset or unknown.
    pub fn default_key(&self) -> &str {
        &self.default
    }

    /// Request the page registered under `key`. Unknown keys fall back to the
    /// default. Re-selecting the current key does nothing.
    pub fn set_selected(&mut self, key: impl Into<String>) -> Command<Message> {
        let key = key.into();
        if self.selected.as_deref() == Some(key.as_str()) {
            return Command::none();
        }
        self.selected = Some(key);
        self.update_pages()
    }

    /// Like [`set_selected`](Selector::set_selected), but always runs a pass.
    pub fn force_selected(&mut self, key: impl Into<String>) -> Command<Message> {
        self.selected = Some(key.into());
        self.update_pages()
    }

    /// Drop the selected key so only the default is resolved.
    pub fn clear_selected(&mut self) -> Command<Message> {
        if self.selected.take().is_none() {
            return Command::none();
        }
        self.update_pages()
    }

    /// Change the default key. Setting the current default does nothing.
    pub fn set_default(&mut self, key: impl Into<String>) -> Command<Message> {
        let key = key.into();
        if self.default == key {
            return Command::none();
        }
        self.default = key;
        self.update_pages()
    }

    // --- structure ------------------------------------------------------

    /// Mount `page` after the existing pages.
    pub fn push(&mut self, page: P) -> PageId {
        self.slot.push(page)
    }

    /// Mount `page` before position `index` (clamped to the end).
    pub fn insert(&mut self, index: usize, page: P) -> PageId {
        self.slot.insert(index, page)
    }

    /// Unmount the page with `id` and hand it back.
    ///
    /// If it was the current page its `on_deactivate` runs first and the
    /// selector drops to no selection until the next pass.
    pub fn remove(&mut self, id: PageId) -> Option<P> {
        if self.current == Some(id) {
            self.release_current();
        }
        self.slot.remove(id)
    }

    /// Unmount every page, deactivating the current one.
    pub fn clear(&mut self) -> Vec<P> {
        self.release_current();
        self.slot.drain()
    }

    /// Handle a slot change: re-scan mounted pages into the registry and run
    /// a resolve-and-update pass.
    pub fn refresh_registry(&mut self) -> Command<Message> {
        self.slot.take_changed();
        self.registry
            .rebuild(self.slot.iter().map(|(id, page)| (id, page.name())));
        tracing::debug!(
            pages = self.registry.len(),
            tokens = self.registry.tokens().count(),
            "page registry rebuilt"
        );
        self.apply()
    }

    // --- state ----------------------------------------------------------

    /// The active page.
    pub fn current(&self) -> Option<PageId> {
        self.current
    }

    /// The active page as a [`SelectorState`].
    pub fn state(&self) -> SelectorState {
        match self.current {
            Some(id) => SelectorState::Active(id),
            None => SelectorState::NoSelection,
        }
    }

    /// The token map as of the last re-scan.
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// The mounted page with `id`.
    pub fn page(&self, id: PageId) -> Option<&P> {
        self.slot.get(id)
    }

    /// Mutable access to the mounted page with `id`. Renaming a page takes
    /// effect at the next re-scan.
    pub fn page_mut(&mut self, id: PageId) -> Option<&mut P> {
        self.slot.get_mut(id)
    }

    /// The active page itself.
    pub fn current_page(&self) -> Option<&P> {
        self.current.and_then(|id| self.slot.get(id))
    }

    /// Display state of `id`, or `None` if it is not mounted.
    pub fn visibility(&self, id: PageId) -> Option<Visibility> {
        self.slot.visibility(id)
    }

    /// Mounted page ids in document order.
    pub fn page_ids(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slot.ids()
    }

    /// Number of mounted pages.
    pub fn len(&self) -> usize {
        self.slot.len()
    }

    /// Whether no page is mounted.
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    // --- pass -----------------------------------------------------------

    fn update_pages(&mut self) -> Command<Message> {
        if self.slot.is_changed() {
            return self.refresh_registry();
        }
        self.apply()
    }

    fn apply(&mut self) -> Command<Message> {
        let target = self
            .registry
            .resolve(self.selected.as_deref(), &self.default);
        let previous = self.current;
        let changed = target != previous;

        if changed {
            if let Some(prev) = previous {
                self.run_hook(prev, Hook::Deactivate);
            }
        }

        for &id in self.registry.pages() {
            let visibility = if Some(id) == target {
                Visibility::Active
            } else {
                Visibility::Hidden
            };
            self.slot.set_visibility(id, visibility);
        }

        self.current = target;

        match target {
            Some(id) => {
                if changed {
                    tracing::debug!(from = ?previous, to = %id, "page activated");
                    self.run_hook(id, Hook::Activate);
                }
                Command::message(Message::NodeSelected(id))
            }
            None => {
                if changed {
                    tracing::debug!(from = ?previous, "no page selected");
                }
                Command::none()
            }
        }
    }

    fn release_current(&mut self) {
        if let Some(id) = self.current.take() {
            self.run_hook(id, Hook::Deactivate);
            self.slot.set_visibility(id, Visibility::Hidden);
            tracing::debug!(page = %id, "active page unmounted");
        }
    }

    fn run_hook(&mut self, id: PageId, hook: Hook) {
        let Some(hooks) = self.slot.get_mut(id).and_then(|page| page.lifecycle()) else {
            return;
        };
        let result = match hook {
            Hook::Activate => hooks.on_activate(),
            Hook::Deactivate => hooks.on_deactivate(),
        };
        if let Err(err) = result {
            tracing::error!(page = %id, ?hook, error = %err, "page lifecycle hook failed");
        }
    }
}

impl<P: Page> Component for Selector<P> {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Select(key) => self.set_selected(key),
            Message::ForceSelect(key) => self.force_selected(key),
            Message::ClearSelected => self.clear_selected(),
            Message::SetDefault(key) => self.set_default(key),
            Message::SlotChanged => self.refresh_registry(),
            Message::NodeSelected(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if let Some(page) = self.current_page() {
            page.view(frame, area);
        }
    }
}
