//! Widgets for the **soso** framework.
//!
//! Every widget implements [`soso_core::Component`], so it can be embedded in
//! any [`soso_core::Model`] and placed freely within [`ratatui`] layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`selector`] | Shows one of several pages, chosen by name |
//! | [`page`] | What a page must provide, plus optional activation hooks |
//! | [`slot`] | Mounted pages in document order, with their visibility |
//! | [`registry`] | Name-token registry and page resolution |

pub mod page;
pub mod registry;
pub mod selector;
pub mod slot;

pub use page::{HookError, Page, PageLifecycle};
pub use selector::{Selector, SelectorConfig, SelectorState};
pub use slot::{PageId, Visibility};
