//! **soso** -- a page selector widget and the terminal runtime it renders in.
//!
//! Umbrella crate over [`soso_core`] and [`soso_widgets`]:
//!
//! ```toml
//! [dependencies]
//! soso = "0.1"
//! ```
//!
//! * Everything in [`soso_core`] is available at the crate root ([`Model`],
//!   [`Component`], [`Command`], [`Program`], [`run`], ...).
//! * [`widgets`] re-exports [`soso_widgets`].
//! * [`ratatui`], [`crossterm`], [`tokio`] and [`tracing`] are re-exported so
//!   applications need no direct dependency on them.
//!
//! # Quick start
//!
//! ```ignore
//! use soso::widgets::{selector, Page, Selector};
//! use soso::{Command, Component, Model};
//!
//! struct App { pages: Selector<Box<dyn Page>> }
//!
//! enum Msg { Pages(selector::Message) }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let pages = Selector::new().with_pages(my_pages());
//!         (App { pages }, Command::message(Msg::Pages(selector::Message::SlotChanged)))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Pages(m) => self.pages.update(m).map(Msg::Pages),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut soso::ratatui::Frame) {
//!         self.pages.view(frame, frame.area());
//!     }
//! }
//! ```

pub use soso_core::*;
pub mod widgets {
    pub use soso_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
pub use tracing;
