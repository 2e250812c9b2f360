//! # Pages Example
//!
//! A selector with three pages. Each page counts how often it has been shown
//! through its activation hook.
//!
//! Keys: `1`-`3` select a page, `0` clears the selection (back to the default
//! page), `x` unmounts the active page (it comes back two seconds later),
//! `q`/`Esc` quits. Set `SOSO_LOG_FILE` to write `tracing` output to a file.
//!
//! Run with: `cargo run --example pages`

use soso::crossterm::event::{KeyCode, KeyEventKind};
use soso::ratatui::layout::{Constraint, Layout, Rect};
use soso::ratatui::style::{Color, Modifier, Style};
use soso::ratatui::text::{Line, Span};
use soso::ratatui::widgets::{Block, Borders, Paragraph};
use soso::ratatui::Frame;
use soso::widgets::page::{HookError, Page, PageLifecycle};
use soso::widgets::selector::{self, Selector};
use soso::widgets::PageId;
use soso::{terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent};
use std::time::Duration;

const REMOUNT_DELAY: Duration = Duration::from_secs(2);

struct InfoPage {
    name: &'static str,
    title: &'static str,
    body: &'static str,
    visits: u32,
}

impl PageLifecycle for InfoPage {
    fn on_activate(&mut self) -> Result<(), HookError> {
        self.visits += 1;
        Ok(())
    }
}

impl Page for InfoPage {
    fn name(&self) -> &str {
        self.name
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let text = format!("{}\n\nShown {} time(s).", self.body, self.visits);
        let block = Block::default().borders(Borders::ALL).title(self.title);
        frame.render_widget(Paragraph::new(text).block(block), area);
    }

    fn lifecycle(&mut self) -> Option<&mut dyn PageLifecycle> {
        Some(self)
    }
}

struct PagesApp {
    pages: Selector<Box<dyn Page>>,
    last_shown: Option<PageId>,
    unmounted: Vec<Box<dyn Page>>,
}

#[derive(Debug)]
enum Msg {
    Pages(selector::Message),
    RemoveActive,
    Remount,
    Quit,
}

const KEYS: [&str; 3] = ["home", "settings", "about"];

impl Model for PagesApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let pages: Vec<Box<dyn Page>> = vec![
            Box::new(InfoPage {
                name: "home start",
                title: "Home",
                body: "The default page. Selecting an unknown key lands here.",
                visits: 0,
            }),
            Box::new(InfoPage {
                name: "settings prefs",
                title: "Settings",
                body: "Registered under two tokens: `settings` and `prefs`.",
                visits: 0,
            }),
            Box::new(InfoPage {
                name: "about",
                title: "About",
                body: "Hidden pages stay mounted; their counters survive.",
                visits: 0,
            }),
        ];
        let app = PagesApp {
            pages: Selector::new().with_pages(pages),
            last_shown: None,
            unmounted: Vec::new(),
        };
        (app, Command::message(Msg::Pages(selector::Message::SlotChanged)))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Pages(selector::Message::NodeSelected(id)) => {
                self.last_shown = Some(id);
                Command::none()
            }
            Msg::Pages(m) => self.pages.update(m).map(Msg::Pages),
            Msg::RemoveActive => {
                let Some(page) = self.pages.current().and_then(|id| self.pages.remove(id)) else {
                    return Command::none();
                };
                self.unmounted.push(page);
                Command::batch([
                    self.pages.refresh_registry().map(Msg::Pages),
                    Command::perform(tokio::time::sleep(REMOUNT_DELAY), |_| Msg::Remount),
                ])
            }
            Msg::Remount => {
                if self.unmounted.is_empty() {
                    return Command::none();
                }
                self.pages.insert(0, self.unmounted.remove(0));
                self.pages.refresh_registry().map(Msg::Pages)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        let mut spans = Vec::new();
        for (i, key) in KEYS.iter().enumerate() {
            let active = self
                .pages
                .current()
                .is_some_and(|id| self.pages.registry().lookup(key) == Some(id));
            let style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {}:{} ", i + 1, key), style));
        }
        let status = match self.last_shown {
            Some(id) => format!("  last shown: {id}"),
            None => "  nothing selected".to_string(),
        };
        spans.push(Span::raw(status));
        frame.render_widget(Paragraph::new(Line::from(spans)), header);

        self.pages.view(frame, body);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char(c @ '1'..='3') => {
                    let index = c as usize - '1' as usize;
                    Some(Msg::Pages(selector::Message::Select(KEYS[index].to_string())))
                }
                KeyCode::Char('0') => Some(Msg::Pages(selector::Message::ClearSelected)),
                KeyCode::Char('x') => Some(Msg::RemoveActive),
                KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
                _ => None,
            },
            _ => None,
        })]
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        title: Some("soso pages".into()),
        log_file: std::env::var_os("SOSO_LOG_FILE").map(Into::into),
        ..ProgramOptions::default()
    };
    let program = soso::Program::<PagesApp>::with_options((), options)?;

    // Drive navigation from outside the event loop: land on "prefs" once the
    // program is up, even if the user has not pressed anything yet.
    let handle = program.handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(750)).await;
        handle.send(Msg::Pages(selector::Message::ForceSelect("prefs".into())));
    });

    let app = program.run().await?;
    tracing::info!(pages = app.pages.len(), "exited");
    Ok(())
}
