use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a real terminal.
///
/// Synchronous commands ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages); futures are ignored and a
/// [`Command::quit`] only sets [`quit_requested`](TestProgram::quit_requested).
///
/// ```rust,ignore
/// let mut prog = TestProgram::<App>::new(());
/// prog.send(Msg::Pages(selector::Message::Select("settings".into())));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 5).contains("Settings"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    /// Messages produced by `init` stay queued until drained.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Run a single update cycle with `msg`, queueing any messages it emits.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Feed queued messages back into [`Model::update`] until none remain.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Messages queued but not yet delivered.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model, bypassing the update cycle.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = buf.area;
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y + 1 < area.bottom() {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None | CommandInner::Future(_) => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // Records every title it is asked to show; `Echo` bounces a follow-up.
    struct Trail {
        shown: Vec<String>,
    }

    #[derive(Debug)]
    enum TrailMsg {
        Show(String),
        Echo(String),
        Done,
    }

    impl Model for Trail {
        type Message = TrailMsg;
        type Flags = Option<String>;

        fn init(first: Option<String>) -> (Self, Command<TrailMsg>) {
            let cmd = first.map_or_else(Command::none, |t| Command::message(TrailMsg::Show(t)));
            (Trail { shown: vec![] }, cmd)
        }

        fn update(&mut self, msg: TrailMsg) -> Command<TrailMsg> {
            match msg {
                TrailMsg::Show(t) => {
                    self.shown.push(t);
                    Command::none()
                }
                TrailMsg::Echo(t) => {
                    self.shown.push(format!("echo:{t}"));
                    Command::message(TrailMsg::Show(t))
                }
                TrailMsg::Done => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = self.shown.last().cloned().unwrap_or_default();
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn init_messages_wait_for_drain() {
        let mut prog = TestProgram::<Trail>::new(Some("home".into()));
        assert!(prog.model().shown.is_empty());
        assert_eq!(prog.pending().len(), 1);
        prog.drain_messages();
        assert_eq!(prog.model().shown, vec!["home"]);
    }

    #[test]
    fn send_runs_one_update() {
        let mut prog = TestProgram::<Trail>::new(None);
        prog.send(TrailMsg::Show("a".into()));
        prog.send(TrailMsg::Show("b".into()));
        assert_eq!(prog.model().shown, vec!["a", "b"]);
    }

    #[test]
    fn drain_follows_chained_messages() {
        let mut prog = TestProgram::<Trail>::new(None);
        prog.send(TrailMsg::Echo("x".into()));
        assert_eq!(prog.model().shown, vec!["echo:x"]);
        prog.drain_messages();
        assert_eq!(prog.model().shown, vec!["echo:x", "x"]);
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Trail>::new(None);
        assert!(!prog.quit_requested());
        prog.send(TrailMsg::Done);
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_shows_latest() {
        let mut prog = TestProgram::<Trail>::new(None);
        prog.send(TrailMsg::Show("settings".into()));
        let out = prog.render_string(20, 2);
        assert!(out.starts_with("settings"));
        assert_eq!(out.lines().count(), 2);
    }
}
