//! Application state and the main loop.
//!
//! The loop is strictly synchronous: draw, wait for a key, maybe run one
//! blocking action, draw again. Actions that call the model or the runner
//! redraw once first so the status line shows what the app is waiting on,
//! then block on the call. One session, one action at a time.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::runtime::Runtime;

use crate::editor::EditorState;
use crate::input::{self, Action};
use crate::render;
use crate::session::TutorSession;
use crate::tutor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chat,
    Editor,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Chat => Focus::Editor,
            Focus::Editor => Focus::Chat,
        }
    }
}

/// What the app is currently blocked on, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    RunningCode,
    AwaitingTutor,
}

pub struct App {
    pub session: TutorSession,
    pub focus: Focus,
    pub chat_input: String,
    pub editor: EditorState,
    /// Transient result shown under the editor until the tutor has reacted.
    pub result_readout: Option<String>,
    /// Inline error banner, cleared on the next action.
    pub notice: Option<String>,
    pub activity: Activity,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: TutorSession) -> Self {
        Self {
            session,
            focus: Focus::Editor,
            chat_input: String::new(),
            editor: EditorState::new(tutor::INITIAL_DRAFT),
            result_readout: None,
            notice: None,
            activity: Activity::Idle,
            should_quit: false,
        }
    }
}

pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &Runtime,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match input::handle_key(app, key) {
            Action::None => {}
            Action::Quit => app.should_quit = true,
            Action::SubmitChat => submit_chat(terminal, runtime, app)?,
            Action::RunCode => run_code(terminal, runtime, app)?,
        }
    }
    Ok(())
}

/// Send the chat input as a free-text turn and wait for the reply.
fn submit_chat<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &Runtime,
    app: &mut App,
) -> io::Result<()> {
    let text = std::mem::take(&mut app.chat_input);
    app.notice = None;
    app.activity = Activity::AwaitingTutor;
    terminal.draw(|f| render::draw(f, app))?;

    if let Err(e) = runtime.block_on(app.session.handle_chat(&text)) {
        tracing::warn!(error = %e, "chat send failed");
        app.notice = Some(format!("🚨 Error communicating with AI: {e}"));
    }
    app.activity = Activity::Idle;
    Ok(())
}

/// Run the editor draft, show its result, and have the tutor react to it.
///
/// The readout under the editor is cleared once the tutor's feedback arrives;
/// the result itself lives on inside the merged transcript turn. If the
/// feedback call fails, the readout stays so the learner still sees what
/// their code did.
fn run_code<B: Backend>(
    terminal: &mut Terminal<B>,
    runtime: &Runtime,
    app: &mut App,
) -> io::Result<()> {
    let code = app.editor.text();
    app.notice = None;
    app.result_readout = None;
    app.activity = Activity::RunningCode;
    terminal.draw(|f| render::draw(f, app))?;

    let result = match runtime.block_on(app.session.run_code(&code)) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "code run failed");
            app.notice = Some(format!("🚨 Failed to run code: {e}"));
            app.activity = Activity::Idle;
            return Ok(());
        }
    };

    app.result_readout = Some(result.display_text());
    app.activity = Activity::AwaitingTutor;
    terminal.draw(|f| render::draw(f, app))?;

    match runtime.block_on(app.session.evaluate(&result)) {
        Ok(()) => app.result_readout = None,
        Err(e) => {
            tracing::warn!(error = %e, "evaluation failed");
            app.notice = Some(format!("🚨 Error communicating with AI: {e}"));
        }
    }
    app.activity = Activity::Idle;
    Ok(())
}
