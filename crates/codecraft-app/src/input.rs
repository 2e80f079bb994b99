//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    SubmitChat,
    RunCode,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    // Global bindings win over panel input.
    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Action::Quit;
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Action::RunCode;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggle();
            return Action::None;
        }
        _ => {}
    }

    match app.focus {
        Focus::Chat => handle_chat_key(app, key),
        Focus::Editor => handle_editor_key(app, key),
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => {
            if !app.chat_input.trim().is_empty() {
                return Action::SubmitChat;
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_input.push(c);
        }
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        _ => {}
    }
    Action::None
}

fn handle_editor_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => app.editor.insert_newline(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.editor.insert_char(c);
        }
        KeyCode::Backspace => app.editor.backspace(),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Up => app.editor.move_up(),
        KeyCode::Down => app.editor.move_down(),
        KeyCode::Home => app.editor.move_home(),
        KeyCode::End => app.editor.move_end(),
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TutorSession;
    use async_trait::async_trait;
    use codecraft_ai::{AiClient, AiError, AiResponse, Message};
    use codecraft_runner::PythonRunner;

    struct StubClient;

    #[async_trait]
    impl AiClient for StubClient {
        async fn send_message(&self, _messages: &[Message]) -> Result<AiResponse, AiError> {
            Err(AiError::ApiError("not wired in input tests".into()))
        }
    }

    fn app() -> App {
        App::new(TutorSession::new(
            Box::new(StubClient),
            PythonRunner::with_interpreter("python3"),
        ))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn tab_toggles_the_focused_panel() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Editor);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Chat);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, press(KeyCode::Esc)), Action::Quit);
        assert_eq!(handle_key(&mut app, ctrl('c')), Action::Quit);
    }

    #[test]
    fn ctrl_r_requests_a_code_run_from_either_panel() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, ctrl('r')), Action::RunCode);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(handle_key(&mut app, ctrl('r')), Action::RunCode);
    }

    #[test]
    fn typing_goes_to_the_focused_panel() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(app.editor.text().ends_with('x'));

        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('y')));
        assert_eq!(app.chat_input, "y");
        assert!(!app.editor.text().ends_with("xy"));
    }

    #[test]
    fn enter_submits_only_non_blank_chat_input() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), Action::None);

        app.chat_input.push_str("   ");
        assert_eq!(handle_key(&mut app, press(KeyCode::Enter)), Action::None);

        app.chat_input.push_str("what is print?");
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter)),
            Action::SubmitChat
        );
    }

    #[test]
    fn unbound_control_chords_are_not_inserted() {
        let mut app = app();
        let before = app.editor.text();
        handle_key(&mut app, ctrl('a'));
        assert_eq!(app.editor.text(), before);
    }
}
