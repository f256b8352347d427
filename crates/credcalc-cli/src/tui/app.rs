use credcalc_core::Session;
use crossterm::event::{KeyCode, KeyEvent};

/// Which usage input is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Messages,
    Minutes,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Messages => Field::Minutes,
            Field::Minutes => Field::Messages,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: same as next.
        self.next()
    }
}

/// Application state for the TUI.
pub struct App {
    pub session: Session,
    pub focus: Field,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            focus: Field::Messages,
            should_quit: false,
        }
    }

    /// Current value of the focused field.
    pub fn focused_value(&self) -> u64 {
        match self.focus {
            Field::Messages => self.session.input().messages,
            Field::Minutes => self.session.input().minutes,
        }
    }

    /// Upper bound of the focused field on the current plan.
    pub fn focused_max(&self) -> u64 {
        match self.focus {
            Field::Messages => self.session.max_messages(),
            Field::Minutes => self.session.max_minutes(),
        }
    }

    /// Handle a key press. Every branch that touches an input recomputes
    /// through the session before returning.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.session.select_prev_plan(),
            KeyCode::Right | KeyCode::Char('l') => self.session.select_next_plan(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up | KeyCode::Char('k') => self.step(1),
            KeyCode::Down | KeyCode::Char('j') => self.step(-1),
            KeyCode::PageUp => self.step(self.coarse_step()),
            KeyCode::PageDown => self.step(-self.coarse_step()),
            KeyCode::Home => self.set(0),
            KeyCode::End => self.set(i64::try_from(self.focused_max()).unwrap_or(i64::MAX)),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut text = self.focused_value().to_string();
                text.push(c);
                self.set_text(&text);
            }
            KeyCode::Backspace => {
                let mut text = self.focused_value().to_string();
                text.pop();
                self.set_text(&text);
            }
            _ => {}
        }
    }

    /// A tenth of the focused maximum, at least 1.
    fn coarse_step(&self) -> i64 {
        i64::try_from(self.focused_max() / 10).unwrap_or(i64::MAX).max(1)
    }

    fn step(&mut self, delta: i64) {
        match self.focus {
            Field::Messages => self.session.step_messages(delta),
            Field::Minutes => self.session.step_minutes(delta),
        }
    }

    fn set(&mut self, value: i64) {
        match self.focus {
            Field::Messages => self.session.set_messages(value),
            Field::Minutes => self.session.set_minutes(value),
        }
    }

    fn set_text(&mut self, raw: &str) {
        match self.focus {
            Field::Messages => self.session.set_messages_text(raw),
            Field::Minutes => self.session.set_minutes_text(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app() -> App {
        App::new(Session::default())
    }

    #[test]
    fn new_app_starts_on_default_plan() {
        let app = app();
        assert_eq!(app.session.plan().id, "pro");
        assert_eq!(app.focus, Field::Messages);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_on_q_and_esc() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('q')));
        assert!(a.should_quit);
        let mut a = app();
        a.handle_key(key(KeyCode::Esc));
        assert!(a.should_quit);
    }

    #[test]
    fn arrows_switch_plans() {
        let mut a = app();
        a.handle_key(key(KeyCode::Left));
        assert_eq!(a.session.plan().id, "basic");
        a.handle_key(key(KeyCode::Left));
        assert_eq!(a.session.plan().id, "max");
        a.handle_key(key(KeyCode::Char('l')));
        assert_eq!(a.session.plan().id, "basic");
    }

    #[test]
    fn tab_switches_field() {
        let mut a = app();
        a.handle_key(key(KeyCode::Tab));
        assert_eq!(a.focus, Field::Minutes);
        a.handle_key(key(KeyCode::BackTab));
        assert_eq!(a.focus, Field::Messages);
    }

    #[test]
    fn up_down_step_focused_field() {
        let mut a = app();
        a.handle_key(key(KeyCode::Up));
        assert_eq!(a.session.input().messages, 151);
        a.handle_key(key(KeyCode::Tab));
        a.handle_key(key(KeyCode::Down));
        assert_eq!(a.session.input().minutes, 29);
        assert_eq!(a.session.result().total_consumed, 151 + 290);
    }

    #[test]
    fn page_keys_step_a_tenth() {
        let mut a = app();
        a.handle_key(key(KeyCode::Tab));
        a.handle_key(key(KeyCode::PageUp));
        assert_eq!(a.session.input().minutes, 30 + 34);
        a.handle_key(key(KeyCode::PageDown));
        a.handle_key(key(KeyCode::PageDown));
        assert_eq!(a.session.input().minutes, 0);
    }

    #[test]
    fn home_end_jump_to_bounds() {
        let mut a = app();
        a.handle_key(key(KeyCode::End));
        assert_eq!(a.session.input().messages, 3415);
        a.handle_key(key(KeyCode::Home));
        assert_eq!(a.session.input().messages, 0);
    }

    #[test]
    fn typing_digits_edits_like_a_number_field() {
        let mut a = app();
        // 150 -> 15 -> 1 -> 0 (emptied field stores 0)
        a.handle_key(key(KeyCode::Backspace));
        a.handle_key(key(KeyCode::Backspace));
        assert_eq!(a.session.input().messages, 1);
        a.handle_key(key(KeyCode::Backspace));
        assert_eq!(a.session.input().messages, 0);
        assert_eq!(a.session.result().message_credits, 0);
        a.handle_key(key(KeyCode::Char('7')));
        a.handle_key(key(KeyCode::Char('5')));
        assert_eq!(a.session.input().messages, 75);
    }

    #[test]
    fn typing_past_max_clamps() {
        let mut a = app();
        a.handle_key(key(KeyCode::Tab));
        // 30 -> 309 -> clamped to 341
        a.handle_key(key(KeyCode::Char('9')));
        assert_eq!(a.session.input().minutes, 309);
        a.handle_key(key(KeyCode::Char('9')));
        assert_eq!(a.session.input().minutes, 341);
    }

    #[test]
    fn overage_follows_plan_switch() {
        let mut a = app();
        a.handle_key(key(KeyCode::End));
        a.handle_key(key(KeyCode::Tab));
        a.handle_key(key(KeyCode::End));
        assert!(a.session.result().is_overage());
        // 3415 + 3410 still exceeds Elite's 6563
        a.handle_key(key(KeyCode::Right));
        assert_eq!(a.session.plan().id, "elite");
        assert!(a.session.result().is_overage());
        a.handle_key(key(KeyCode::Right));
        assert_eq!(a.session.plan().id, "max");
        assert!(!a.session.result().is_overage());
        assert_eq!(a.session.result().remaining, 13126 - 6825);
    }
}
