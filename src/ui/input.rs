use crate::ui::{message::AppMessage, state::AppState};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            return Some(AppMessage::Quit);
        }

        if !state.is_ready() {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(AppMessage::Quit),
                _ => None,
            };
        }

        if state.search_focused {
            Self::handle_search_key(key)
        } else {
            Self::handle_table_key(key)
        }
    }

    fn handle_search_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(AppMessage::ClearSearch),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(AppMessage::SearchInput(c))
            }
            (KeyCode::Backspace, _) => Some(AppMessage::SearchBackspace),
            (KeyCode::Esc | KeyCode::Enter | KeyCode::Tab, _) => Some(AppMessage::BlurSearch),
            (KeyCode::Down, _) => Some(AppMessage::SelectNext),
            (KeyCode::Up, _) => Some(AppMessage::SelectPrevious),
            (KeyCode::PageDown, _) => Some(AppMessage::PageDown),
            (KeyCode::PageUp, _) => Some(AppMessage::PageUp),
            _ => None,
        }
    }

    fn handle_table_key(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Char('/') | KeyCode::Tab => Some(AppMessage::FocusSearch),
            KeyCode::Esc => Some(AppMessage::ClearSearch),
            KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::SelectPrevious),
            KeyCode::Home | KeyCode::Char('g') => Some(AppMessage::SelectFirst),
            KeyCode::End | KeyCode::Char('G') => Some(AppMessage::SelectLast),
            KeyCode::PageDown => Some(AppMessage::PageDown),
            KeyCode::PageUp => Some(AppMessage::PageUp),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ready() -> AppState {
        AppState::default().reduce(AppMessage::ChartLoaded(Chart {
            chart_date: "2024-01-05".into(),
            songs: vec![],
        }))
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = key_with(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            InputHandler::handle_key(ctrl_c, &AppState::default()),
            Some(AppMessage::Quit)
        );
        assert_eq!(InputHandler::handle_key(ctrl_c, &ready()), Some(AppMessage::Quit));
    }

    #[test]
    fn only_quitting_is_possible_before_ready() {
        let loading = AppState::default();
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q')), &loading),
            Some(AppMessage::Quit)
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('a')), &loading), None);

        let failed = loading.reduce(AppMessage::FetchFailed("Failed to fetch data".into()));
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &failed),
            Some(AppMessage::Quit)
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Down), &failed), None);
    }

    #[test]
    fn focused_search_captures_letters() {
        let state = ready();
        assert!(state.search_focused);
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q')), &state),
            Some(AppMessage::SearchInput('q'))
        );
        assert_eq!(
            InputHandler::handle_key(key_with(KeyCode::Char('A'), KeyModifiers::SHIFT), &state),
            Some(AppMessage::SearchInput('A'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Backspace), &state),
            Some(AppMessage::SearchBackspace)
        );
        assert_eq!(
            InputHandler::handle_key(key_with(KeyCode::Char('u'), KeyModifiers::CONTROL), &state),
            Some(AppMessage::ClearSearch)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Down), &state),
            Some(AppMessage::SelectNext)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &state),
            Some(AppMessage::BlurSearch)
        );
    }

    #[test]
    fn table_keys_after_leaving_search() {
        let state = ready().reduce(AppMessage::BlurSearch);
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('j')), &state),
            Some(AppMessage::SelectNext)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('G')), &state),
            Some(AppMessage::SelectLast)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('/')), &state),
            Some(AppMessage::FocusSearch)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q')), &state),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), &state),
            Some(AppMessage::ClearSearch)
        );
    }
}
