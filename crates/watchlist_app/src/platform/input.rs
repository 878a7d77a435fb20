use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use watchlist_core::{AppViewModel, Msg, Panel};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Maps a key press onto a core message, given what is currently on screen.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl && !alt => KeyAction::Quit,
        KeyCode::Char('u') if ctrl && !alt => query(String::new()),
        // Ctrl+Alt together is how AltGr arrives on Windows.
        KeyCode::Char(ch) if ctrl == alt => {
            let mut next = view.query.clone();
            next.push(ch);
            query(next)
        }
        KeyCode::Backspace => {
            let mut next = view.query.clone();
            if next.pop().is_none() {
                return KeyAction::Ignore;
            }
            query(next)
        }
        KeyCode::Up => KeyAction::Dispatch(Msg::CursorMoved(-1)),
        KeyCode::Down => KeyAction::Dispatch(Msg::CursorMoved(1)),
        KeyCode::PageUp => KeyAction::Dispatch(Msg::CursorMoved(-10)),
        KeyCode::PageDown => KeyAction::Dispatch(Msg::CursorMoved(10)),
        KeyCode::Enter => KeyAction::Dispatch(Msg::HighlightedSelected),
        KeyCode::Esc if view.details.is_some() => KeyAction::Dispatch(Msg::DetailsClosed),
        KeyCode::F(1) => KeyAction::Dispatch(Msg::PanelToggled(Panel::Results)),
        KeyCode::F(2) => KeyAction::Dispatch(Msg::PanelToggled(Panel::Watched)),
        KeyCode::Left => {
            KeyAction::Dispatch(Msg::RatingHovered(view.rating.filled.saturating_sub(1)))
        }
        KeyCode::Right => KeyAction::Dispatch(Msg::RatingHovered(
            view.rating.filled.saturating_add(1).min(view.rating.max),
        )),
        KeyCode::F(5) => KeyAction::Dispatch(Msg::RatingCommitted),
        KeyCode::F(6) => KeyAction::Dispatch(Msg::RatingHoverCleared),
        _ => KeyAction::Ignore,
    }
}

fn query(text: String) -> KeyAction {
    KeyAction::Dispatch(Msg::QueryChanged(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::{update, AppState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn view_with_query(text: &str) -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::QueryChanged(text.to_string()));
        state.view()
    }

    #[test]
    fn typing_appends_to_query() {
        let view = view_with_query("bat");
        assert_eq!(
            map_key(press(KeyCode::Char('m')), &view),
            KeyAction::Dispatch(Msg::QueryChanged("batm".to_string()))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT), &view),
            KeyAction::Dispatch(Msg::QueryChanged("batB".to_string()))
        );
    }

    #[test]
    fn backspace_removes_last_character() {
        let view = view_with_query("café");
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view),
            KeyAction::Dispatch(Msg::QueryChanged("caf".to_string()))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view_with_query("")),
            KeyAction::Ignore
        );
    }

    #[test]
    fn control_keys_quit_and_clear() {
        let view = view_with_query("batman");
        assert_eq!(map_key(ctrl('c'), &view), KeyAction::Quit);
        assert_eq!(map_key(ctrl('q'), &view), KeyAction::Quit);
        assert_eq!(
            map_key(ctrl('u'), &view),
            KeyAction::Dispatch(Msg::QueryChanged(String::new()))
        );
        assert_eq!(map_key(ctrl('x'), &view), KeyAction::Ignore);
    }

    #[test]
    fn altgr_characters_are_typed() {
        let view = view_with_query("me");
        let altgr = |ch| {
            KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL | KeyModifiers::ALT)
        };

        assert_eq!(
            map_key(altgr('@'), &view),
            KeyAction::Dispatch(Msg::QueryChanged("me@".to_string()))
        );
        assert_eq!(
            map_key(altgr('c'), &view),
            KeyAction::Dispatch(Msg::QueryChanged("mec".to_string()))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), &view),
            KeyAction::Ignore
        );
    }

    #[test]
    fn escape_only_closes_open_details() {
        let (state, _) = update(AppState::new(), Msg::MovieSelected("tt1".to_string()));
        assert_eq!(
            map_key(press(KeyCode::Esc), &state.view()),
            KeyAction::Dispatch(Msg::DetailsClosed)
        );
        assert_eq!(
            map_key(press(KeyCode::Esc), &AppState::new().view()),
            KeyAction::Ignore
        );
    }

    #[test]
    fn arrows_hover_within_star_bounds() {
        let view = AppState::new().view();
        assert_eq!(
            map_key(press(KeyCode::Left), &view),
            KeyAction::Dispatch(Msg::RatingHovered(0))
        );

        let (state, _) = update(AppState::new(), Msg::RatingHovered(5));
        assert_eq!(
            map_key(press(KeyCode::Right), &state.view()),
            KeyAction::Dispatch(Msg::RatingHovered(5))
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, &AppState::new().view()), KeyAction::Ignore);
    }
}
