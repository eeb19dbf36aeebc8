use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        match key {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Char(' ') => {
                app.advance();
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                app.retreat();
            }
            KeyCode::Char('r') => {
                if app.can_reload() {
                    app.request_load();
                }
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode};
    use crate::domain::{BrowseMode, Quote};

    fn loaded_app(mode: BrowseMode, n: usize) -> App {
        let quotes = (0..n)
            .map(|i| Quote {
                book: format!("Book {}", i),
                author: format!("Author {}", i),
                quote: format!("Quote {}", i),
            })
            .collect();

        let mut app = App::new(mode);
        app.request_load();
        let generation = app.take_pending_load().unwrap();
        app.finish_load(generation, Ok(quotes));
        app
    }

    #[test]
    fn test_right_key_advances() {
        let mut app = loaded_app(BrowseMode::Sequential, 3);
        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.current, 1);
    }

    #[test]
    fn test_left_key_wraps_backwards() {
        let mut app = loaded_app(BrowseMode::Sequential, 3);
        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.current, 2);
    }

    #[test]
    fn test_vim_style_navigation_keys() {
        let mut app = loaded_app(BrowseMode::Sequential, 3);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(app.current, 1);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('h'), KeyModifiers::NONE);
        assert_eq!(app.current, 0);
    }

    #[test]
    fn test_reload_key_in_sequential_mode() {
        let mut app = App::new(BrowseMode::Sequential);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('r'), KeyModifiers::NONE);

        assert!(app.loading);
        assert!(app.take_pending_load().is_some());
    }

    #[test]
    fn test_reload_key_ignored_in_shuffle_mode() {
        let mut app = loaded_app(BrowseMode::Shuffle, 3);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('r'), KeyModifiers::NONE);

        assert!(!app.loading);
        assert!(app.take_pending_load().is_none());
    }

    #[test]
    fn test_reload_key_ignored_while_loading() {
        let mut app = App::new(BrowseMode::Sequential);
        app.request_load();
        let generation = app.take_pending_load().unwrap();

        InputHandler::handle_key_event(&mut app, KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(app.take_pending_load().is_none());

        // The original load still settles the state.
        app.finish_load(generation, Ok(Vec::new()));
        assert!(!app.loading);
    }

    #[test]
    fn test_navigation_keys_ignored_while_loading() {
        let mut app = loaded_app(BrowseMode::Sequential, 3);
        app.request_load();

        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.current, 0);
    }

    #[test]
    fn test_help_key_opens_and_closes_help() {
        let mut app = App::new(BrowseMode::Sequential);
        InputHandler::handle_key_event(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Help));

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_help_scrolling() {
        let mut app = App::new(BrowseMode::Sequential);
        app.mode = AppMode::Help;

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 2);

        InputHandler::handle_key_event(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 1);

        InputHandler::handle_key_event(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 6);

        InputHandler::handle_key_event(&mut app, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 0);
    }

    #[test]
    fn test_navigation_keys_noop_in_help_mode() {
        let mut app = loaded_app(BrowseMode::Sequential, 3);
        app.mode = AppMode::Help;

        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.current, 0);
    }
}
