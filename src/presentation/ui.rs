use crate::application::{App, AppMode, ViewState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_body(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let position = if app.quotes.is_empty() {
        String::new()
    } else {
        format!(" | Quote {}/{}", app.current + 1, app.quotes.len())
    };
    let header = Paragraph::new(format!("tqex - Terminal Quote Explorer{}", position))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Quotes");

    match app.view_state() {
        ViewState::Loading => {
            let widget = Paragraph::new("Fetching quotes...")
                .style(Style::default().fg(Color::Cyan))
                .block(block);
            f.render_widget(widget, area);
        }
        ViewState::Error(message) => {
            let widget = Paragraph::new(format!("Failed to load quotes: {}", message))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(widget, area);
        }
        ViewState::Loaded(quote) => {
            let lines = vec![
                Line::from(Span::styled(
                    quote.book.clone(),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    format!("by {}", quote.author),
                    Style::default().fg(Color::Green),
                )),
                Line::from(""),
                Line::from(quote.quote.clone()),
            ];
            let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
            f.render_widget(widget, area);
        }
        ViewState::Empty { fetched } => {
            let message = if fetched {
                "The quote source returned no quotes."
            } else {
                "No quotes loaded yet. Press r to fetch some."
            };
            let widget = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(widget, area);
        }
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => {
            let mut parts = Vec::new();
            if app.can_navigate() {
                parts.push("←/→: browse");
            }
            if app.can_reload() {
                parts.push("r: reload");
            }
            parts.push("F1/?: help");
            parts.push("q: quit");
            parts.join(" | ")
        }
        AppMode::Help => {
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("tqex Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TQEX KEY REFERENCE

=== BROWSING ===
→ / l / n / Space   Next quote
← / h / p           Previous quote

In sequential mode the keys step through the list in order, wrapping
around at either end. In shuffle mode every step jumps to a random
quote that differs from the one on screen; with fewer than two quotes
the keys do nothing.

=== LOADING ===
r                   Fetch the quote list (sequential mode only)

Sequential mode starts empty and loads on demand; press r again to
retry after a failure. Shuffle mode fetches once at startup and shows
an error view if that load fails.

=== MODES ===
tqex --mode sequential    Ordered browsing, manual loading
tqex --mode shuffle       Random browsing, automatic loading (default)
tqex --url <endpoint>     Read quotes from a different endpoint

=== OTHER KEYS ===
F1 or ?             Show this help
q                   Quit application

=== HELP NAVIGATION ===
↑↓ or j/k           Scroll help text up/down one line
Page Up/Down        Scroll help text up/down 5 lines
Home                Jump to top of help text
Esc/F1/?/q          Close this help window"#
        .to_string()
}
