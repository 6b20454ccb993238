//! UI rendering for the terminal canvas.
//!
//! Widgets are positioned on the logical canvas from `layout` and scaled to
//! whatever size the terminal currently has.

pub mod layout;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{AddSongPrompt, App, PromptStage};
use crate::audio::{PlaybackSnapshot, PlaybackStatus};
use crate::config::UiSettings;

use layout::{
    Button, HELP_RECT, INFO_RECT, MESSAGES_RECT, PLAYLIST_RECT, PROGRESS_RECT, TITLE_RECT,
    progress_fill,
};

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Build the now-playing line shown above the progress bar.
fn info_text(app: &App, snap: &PlaybackSnapshot) -> String {
    let mut parts: Vec<String> = Vec::new();

    match (app.playlist.current(), app.playlist.current_index()) {
        (Some(track), Some(i)) => {
            parts.push(format!(
                "Song {}/{}: {}",
                i + 1,
                app.playlist.len(),
                track.name
            ));
        }
        _ => parts.push("Playlist empty".to_string()),
    }

    parts.push(snap.status.label().to_string());

    if snap.status != PlaybackStatus::Stopped {
        match snap.duration {
            Some(total) => parts.push(format!(
                "{} / {}",
                format_mmss(snap.elapsed),
                format_mmss(total)
            )),
            None => parts.push(format_mmss(snap.elapsed)),
        }
    }

    parts.push(format!("Volume: {:.0}", snap.volume));
    parts.join(" • ")
}

fn help_text() -> String {
    let keys = Button::ALL
        .iter()
        .map(|b| {
            let key = match b.shortcut() {
                ' ' => "space".to_string(),
                c => c.to_string(),
            };
            format!("[{}] {}", key, b.label())
        })
        .collect::<Vec<String>>();
    format!("{} | or click a button", keys.join(" "))
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10).min(r.width);
    height = height.min(r.height.saturating_sub(2)).max(5).min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn draw_button(frame: &mut Frame, area: Rect, button: Button) {
    let r = button.rect().project(area);
    if r.is_empty() {
        return;
    }

    let bg = match button {
        Button::Exit => Color::Red,
        _ => Color::Black,
    };
    let style = Style::default().bg(bg).fg(Color::White);
    frame.render_widget(Block::default().style(style), r);

    // Label on the middle row.
    let label_row = Rect {
        y: r.y + r.height / 2,
        height: 1,
        ..r
    };
    frame.render_widget(
        Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD)),
        label_row,
    );
}

fn draw_progress(frame: &mut Frame, area: Rect, completion: f32) {
    let background = PROGRESS_RECT.project(area);
    if background.is_empty() {
        return;
    }
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::DarkGray)),
        background,
    );

    let fill = progress_fill(completion).project(area);
    if !fill.is_empty() {
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::White)),
            fill,
        );
    }
}

fn draw_messages(frame: &mut Frame, area: Rect, app: &App) {
    let r = MESSAGES_RECT.project(area);
    if r.is_empty() {
        return;
    }

    // Only the newest lines that fit inside the borders.
    let visible = r.height.saturating_sub(2) as usize;
    let skip = app.messages().len().saturating_sub(visible);
    let text = app
        .messages()
        .iter()
        .skip(skip)
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join("\n");

    let pane = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" messages ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(pane, r);
}

/// Rows `[start, end)` of a `total`-long list to show in `height` rows,
/// keeping `selected` centered when possible.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

fn draw_playlist(frame: &mut Frame, area: Rect, app: &App) {
    let r = PLAYLIST_RECT.project(area);
    if r.is_empty() {
        return;
    }

    // Only build items for the visible window.
    let total = app.playlist.len();
    let selected = app.playlist.current_index().unwrap_or(0);
    let (start, end) = visible_window(total, r.height.saturating_sub(2) as usize, selected);

    let items: Vec<ListItem> = app
        .playlist
        .iter()
        .enumerate()
        .skip(start)
        .take(end - start)
        .map(|(i, t)| ListItem::new(format!("{}. {}", i + 1, t.name)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" playlist ({total}) ")),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if let Some(i) = app.playlist.current_index() {
        state.select(Some(i - start));
    }
    frame.render_stateful_widget(list, r, &mut state);
}

fn draw_prompt(frame: &mut Frame, area: Rect, prompt: &AddSongPrompt) {
    let popup_area = centered_rect_sized(60, 7, area);
    frame.render_widget(Clear, popup_area);

    let body = match &prompt.stage {
        PromptStage::Name => format!("{} {}_", prompt.label(), prompt.buffer),
        PromptStage::Path { name } => {
            format!("Name: {}\n{} {}_", name, prompt.label(), prompt.buffer)
        }
    };

    let popup = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" add song (enter confirms, esc cancels) ")
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 1,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(popup, popup_area);
}

/// Render the entire UI into `frame` from `app` and the current playback snapshot.
pub fn draw(frame: &mut Frame, app: &App, snap: &PlaybackSnapshot, ui_settings: &UiSettings) {
    let area = frame.area();

    let info = INFO_RECT.project(area);
    if !info.is_empty() {
        frame.render_widget(Paragraph::new(info_text(app, snap)), info);
    }

    draw_progress(frame, area, snap.completion);

    for button in Button::ALL {
        draw_button(frame, area, button);
    }

    draw_messages(frame, area, app);
    draw_playlist(frame, area, app);

    let help = HELP_RECT.project(area);
    if !help.is_empty() {
        frame.render_widget(
            Paragraph::new(help_text())
                .dim()
                .wrap(Wrap { trim: true }),
            help,
        );
    }

    let title = TITLE_RECT.project(area);
    if !title.is_empty() {
        frame.render_widget(
            Paragraph::new(ui_settings.title_text.as_str())
                .alignment(Alignment::Right)
                .bold(),
            title,
        );
    }

    if let Some(prompt) = app.prompt.as_ref() {
        draw_prompt(frame, area, prompt);
    }
}
