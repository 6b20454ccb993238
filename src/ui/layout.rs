//! Fixed logical canvas and its projection onto the terminal.
//!
//! Every widget is placed on an 800x600 canvas. At draw time each rectangle
//! is scaled to the terminal area, and mouse clicks are tested against the
//! same projected rectangles so a click lands on exactly what was drawn.

use ratatui::layout::{Position, Rect};

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Width of a completely filled progress bar.
pub const PROGRESS_MAX_WIDTH: f32 = 700.0;

/// A rectangle in canvas units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogicalRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LogicalRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Scale to terminal cells inside `area`. Edges are rounded, so a very
    /// small terminal may yield an empty rectangle.
    pub fn project(self, area: Rect) -> Rect {
        let sx = f32::from(area.width) / CANVAS_WIDTH;
        let sy = f32::from(area.height) / CANVAS_HEIGHT;

        let x0 = (self.x * sx).round() as u16;
        let x1 = ((self.x + self.width) * sx).round() as u16;
        let y0 = (self.y * sy).round() as u16;
        let y1 = ((self.y + self.height) * sy).round() as u16;

        Rect {
            x: area.x + x0.min(area.width),
            y: area.y + y0.min(area.height),
            width: x1.min(area.width).saturating_sub(x0),
            height: y1.min(area.height).saturating_sub(y0),
        }
    }
}

pub const PROGRESS_RECT: LogicalRect = LogicalRect::new(50.0, 50.0, PROGRESS_MAX_WIDTH, 20.0);
pub const INFO_RECT: LogicalRect = LogicalRect::new(50.0, 0.0, 700.0, 40.0);
pub const MESSAGES_RECT: LogicalRect = LogicalRect::new(300.0, 270.0, 450.0, 100.0);
pub const PLAYLIST_RECT: LogicalRect = LogicalRect::new(300.0, 375.0, 450.0, 95.0);
pub const HELP_RECT: LogicalRect = LogicalRect::new(50.0, 480.0, 700.0, 60.0);
pub const TITLE_RECT: LogicalRect = LogicalRect::new(450.0, 560.0, 340.0, 40.0);

/// The filled part of the progress bar for `completion` in `[0, 1]`.
pub fn progress_fill(completion: f32) -> LogicalRect {
    let mut r = PROGRESS_RECT;
    r.width = PROGRESS_MAX_WIDTH * completion.clamp(0.0, 1.0);
    r
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Add,
    Next,
    Previous,
    Exit,
    Pause,
    Play,
    VolumeUp,
    VolumeDown,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Add,
        Button::Next,
        Button::Previous,
        Button::Exit,
        Button::Pause,
        Button::Play,
        Button::VolumeUp,
        Button::VolumeDown,
    ];

    pub fn rect(self) -> LogicalRect {
        match self {
            Button::Add => LogicalRect::new(50.0, 100.0, 200.0, 50.0),
            Button::Next => LogicalRect::new(50.0, 200.0, 200.0, 50.0),
            Button::Previous => LogicalRect::new(50.0, 300.0, 200.0, 50.0),
            Button::Exit => LogicalRect::new(50.0, 400.0, 200.0, 50.0),
            Button::Pause => LogicalRect::new(300.0, 100.0, 200.0, 50.0),
            Button::Play => LogicalRect::new(300.0, 200.0, 200.0, 50.0),
            Button::VolumeUp => LogicalRect::new(600.0, 100.0, 85.0, 50.0),
            Button::VolumeDown => LogicalRect::new(600.0, 200.0, 85.0, 50.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Button::Add => "Add Song",
            Button::Next => "Next Song",
            Button::Previous => "Previous Song",
            Button::Exit => "Exit",
            Button::Pause => "Pause",
            Button::Play => "Play",
            Button::VolumeUp => "Up",
            Button::VolumeDown => "Down",
        }
    }

    /// Keyboard equivalent of the button.
    pub fn shortcut(self) -> char {
        match self {
            Button::Add => 'a',
            Button::Next => 'n',
            Button::Previous => 'p',
            Button::Exit => 'q',
            Button::Pause => ' ',
            Button::Play => 'r',
            Button::VolumeUp => '+',
            Button::VolumeDown => '-',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Button> {
        match c {
            // `=` shares a key with `+` on most layouts.
            '=' => Some(Button::VolumeUp),
            c => Button::ALL.into_iter().find(|b| b.shortcut() == c),
        }
    }
}

/// The button drawn under terminal cell (`column`, `row`), if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    let pos = Position::new(column, row);
    Button::ALL
        .into_iter()
        .find(|b| b.rect().project(area).contains(pos))
}
