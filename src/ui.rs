pub mod alert;

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

use crate::{
    app::{App, Modal},
    session::GameState,
    ticker::TickSource,
};
use alert::Alert;

const HORIZONTAL_MARGIN: u16 = 2;
const BUTTON_LABEL: &str = "TAP ME!";
const BUTTON_WIDTH: u16 = 13;
const BUTTON_HEIGHT: u16 = 3;
// below this many seconds the clock turns red
const HURRY_SECS: u32 = 3;

pub const INFO_TITLE: &str = "Time Fighter";
pub const INFO_MESSAGE: &str = "Created by The Mighty Swift Developer";

/// Draw the whole game for one frame
pub fn ui<T: TickSource>(app: &App<T>, f: &mut Frame, now: Instant) {
    f.render_widget(PlayScreen { app, now }, f.area());

    match app.modal {
        Some(Modal::TimeIsUp { final_score }) => f.render_widget(
            Alert {
                title: "Time's up!",
                message: format!("Your score is {final_score}"),
                action: "[Enter] OK",
            },
            f.area(),
        ),
        Some(Modal::Info) => f.render_widget(
            Alert {
                title: INFO_TITLE,
                message: INFO_MESSAGE.to_string(),
                action: "[Enter] Dismiss",
            },
            f.area(),
        ),
        None => {}
    }
}

/// Style for the score text at the given blink opacity
fn score_style(opacity: f64) -> Style {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    if opacity > 0.66 {
        bold
    } else if opacity > 0.33 {
        bold.add_modifier(Modifier::DIM)
    } else {
        bold.add_modifier(Modifier::HIDDEN)
    }
}

/// Button rectangle for the given pulse scale, centered in `area` and clipped to it
fn button_rect(area: Rect, scale: f64) -> Rect {
    let min_width = BUTTON_LABEL.len() as u16 + 2;
    let width = ((BUTTON_WIDTH as f64 * scale).round() as u16)
        .max(min_width)
        .min(area.width);
    let height = ((BUTTON_HEIGHT as f64 * scale).round() as u16)
        .max(BUTTON_HEIGHT)
        .min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub struct PlayScreen<'a, T: TickSource> {
    pub app: &'a App<T>,
    pub now: Instant,
}

impl<T: TickSource> Widget for PlayScreen<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.app.session;
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title bar
                Constraint::Length(1), // padding
                Constraint::Length(1), // score + time left
                Constraint::Min(BUTTON_HEIGHT),
                Constraint::Length(1), // hint
                Constraint::Length(1), // key legend
            ])
            .split(area);

        let title_style = Style::default().fg(Color::White).bg(Color::Blue);
        Block::default().style(title_style).render(chunks[0], buf);
        Paragraph::new(Line::from(vec![
            Span::styled(" Time Fighter", title_style.add_modifier(Modifier::BOLD)),
        ]))
        .render(chunks[0], buf);
        Paragraph::new(Span::styled("[i] info ", title_style))
            .alignment(Alignment::Right)
            .render(chunks[0], buf);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        let opacity = self.app.effects.score_opacity(self.now);
        Paragraph::new(Line::from(vec![
            Span::styled("Your score: ", bold_style),
            Span::styled(session.score().to_string(), score_style(opacity)),
        ]))
        .render(header[0], buf);

        let time_style = if session.is_running() && session.time_remaining() <= HURRY_SECS {
            bold_style.fg(Color::Red)
        } else {
            bold_style
        };
        Paragraph::new(Span::styled(
            format!("Time Left: {}", session.time_remaining()),
            time_style,
        ))
        .alignment(Alignment::Right)
        .render(header[1], buf);

        let button_area = button_rect(chunks[3], self.app.effects.button_scale(self.now));
        let button = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Yellow));
        let inner = button.inner(button_area);
        button.render(button_area, buf);
        let label_area = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height.min(1),
            ..inner
        };
        Paragraph::new(Span::styled(
            BUTTON_LABEL,
            bold_style.fg(Color::Yellow),
        ))
        .alignment(Alignment::Center)
        .render(label_area, buf);

        let hint = match session.state() {
            GameState::Idle => "tap to start the clock",
            GameState::Running => "keep tapping!",
            GameState::Expired => "",
        };
        Paragraph::new(Span::styled(hint, dim_style.add_modifier(Modifier::ITALIC)))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);

        let legend = match self.app.modal {
            None => "(space) tap / (i) info / (esc) quit",
            Some(_) => "(enter) dismiss / (ctrl+c) quit",
        };
        Paragraph::new(Span::styled(legend, Style::default().fg(Color::Magenta)))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }
}
