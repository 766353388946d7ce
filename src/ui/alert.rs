use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Modal popup: a title, one line of message and the key that closes it
pub struct Alert<'a> {
    pub title: &'a str,
    pub message: String,
    pub action: &'a str,
}

impl Alert<'_> {
    fn size(&self) -> (u16, u16) {
        let text_width = [self.title.width(), self.message.width(), self.action.width()]
            .into_iter()
            .max()
            .unwrap_or_default();
        // borders plus two columns of padding each side
        (text_width as u16 + 6, 5)
    }
}

/// Rectangle of the given size centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl Widget for Alert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        let popup = centered_rect(width, height, area);

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(vec![
            Line::from(Span::styled(self.message, Style::default().fg(Color::White))),
            Line::default(),
            Line::from(Span::styled(
                self.action,
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let r = centered_rect(20, 5, Rect::new(0, 0, 60, 21));
        assert_eq!(r, Rect::new(20, 8, 20, 5));
    }

    #[test]
    fn centered_rect_shrinks_to_area() {
        let area = Rect::new(2, 3, 10, 4);
        let r = centered_rect(40, 9, area);
        assert_eq!(r, area);
    }

    #[test]
    fn popup_fits_longest_line() {
        let alert = Alert {
            title: "Time's up!",
            message: "Your score is 1234".to_string(),
            action: "[Enter] OK",
        };
        assert_eq!(alert.size(), (18 + 6, 5));
    }

    #[test]
    fn renders_all_parts() {
        let area = Rect::new(0, 0, 50, 11);
        let mut buf = Buffer::empty(area);
        Alert {
            title: "Time's up!",
            message: "Your score is 9".to_string(),
            action: "[Enter] OK",
        }
        .render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Time's up!"));
        assert!(content.contains("Your score is 9"));
        assert!(content.contains("[Enter] OK"));
    }
}
