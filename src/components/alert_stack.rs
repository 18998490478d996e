// ABOUTME: Overlay component drawing the notification stack and tracking close hit regions

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Wrap},
};

use crate::alerts::{AlertStatus, RenderedAlert};
use crate::app::AppState;

const STACK_WIDTH: u16 = 46;
const ALERT_HEIGHT: u16 = 4;

pub struct AlertStackComponent {
    /// Close-icon hit regions from the last draw, newest alert first. The
    /// event loop resolves mouse clicks against these to a notification
    /// identifier.
    close_targets: Vec<(String, Rect)>,
}

impl AlertStackComponent {
    pub fn new() -> Self {
        Self {
            close_targets: Vec::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.close_targets.clear();

        let alerts = state.alerts.visible();
        if alerts.is_empty() {
            return;
        }

        let width = STACK_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width);
        let mut y = area.y;

        for alert in alerts {
            if y + ALERT_HEIGHT > area.bottom() {
                break;
            }
            let rect = Rect::new(x, y, width, ALERT_HEIGHT);
            self.render_alert(frame, rect, alert);
            y += ALERT_HEIGHT;
        }
    }

    fn render_alert(&mut self, frame: &mut Frame, rect: Rect, alert: &RenderedAlert) {
        let color = status_color(alert.status);

        let title_line = Line::from(vec![
            Span::styled(format!(" {} ", alert.icon), Style::default().fg(color)),
            Span::styled(
                alert.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        let close_title = Title::from(Line::from(Span::styled(
            format!(" {} ", alert.close_icon),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);

        let block = Block::default()
            .title(title_line)
            .title(close_title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        // Message is always present, empty string included, so every alert
        // keeps the same height.
        let message = Paragraph::new(alert.message.clone())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White));

        frame.render_widget(Clear, rect);
        frame.render_widget(message, rect);

        let close_rect = Rect::new(rect.right().saturating_sub(4), rect.y, 3, 1);
        self.close_targets.push((alert.id.clone(), close_rect));
    }

    /// The identifier of the notification whose close icon covers the given
    /// terminal cell, if any.
    pub fn close_target_at(&self, column: u16, row: u16) -> Option<&str> {
        self.close_targets
            .iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(id, _)| id.as_str())
    }
}

impl Default for AlertStackComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn status_color(status: AlertStatus) -> Color {
    match status {
        AlertStatus::Error => Color::Red,
        AlertStatus::Success => Color::Green,
        AlertStatus::Notify => Color::Cyan,
    }
}
