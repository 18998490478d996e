// ABOUTME: Main layout component with demo instructions, bottom menu bar, and alert overlay

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::AppState;

use super::AlertStackComponent;

pub struct LayoutComponent {
    alert_stack: AlertStackComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            alert_stack: AlertStackComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Demo content
                Constraint::Length(3), // Bottom menu bar
            ])
            .split(frame.size());

        self.render_instructions(frame, main_chunks[0], state);
        self.render_menu_bar(frame, main_chunks[1]);

        // Alert overlay sits on top of the content pane, newest first.
        self.alert_stack.render(frame, main_chunks[0], state);
    }

    /// Resolves a terminal cell to the identifier of the notification whose
    /// close icon covers it, if any.
    pub fn alert_close_at(&self, column: u16, row: u16) -> Option<String> {
        self.alert_stack
            .close_target_at(column, row)
            .map(str::to_string)
    }

    fn render_instructions(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let text = vec![
            Line::from(vec![Span::styled(
                "Alert-Box demo",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Trigger notifications and watch them stack newest-first"),
            Line::from("in the top-right corner."),
            Line::from(""),
            Line::from(vec![
                Span::styled("  a", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" - error alert"),
            ]),
            Line::from(vec![
                Span::styled("  s", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" - success notification"),
            ]),
            Line::from(vec![
                Span::styled("  n", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(" - general notification"),
            ]),
            Line::from(vec![
                Span::styled("  t", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(" - notification that auto-dismisses after 1.5s"),
            ]),
            Line::from(vec![
                Span::styled("  c", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::raw(" - notification with a custom styling class"),
            ]),
            Line::from(vec![
                Span::styled("  x", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(" - close the newest notification"),
            ]),
            Line::from(""),
            Line::from("Click a notification's close icon to dismiss it."),
            Line::from(""),
            Line::from(format!("Visible notifications: {}", state.alerts.visible().len())),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Alert-Box")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[a]lert [s]uccess [n]otify [t]imed [c]ustom-class [x]close newest [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
