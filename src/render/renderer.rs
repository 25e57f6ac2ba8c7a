use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{BoardView, CellId, Coord, Status};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &BoardView<'_>, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(2), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.stats_line(view, stats), chunks[0]);

        // Two columns per cell plus the border
        let size = view.board.size();
        let board_width = u16::try_from(size * 2 + 2).unwrap_or(u16::MAX);
        let board_height = u16::try_from(size + 2).unwrap_or(u16::MAX);
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(board_width),
            Constraint::Fill(1),
        ])
        .areas(chunks[1]);
        let [board_area, _] =
            Layout::vertical([Constraint::Length(board_height), Constraint::Fill(1)]).areas(column);

        frame.render_widget(self.board(view), board_area);
        frame.render_widget(self.footer(view), chunks[2]);
    }

    fn board(&self, view: &BoardView<'_>) -> Paragraph<'static> {
        let size = view.board.size() as i32;
        let lines: Vec<Line> = (0..size)
            .map(|row| {
                Line::from(
                    (0..size)
                        .map(|col| self.cell(view, view.board.cell_of(Coord::new(row, col))))
                        .collect::<Vec<Span>>(),
                )
            })
            .collect();

        let border = match view.status {
            Status::Running => Color::White,
            Status::GameOver(_) => Color::Red,
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border))
                .title(" Snake "),
        )
    }

    fn cell(&self, view: &BoardView<'_>, cell: CellId) -> Span<'static> {
        if cell == view.head {
            Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else if view.occupied.contains(&cell) {
            Span::styled("□ ", Style::default().fg(Color::Green))
        } else if let Some(food) = view.food.filter(|food| food.cell == cell) {
            // Reversing food is drawn in a different colour
            let color = if food.reverses {
                Color::Magenta
            } else {
                Color::Red
            };
            Span::styled(
                "● ",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(". ", Style::default().fg(Color::DarkGray))
        }
    }

    fn stats_line(&self, view: &BoardView<'_>, stats: &SessionStats) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.best_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}ms", view.tick_interval_ms),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn footer(&self, view: &BoardView<'_>) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(2);

        if let Some(message) = view.game_over_message() {
            lines.push(Line::from(vec![
                Span::styled(
                    "GAME OVER",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(": the snake {message}"),
                    Style::default().fg(Color::Gray),
                ),
            ]));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]));

        Paragraph::new(lines).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EndReason, GameConfig, GameEngine};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(view: &BoardView<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let stats = SessionStats::new();
        terminal
            .draw(|frame| Renderer::new().render(frame, view, &stats))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_snake_food_and_score() {
        let mut engine = GameEngine::seeded(GameConfig::default(), 1);
        let state = engine.reset();
        let screen = draw(&state.view());

        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("250ms"));
        assert!(screen.contains('■'));
        assert!(screen.contains('●'));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_renders_end_reason() {
        let mut engine = GameEngine::seeded(GameConfig::default(), 1);
        let mut state = engine.reset();
        state.status = Status::GameOver(EndReason::HitWall);

        let screen = draw(&state.view());
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("hit the wall"));
    }

    #[test]
    fn test_board_larger_than_terminal_is_clipped() {
        let mut engine = GameEngine::seeded(GameConfig::new(200), 1);
        let state = engine.reset();

        // Only the header survives a board far wider than the backend
        let screen = draw(&state.view());
        assert!(screen.contains("Score: 0"));
    }
}
