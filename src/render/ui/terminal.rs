//! Terminal UI implementation using ratatui
//!
//! Draws the board (two columns per cell), the side panel, the status line and the
//! Menu / Paused / Game Over overlays from a [`ViewState`].

use crate::error::{Result, SnakeError};
use crate::game::{Cell, FoodKind, GameState};
use crate::render::protocol::GameSnapshot;
use crate::render::ui::renderer::UIRenderer;
use crate::render::ui::state::{ViewState, SIDE_PANEL_WIDTH};
use crate::render::ui::theme::ColorTheme;
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const SNAKE_GLYPH: &str = "██";
const EMPTY_GLYPH: &str = "  ";

fn food_glyph(kind: FoodKind) -> &'static str {
    match kind {
        FoodKind::Normal => "()",
        FoodKind::Mega => "[]",
        _ => "<>",
    }
}

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// One line per board row, two terminal columns per cell.
    fn board_lines(snapshot: &GameSnapshot, theme: &ColorTheme) -> Vec<Line<'static>> {
        let width = usize::from(snapshot.board_width);
        let height = usize::from(snapshot.board_height);
        let mut grid: Vec<Option<(&'static str, Style)>> = vec![None; width * height];

        let index = |cell: Cell| -> Option<usize> {
            let x = usize::try_from(cell.x).ok()?;
            let y = usize::try_from(cell.y).ok()?;
            (x < width && y < height).then_some(y * width + x)
        };

        if let Some(food) = snapshot.food {
            if let Some(i) = index(food.cell) {
                grid[i] = Some((food_glyph(food.kind), theme.food_style(food.kind)));
            }
        }

        // Reverse so the head is painted last.
        for (position, &cell) in snapshot.snake.iter().enumerate().rev() {
            let Some(i) = index(cell) else {
                continue;
            };
            let style = if position > 0 {
                theme.snake_body
            } else if snapshot.timers.phase.is_some() {
                theme.snake_head_phase
            } else {
                theme.snake_head
            };
            grid[i] = Some((SNAKE_GLYPH, style));
        }

        grid.chunks(width.max(1))
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|slot| match slot {
                            Some((glyph, style)) => Span::styled(*glyph, *style),
                            None => Span::raw(EMPTY_GLYPH),
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    fn panel_lines(snapshot: &GameSnapshot, theme: &ColorTheme) -> Vec<Line<'static>> {
        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<12}", label), theme.label),
                Span::styled(value, theme.highlight),
            ])
        };

        let mut lines = vec![
            row("Score", snapshot.score.to_string()),
            row("High score", snapshot.high_score.to_string()),
            row("Level", snapshot.level.to_string()),
            row(
                "Progress",
                format!("{}/{}", snapshot.foods_this_level, snapshot.foods_needed),
            ),
            row("Length", snapshot.snake.len().to_string()),
            row("Difficulty", snapshot.difficulty.to_string()),
            row("Combo", format!("x{}", snapshot.combo_multiplier)),
            row("Multiplier", format!("x{}", snapshot.score_multiplier)),
            Line::default(),
        ];

        let timers = [
            ("SPEED", snapshot.timers.speed),
            ("DOUBLE", snapshot.timers.double_score),
            ("PHASE", snapshot.timers.phase),
        ];
        for (name, remaining) in timers {
            if let Some(remaining) = remaining {
                lines.push(row(name, format_seconds(remaining)));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(
                "Achievements {}/{}",
                snapshot.achievements_unlocked, snapshot.achievements_total
            ),
            theme.label,
        )));
        if let Some((name, percent)) = snapshot.next_achievement {
            lines.push(row("Next", format!("{} {}%", name, percent)));
        }
        lines
    }

    fn overlay_lines(snapshot: &GameSnapshot) -> Option<(&'static str, Vec<Line<'static>>)> {
        match snapshot.state {
            GameState::Playing => None,
            GameState::Menu => Some((
                " SWIPE SNAKE ",
                vec![
                    Line::from(format!("Difficulty: {}", snapshot.difficulty)),
                    Line::from("1 Easy  2 Normal  3 Hard"),
                    Line::default(),
                    Line::from("Press Enter or tap to start"),
                    Line::from("Swipe or use arrows to steer"),
                ],
            )),
            GameState::Paused => Some((
                " PAUSED ",
                vec![Line::from("Press P or tap to resume")],
            )),
            GameState::GameOver => Some((
                " GAME OVER ",
                vec![
                    Line::from(format!("Score: {}", snapshot.score)),
                    Line::from(format!("High score: {}", snapshot.high_score)),
                    Line::from(format!("Level: {}", snapshot.level)),
                    Line::default(),
                    Line::from("R to restart, Enter for menu"),
                ],
            )),
        }
    }

    fn render_frame(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
        let size = frame.size();

        // Split screen: play area and status line
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(size);

        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        frame.render_widget(
            Paragraph::new(view_state.format_status_line()).style(status_style),
            rows[1],
        );

        if !view_state.fits_terminal() {
            let (width, height) = view_state.required_size();
            let warning = Paragraph::new(format!(
                "Terminal too small: need {}x{}, have {}x{}",
                width, height, size.width, size.height
            ))
            .alignment(Alignment::Center);
            frame.render_widget(warning, rows[0]);
            return;
        }

        let snapshot = &view_state.snapshot;
        let board_width = snapshot.board_width.saturating_mul(2).saturating_add(2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                [
                    Constraint::Length(board_width),
                    Constraint::Length(SIDE_PANEL_WIDTH),
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(rows[0]);

        let board_area = Rect {
            height: columns[0]
                .height
                .min(snapshot.board_height.saturating_add(2)),
            ..columns[0]
        };
        let board = Paragraph::new(Self::board_lines(snapshot, theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        );
        frame.render_widget(board, board_area);

        let panel = Paragraph::new(Self::panel_lines(snapshot, theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(" Stats "),
        );
        frame.render_widget(panel, columns[1]);

        if let Some((title, lines)) = Self::overlay_lines(snapshot) {
            let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
            let area = centered_rect(board_area, 34, height);
            let overlay = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(theme.overlay)
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(Clear, area);
            frame.render_widget(overlay, area);
        }
    }
}

fn format_seconds(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f32())
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            // Extract theme before closure to avoid borrowing issues
            let theme = &self.theme;
            terminal.draw(move |frame| Self::render_frame(frame, view_state, theme))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)
            .map_err(|err| SnakeError::ui(format!("creating terminal: {}", err)))?;
        terminal.hide_cursor()?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            terminal.show_cursor()?;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
