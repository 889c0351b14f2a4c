//! Sortrace - Terminal User Interface
//!
//! Two bar charts side by side, one per algorithm, advancing one step per
//! frame until both are sorted. App logic lives in `sortrace::tui::race_app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use sortrace::config::RaceConfig;
    use sortrace::tui::race_app::RaceApp;
    use tracing_subscriber::EnvFilter;

    // Logging would draw over the alternate screen, so it stays off unless asked for
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let loaded = match args.get(1) {
        Some(path) => RaceApp::from_yaml_file(path),
        None => RaceApp::new(RaceConfig::default()),
    };

    let app = match loaded {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: race-tui [path/to/race.yaml]");
            std::process::exit(1);
        }
    };

    tui::run(app)
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with: cargo run --bin race-tui --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Alignment, Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
        Frame, Terminal,
    };
    use sortrace::engine::Side;
    use sortrace::renderers::LaneView;
    use sortrace::tui::race_app::RaceApp;
    use std::io;
    use std::time::{Duration, Instant};

    pub fn run(mut app: RaceApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let tick_rate = app.tick_rate();
        let result = run_main_loop(&mut terminal, &mut app, tick_rate);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        if let Some(winner) = app.board.winner() {
            println!("{winner}");
        }

        result
    }

    fn run_main_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut RaceApp,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| ui(f, app))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app.update();
                last_tick = Instant::now();
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn ui(f: &mut Frame, app: &RaceApp) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(Span::styled(
            app.board.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, rows[0]);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let scale = u64::try_from(app.board.chart_ceiling()).unwrap_or(0).max(1);
        draw_lane(f, halves[0], app, Side::Left, Color::Cyan, scale);
        draw_lane(f, halves[1], app, Side::Right, Color::Magenta, scale);
        draw_status(f, rows[2], app);
    }

    fn draw_lane(f: &mut Frame, area: Rect, app: &RaceApp, side: Side, color: Color, scale: u64) {
        let lane = app.board.lane(side);
        let block = Block::default()
            .title(app.chart_title(side))
            .title_bottom(Line::from(lane.caption()).alignment(Alignment::Center))
            .borders(Borders::ALL);

        let inner_width = area.width.saturating_sub(2);
        let (bar_width, bar_gap) = bar_geometry(inner_width, lane.values.len());

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars(lane, color)))
            .bar_width(bar_width)
            .bar_gap(bar_gap)
            .max(scale);

        f.render_widget(chart, area);
    }

    fn bars(lane: &LaneView, color: Color) -> Vec<Bar<'static>> {
        lane.values
            .iter()
            .map(|&v| {
                Bar::default()
                    .value(u64::try_from(v).unwrap_or(0))
                    .text_value(String::new())
                    .style(Style::default().fg(color))
            })
            .collect()
    }

    /// Fit `count` bars into `width` columns, dropping the gap first.
    fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
        let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
        let with_gap = width / count;
        if with_gap >= 2 {
            (with_gap - 1, 1)
        } else {
            (with_gap.max(1), 0)
        }
    }

    fn draw_status(f: &mut Frame, area: Rect, app: &RaceApp) {
        let style = if app.board.winner().is_some() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if app.driver.is_capped() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };

        let status = Paragraph::new(Line::from(Span::styled(app.status_line(), style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(status, area);
    }
}
