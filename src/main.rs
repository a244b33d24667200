use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};

use euro_explorer::csv_load::{self, Dataset};
use euro_explorer::match_outcome::{self, ScoredMatch};
use euro_explorer::match_store;
use euro_explorer::report_export;
use euro_explorer::state::{AppState, MatchesView, Screen, TeamsView};
use euro_explorer::summary_stats::DescribeRow;

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Teams,
            KeyCode::Char('2') => self.state.screen = Screen::Matches,
            KeyCode::Char('3') => self.state.screen = Screen::Standings,
            KeyCode::Char('v') | KeyCode::Char('V') => self.state.cycle_view(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_attr(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_attr(),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                self.state.cycle_league();
                let label = self.state.league_label();
                self.state.push_log(format!("[INFO] League filter: {label}"));
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.state.cycle_season(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.export_report(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn export_report(&mut self) {
        let path = report_export::default_report_path();
        match report_export::export_report(
            &path,
            &self.state.dataset,
            &self.state.profiles,
            &self.state.scored,
        ) {
            Ok(report) => self.state.push_log(format!(
                "[INFO] Report written to {} ({} sheets, {} rows)",
                path.display(),
                report.sheets,
                report.rows
            )),
            Err(err) => self.state.push_log(format!("[WARN] Report export failed: {err:#}")),
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let data_dir = csv_load::default_data_dir();
    let dataset = csv_load::load_dataset(&data_dir)
        .with_context(|| format!("load dataset from {}", data_dir.display()))?;
    let (scored, scored_source) = load_scored(&dataset)?;

    let mut state = AppState::new(dataset, scored);
    state.push_log(format!(
        "[INFO] Loaded {} matches ({scored_source}), {} team snapshots",
        state.scored.len(),
        state.profiles.len()
    ));
    let mut app = App::new(state);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

/// Prefer derived matches cached in the sqlite store; fall back to a fresh
/// derive pass over the CSV table.
fn load_scored(dataset: &Dataset) -> Result<(Vec<ScoredMatch>, &'static str)> {
    if let Some(db_path) = match_store::default_db_path()
        && db_path.is_file()
        && let Ok(conn) = match_store::open_db(&db_path)
    {
        let stored = match_store::load_scored_matches(&conn)?;
        if !stored.is_empty() {
            return Ok((stored, "sqlite store"));
        }
    }

    let scored = match_outcome::derive_outcomes(&dataset.matches)
        .context("derive match outcomes from csv table")?;
    Ok((scored, "derived from csv"))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        app.state.ensure_derived();
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Teams => render_teams(frame, chunks[1], &app.state),
        Screen::Matches => render_matches(frame, chunks[1], &app.state),
        Screen::Standings => render_standings(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let view = match state.screen {
        Screen::Teams => state.teams_view.label(),
        Screen::Matches => state.matches_view.label(),
        Screen::Standings => "TABLE",
    };
    let screen = match state.screen {
        Screen::Teams => "TEAMS",
        Screen::Matches => "MATCHES",
        Screen::Standings => "STANDINGS",
    };
    let line1 = format!(
        "  __o  EURO EXPLORER 2008-2016 | {screen} | {view} | {}",
        state.league_label()
    );
    let line2 = " /_|_\\".to_string();
    let line3 = "  O O".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Teams | Screen::Matches => {
            "1 Teams | 2 Matches | 3 Standings | v View | j/k Attribute/Scroll | l League | e Export | ? Help | q Quit"
                .to_string()
        }
        Screen::Standings => {
            "1 Teams | 2 Matches | 3 Standings | s Season | j/k Scroll | l League | e Export | ? Help | q Quit"
                .to_string()
        }
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

// --- Teams screen ---------------------------------------------------------

fn render_teams(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.teams_view {
        TeamsView::Overview => render_teams_overview(frame, area, state),
        TeamsView::Describe => render_describe(
            frame,
            area,
            "Team Attribute Statistics",
            state.describe_rows(),
        ),
        TeamsView::Histogram => render_histogram(frame, area, state),
        TeamsView::ClassBars => render_class_bars(frame, area, state),
        TeamsView::Heatmap => render_correlation_heatmap(frame, area, state),
        TeamsView::TopTeams => render_top_teams(frame, area, state),
    }
}

fn render_teams_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(area);

    let mut lines = vec!["Loaded tables:".to_string()];
    for (name, count) in state.dataset.table_counts() {
        lines.push(format!("  {name}: {count}"));
    }
    lines.push(String::new());
    lines.push(format!("Distinct teams: {}", state.distinct_team_count()));
    lines.push(format!("Distinct matches: {}", state.distinct_match_count()));
    let summary = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Dataset").borders(Borders::ALL));
    frame.render_widget(summary, columns[0]);

    let preview_block = Block::default()
        .title("Team Snapshots (j/k scroll)")
        .borders(Borders::ALL);
    let inner = preview_block.inner(columns[1]);
    frame.render_widget(preview_block, columns[1]);

    let visible = inner.height as usize;
    let total = state.profiles.len();
    let start = state.preview_scroll.min(total.saturating_sub(visible));
    let rows: Vec<String> = state.profiles[start..(start + visible).min(total)]
        .iter()
        .map(|p| {
            format!(
                "{:<28} {}  speed {:>3}  pass {:>3}  press {:>3}",
                truncate(&p.team_long_name, 28),
                p.date.map_or_else(|| "----------".to_string(), |d| d.to_string()),
                fmt_opt_num(p.attributes.build_up_play_speed),
                fmt_opt_num(p.attributes.build_up_play_passing),
                fmt_opt_num(p.attributes.defence_pressure),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(rows.join("\n")), inner);
}

fn render_describe(frame: &mut Frame, area: Rect, title: &str, rows: &[DescribeRow]) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if rows.is_empty() {
        let empty =
            Paragraph::new("No values to describe").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = vec![format!(
        "{:<28} {:>6} {:>8} {:>8} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    )];
    for row in rows {
        lines.push(format!(
            "{:<28} {:>6} {:>8.2} {:>8.2} {:>7.1} {:>7.2} {:>7.2} {:>7.2} {:>7.1}",
            truncate(&row.column, 28),
            row.count,
            row.mean,
            row.std,
            row.min,
            row.q1,
            row.median,
            row.q3,
            row.max
        ));
    }
    frame.render_widget(Paragraph::new(lines.join("\n")), inner);
}

fn render_histogram(frame: &mut Frame, area: Rect, state: &AppState) {
    let attr = state.numeric_attr();
    let bins = state.histogram_bins();
    let block = Block::default()
        .title(format!("Histogram of {} (j/k attribute)", attr.label()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if bins.is_empty() {
        let empty = Paragraph::new("No values for this attribute")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::default()
                .value(bin.count)
                .label(format!("{:.0}", bin.lower).into())
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(1);
    frame.render_widget(chart, inner);
}

fn render_class_bars(frame: &mut Frame, area: Rect, state: &AppState) {
    let attr = state.class_attr();
    let shares = state.class_shares();
    let block = Block::default()
        .title(format!("Distribution of {} (j/k attribute)", attr.label()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if shares.is_empty() {
        let empty = Paragraph::new("No class values recorded")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let bars: Vec<Bar> = shares
        .iter()
        .map(|(value, pct)| {
            Bar::default()
                .value(pct.round() as u64)
                .label(truncate(value, 12).into())
                .text_value(format!("{pct:.1}%"))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(13)
        .bar_gap(2)
        .max(100);
    frame.render_widget(chart, inner);
}

fn render_correlation_heatmap(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("Correlation of Team Attributes")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(matrix) = state.correlations() else {
        let empty =
            Paragraph::new("Correlations not ready").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };
    if inner.height < matrix.labels.len() as u16 + 1 || inner.width < 24 + 8 {
        let small = Paragraph::new("Heatmap needs a larger terminal")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(small, inner);
        return;
    }

    const LABEL_W: u16 = 24;
    const CELL_W: u16 = 7;
    let n = matrix.labels.len();

    // Column header row: index numbers matching the row order.
    for (j, _) in matrix.labels.iter().enumerate() {
        let area = Rect {
            x: inner.x + LABEL_W + j as u16 * CELL_W,
            y: inner.y,
            width: CELL_W,
            height: 1,
        };
        let head = Paragraph::new(format!("[{}]", j + 1))
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(head, area);
    }

    for (i, label) in matrix.labels.iter().enumerate() {
        let y = inner.y + 1 + i as u16;
        let label_area = Rect {
            x: inner.x,
            y,
            width: LABEL_W,
            height: 1,
        };
        let name = Paragraph::new(format!("[{}] {}", i + 1, truncate(label, 20)));
        frame.render_widget(name, label_area);

        for j in 0..n {
            let cell_area = Rect {
                x: inner.x + LABEL_W + j as u16 * CELL_W,
                y,
                width: CELL_W,
                height: 1,
            };
            let (text, style) = match matrix.cells[i][j] {
                Some(r) => (
                    format!("{r:>6.2}"),
                    Style::default().fg(Color::Black).bg(coolwarm_color(r)),
                ),
                None => ("     -".to_string(), Style::default().fg(Color::DarkGray)),
            };
            frame.render_widget(Paragraph::new(text).style(style), cell_area);
        }
    }
}

fn render_top_teams(frame: &mut Frame, area: Rect, state: &AppState) {
    let attr = state.numeric_attr();
    let top = state.top_teams();
    let block = Block::default()
        .title(format!("Top 10 Teams by {} (j/k attribute)", attr.label()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if top.is_empty() {
        let empty =
            Paragraph::new("No attribute values").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let max_value = top.first().map(|(_, v)| *v).unwrap_or(1.0).max(1.0);
    let bar_budget = inner.width.saturating_sub(44) as usize;
    let lines: Vec<String> = top
        .iter()
        .enumerate()
        .map(|(idx, (name, value))| {
            let bar_len = ((value / max_value) * bar_budget as f64).round() as usize;
            format!(
                "{:>2}. {:<30} {:>6.2} {}",
                idx + 1,
                truncate(name, 30),
                value,
                "█".repeat(bar_len.min(bar_budget))
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines.join("\n")), inner);
}

// --- Matches screen -------------------------------------------------------

fn render_matches(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.matches_view {
        MatchesView::Overview => render_matches_overview(frame, area, state),
        MatchesView::HomeCrosstab | MatchesView::AwayCrosstab => {
            render_crosstab(frame, area, state)
        }
    }
}

fn render_matches_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(area);

    render_describe(
        frame,
        rows[0],
        "Derived Match Columns",
        &state.match_describe_rows(),
    );

    let preview_block = Block::default()
        .title("Scored Matches (j/k scroll)")
        .borders(Borders::ALL);
    let inner = preview_block.inner(rows[1]);
    frame.render_widget(preview_block, rows[1]);

    let filtered = state.filtered_matches();
    let visible = inner.height as usize;
    let total = filtered.len();
    let start = state.preview_scroll.min(total.saturating_sub(visible));
    let lines: Vec<String> = filtered[start..(start + visible).min(total)]
        .iter()
        .map(|m| {
            format!(
                "{}  {}  stage {:>2}  {:>6} v {:<6}  {}-{}  {}/{}  pts {}:{}",
                m.row.date.get(..10).unwrap_or(&m.row.date),
                m.row.season,
                m.row.stage,
                m.row.home_team_api_id,
                m.row.away_team_api_id,
                m.facts.home_goals,
                m.facts.away_goals,
                m.facts.home_result.code(),
                m.facts.away_result.code(),
                m.facts.home_points,
                m.facts.away_points,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines.join("\n")), inner);
}

fn render_crosstab(frame: &mut Frame, area: Rect, state: &AppState) {
    let side_label = match state.matches_view {
        MatchesView::AwayCrosstab => "Away",
        _ => "Home",
    };
    let block = Block::default()
        .title(format!(
            "{} vs {side_label} Results, % of all pairs (j/k attribute)",
            state.class_attr().label()
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(tab) = state.crosstab() else {
        let empty =
            Paragraph::new("Crosstab not ready").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };
    if tab.is_empty() {
        let empty = Paragraph::new("No (snapshot, match) pairs for this selection")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    const LABEL_W: u16 = 16;
    const CELL_W: u16 = 9;
    let header_style = Style::default().add_modifier(Modifier::BOLD);
    for (j, result) in tab.results.iter().enumerate() {
        let head_area = Rect {
            x: inner.x + LABEL_W + j as u16 * CELL_W,
            y: inner.y,
            width: CELL_W,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(result.label()).style(header_style),
            head_area,
        );
    }

    let max = tab.max_cell().max(f64::EPSILON);
    for (i, class_value) in tab.class_values.iter().enumerate() {
        let y = inner.y + 1 + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let label_area = Rect {
            x: inner.x,
            y,
            width: LABEL_W,
            height: 1,
        };
        frame.render_widget(Paragraph::new(truncate(class_value, 15)), label_area);

        for (j, value) in tab.cells[i].iter().enumerate() {
            let cell_area = Rect {
                x: inner.x + LABEL_W + j as u16 * CELL_W,
                y,
                width: CELL_W,
                height: 1,
            };
            let style = Style::default()
                .fg(Color::Black)
                .bg(sequential_color(value / max));
            frame.render_widget(
                Paragraph::new(format!("{value:>7.2}")).style(style),
                cell_area,
            );
        }
    }
}

// --- Standings screen -----------------------------------------------------

fn render_standings(frame: &mut Frame, area: Rect, state: &AppState) {
    let league = state
        .standings_league()
        .map(|(_, name)| name)
        .unwrap_or_else(|| "no league".to_string());
    let season = state
        .standings_season()
        .unwrap_or_else(|| "no season".to_string());
    let block = Block::default()
        .title(format!("{league} {season} (s season, j/k scroll)"))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = state.standings_rows();
    if rows.is_empty() {
        let empty = Paragraph::new("No matches for this league and season")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = vec![format!(
        "{:>3} {:<30} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5} {:>4}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    )];
    let visible = (inner.height as usize).saturating_sub(1);
    let start = state.preview_scroll.min(rows.len().saturating_sub(visible));
    for (idx, row) in rows.iter().enumerate().skip(start).take(visible) {
        lines.push(format!(
            "{:>3} {:<30} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5} {:>4}",
            idx + 1,
            truncate(&row.team_name, 30),
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.goals_for,
            row.goals_against,
            row.goal_diff,
            row.points
        ));
    }
    frame.render_widget(Paragraph::new(lines.join("\n")), inner);
}

// --- shared helpers -------------------------------------------------------

fn truncate(raw: &str, max: usize) -> String {
    if raw.chars().count() <= max {
        raw.to_string()
    } else {
        raw.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}

fn fmt_opt_num(value: Option<f64>) -> String {
    value.map_or_else(|| "  -".to_string(), |v| format!("{v:>3.0}"))
}

/// Diverging blue-white-red ramp for correlations in [-1, 1].
fn coolwarm_color(r: f64) -> Color {
    let t = r.clamp(-1.0, 1.0);
    let (from, to, f) = if t < 0.0 {
        ((221, 221, 221), (59, 76, 192), -t)
    } else {
        ((221, 221, 221), (180, 4, 38), t)
    };
    Color::Rgb(
        lerp_channel(from.0, to.0, f),
        lerp_channel(from.1, to.1, f),
        lerp_channel(from.2, to.2, f),
    )
}

/// Light-to-dark sequential ramp for crosstab shares in [0, 1].
fn sequential_color(t: f64) -> Color {
    let f = t.clamp(0.0, 1.0);
    Color::Rgb(
        lerp_channel(237, 34, f),
        lerp_channel(248, 94, f),
        lerp_channel(177, 168, f),
    )
}

fn lerp_channel(from: u8, to: u8, f: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * f).round() as u8
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Euro Explorer - Help",
        "",
        "Global:",
        "  1            Teams screen",
        "  2            Matches screen",
        "  3            Standings screen",
        "  v            Cycle view on this screen",
        "  j/k or ↑/↓   Change attribute / scroll",
        "  l            Cycle league filter",
        "  s            Cycle season (standings)",
        "  e            Export xlsx report",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Teams views: overview, describe, histogram,",
        "  class bars, correlation heatmap, top teams.",
        "Matches views: overview, home/away crosstab.",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
