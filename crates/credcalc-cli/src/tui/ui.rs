use credcalc_core::{Summary, COST_PER_MESSAGE, COST_PER_MINUTE};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use super::app::{App, Field};

/// Render the full TUI frame.
pub fn render(f: &mut Frame, app: &App) {
    let summary = app.session.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // plan selector
            Constraint::Min(10),   // main area
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    render_plan_tabs(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // plan card
            Constraint::Percentage(55), // calculator
        ])
        .split(chunks[1]);

    render_plan_card(f, &summary, main_chunks[0]);
    render_calculator(f, app, &summary, main_chunks[1]);
    render_status_bar(f, chunks[2]);
}

fn render_plan_tabs(f: &mut Frame, app: &App, area: Rect) {
    let catalog = app.session.catalog();
    let titles: Vec<Line> = catalog
        .plans()
        .iter()
        .map(|p| Line::from(format!(" {} ", p.name)))
        .collect();
    let selected = catalog.position(&app.session.plan().id).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().title(" Plan ").borders(Borders::ALL))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_plan_card(f: &mut Frame, summary: &Summary, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", summary.plan_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                summary.price.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" /month"),
        ]),
        Line::from(Span::styled(
            summary.description.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!("{} credits", summary.credits)),
        Line::from(""),
    ];
    for feature in &summary.features {
        lines.push(Line::from(vec![
            Span::styled(" + ", Style::default().fg(Color::Green)),
            Span::raw(feature.clone()),
        ]));
    }

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(card, area);
}

fn render_calculator(f: &mut Frame, app: &App, summary: &Summary, area: Rect) {
    let warning = summary.overage_warning();
    let warning_height = if warning.is_some() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(warning_height), // overage warning
            Constraint::Length(3),              // messages
            Constraint::Length(3),              // minutes
            Constraint::Min(5),                 // consumption summary
        ])
        .split(area);

    if let Some(text) = warning {
        let alert = Paragraph::new(text)
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .title(" Over plan ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(alert, chunks[0]);
    }

    render_slider(
        f,
        app.focus == Field::Messages,
        &format!(
            " Messages sent: {} = {} credits ",
            summary.messages, summary.message_credits
        ),
        summary.messages,
        summary.max_messages,
        chunks[1],
    );
    render_slider(
        f,
        app.focus == Field::Minutes,
        &format!(
            " Call minutes: {} = {} credits ",
            summary.minutes, summary.call_credits
        ),
        summary.minutes,
        summary.max_minutes,
        chunks[2],
    );

    render_consumption(f, summary, chunks[3]);
}

fn render_slider(f: &mut Frame, focused: bool, title: &str, value: u64, max: u64, area: Rect) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(border),
        )
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(slider_ratio(value, max))
        .label(format!("{value} / max {max}"));
    f.render_widget(gauge, area);
}

fn render_consumption(f: &mut Frame, summary: &Summary, area: Rect) {
    let remaining_style = if summary.is_overage {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let lines = vec![
        row("Plan credits:", summary.credits.to_string(), Style::default()),
        row(
            "Total consumed:",
            summary.total_consumed.to_string(),
            Style::default(),
        ),
        row(
            "Remaining credits:",
            summary.display_remaining.to_string(),
            remaining_style,
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                " 1 message = {COST_PER_MESSAGE} credit, 1 call minute = {COST_PER_MINUTE} credits"
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let block = Block::default()
        .title(" Consumption summary ")
        .borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn row(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(" {label:<20}")),
        Span::styled(value, value_style),
    ])
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let text = " credcalc | <-/->:plan  Tab:field  Up/Down:+-1  PgUp/PgDn:+-10%  Home/End:min/max  0-9/Bksp:edit  q:quit";
    let bar = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).bg(Color::DarkGray),
    )));
    f.render_widget(bar, area);
}

/// Fill ratio for a slider; 0 when the plan cannot cover a single unit.
fn slider_ratio(value: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        (value as f64 / max as f64).clamp(0.0, 1.0)
    }
}
