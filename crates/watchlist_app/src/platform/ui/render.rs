use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use watchlist_core::{AppViewModel, DetailView, RatingView, ResultRowView, WatchedSummary};

use super::layout;

const ACCENT: Color = Color::Rgb(0x67, 0x41, 0xd9);
const ERROR: Color = Color::Rgb(0xfa, 0x52, 0x52);

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(frame.area());

    render_nav(frame, areas.nav, view);
    render_results_box(frame, areas.results, view);
    render_side_box(frame, areas.side, view);
    render_rating(frame, areas.rating, &view.rating);
    frame.render_widget(
        Paragraph::new(
            "Type to search | ↑/↓ move | Enter select | Esc close | F1/F2 collapse | ←/→ F5 rate | Ctrl+C quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
        areas.footer,
    );
}

fn render_nav(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = Line::from(vec![
        Span::styled(
            "🎫 Movie  ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Search: "),
        Span::styled(
            format!("{}_", view.query),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   Found {} results", view.result_count)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        area,
    );
}

fn panel_block(title: &str, open: bool, key: &str) -> Block<'static> {
    let marker = if open { "–" } else { "+" };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" [{marker}] {title} ({key}) "))
}

fn render_results_box(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = panel_block("Results", view.results_open, "F1");
    if !view.results_open {
        frame.render_widget(block, area);
        return;
    }

    if view.is_loading {
        frame.render_widget(Paragraph::new("Loading...").block(block), area);
        return;
    }
    if let Some(error) = &view.error {
        frame.render_widget(
            Paragraph::new(format!("⛔ {error}"))
                .style(Style::default().fg(ERROR))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = view.results.iter().map(result_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn result_item(row: &ResultRowView) -> ListItem<'static> {
    let marker = if row.selected { "* " } else { "  " };
    let mut style = Style::default();
    if row.highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }
    ListItem::new(format!("{marker}{} 📅 {}", row.title, row.year)).style(style)
}

fn render_side_box(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = panel_block("Watched", view.watched_open, "F2");
    if !view.watched_open {
        frame.render_widget(block, area);
        return;
    }

    let lines = match &view.details {
        Some(details) => detail_lines(details),
        None => {
            let mut lines = summary_lines(&view.summary);
            lines.push(Line::raw(""));
            lines.extend(view.watched.iter().map(|movie| {
                Line::raw(format!(
                    "{}  🎬 {}  🌟 {}  ⏳ {} min",
                    movie.title, movie.imdb_rating, movie.user_rating, movie.runtime_minutes
                ))
            }));
            lines
        }
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn detail_lines(details: &DetailView) -> Vec<Line<'static>> {
    let heading = details.title.clone().unwrap_or_else(|| details.imdb_id.clone());
    let mut lines = vec![Line::styled(
        heading,
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(year) = &details.year {
        lines.push(Line::raw(format!("📅 {year}")));
    }
    lines.push(Line::raw(format!("IMDb id: {}", details.imdb_id)));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    ));
    lines
}

fn summary_lines(summary: &WatchedSummary) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            "MOVIES YOU WATCHED",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!(
            "#️⃣ {} movies  🎬 {}  🌟 {}  ⏳ {} min",
            summary.count,
            format_average(summary.avg_imdb_rating, 1),
            format_average(summary.avg_user_rating, 1),
            format_average(summary.avg_runtime, 0),
        )),
    ]
}

pub(crate) fn format_average(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{value:.decimals$}"),
        None => "–".to_string(),
    }
}

fn render_rating(frame: &mut Frame, area: Rect, rating: &RatingView) {
    let color = rating.color.parse::<Color>().unwrap_or(Color::Yellow);
    frame.render_widget(
        Paragraph::new(star_line(rating, color)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Rate (←/→, F5) "),
        ),
        area,
    );
}

/// Star glyphs are spaced by the configured size (one extra column per 24px).
pub(crate) fn star_line(rating: &RatingView, color: Color) -> Line<'static> {
    let gap = " ".repeat(usize::from(rating.size / 24).clamp(1, 4));
    let mut spans = Vec::with_capacity(usize::from(rating.max) + 1);
    for star in 1..=rating.max {
        let glyph = if star <= rating.filled { "★" } else { "☆" };
        spans.push(Span::styled(
            format!("{glyph}{gap}"),
            Style::default().fg(color),
        ));
    }
    spans.push(Span::styled(
        rating.label.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    Line::from(spans)
}
