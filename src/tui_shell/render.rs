use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::palette::{Section, categories_present, flatten, group_by_category, resolve};
use crate::providers::{LayoutMode, ThemeMode};

use super::app::App;

struct Colors {
    text: Color,
    dim: Color,
    accent: Color,
    error: Color,
}

fn colors(theme: ThemeMode) -> Colors {
    match theme {
        ThemeMode::Dark => Colors {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::Red,
        },
        ThemeMode::Light => Colors {
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            error: Color::LightRed,
        },
    }
}

pub(super) fn draw(frame: &mut Frame, app: &App) {
    let p = app.providers.borrow();
    let c = colors(p.theme.mode);
    let area = frame.area();

    let terminal_height = if p.layout.bottom_panel { 10 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(terminal_height),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let connected = p
        .chain
        .connected_network()
        .map_or_else(|| "offline".to_string(), |n| format!("chain: {n}"));
    let header = Paragraph::new(Line::from(vec![
        Span::styled("chaindeck", Style::default().fg(Color::Black).bg(c.accent)),
        Span::raw("  "),
        Span::styled(connected, Style::default().fg(c.dim)),
        Span::raw("  "),
        Span::styled("Ctrl+K palette", Style::default().fg(c.dim)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    draw_body(frame, &p, &c, chunks[1]);
    if p.layout.bottom_panel {
        draw_terminal(frame, app, &c, chunks[2]);
    }

    // Footer: last dispatch outcome or key hints.
    let footer = match &app.status {
        Some((msg, true)) => Line::from(Span::styled(msg.clone(), Style::default().fg(c.accent))),
        Some((msg, false)) => Line::from(Span::styled(msg.clone(), Style::default().fg(c.error))),
        None => Line::from(Span::styled(
            "Enter run | Up/Down recall | Ctrl+K palette | Ctrl+Q quit",
            Style::default().fg(c.dim),
        )),
    };
    frame.render_widget(Paragraph::new(footer), chunks[3]);

    if app.palette.is_some() {
        draw_palette(frame, app, &c, area);
    }
}

fn draw_body(frame: &mut Frame, p: &crate::providers::Providers, c: &Colors, area: Rect) {
    match p.layout.mode {
        LayoutMode::Single => draw_portfolio(frame, p, c, area),
        LayoutMode::Columns => {
            let mut constraints = Vec::new();
            if p.layout.left_panel {
                constraints.push(Constraint::Length(26));
            }
            constraints.push(Constraint::Min(0));
            if p.layout.right_panel {
                constraints.push(Constraint::Length(34));
            }
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);

            let mut idx = 0;
            if p.layout.left_panel {
                draw_market(frame, p, c, cols[idx]);
                idx += 1;
            }
            draw_portfolio(frame, p, c, cols[idx]);
            if p.layout.right_panel {
                draw_analytics(frame, p, c, cols[idx + 1]);
            }
        }
        LayoutMode::Grid => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            let top = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);
            let bottom = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[1]);
            draw_market(frame, p, c, top[0]);
            draw_portfolio(frame, p, c, top[1]);
            draw_analytics(frame, p, c, bottom[0]);
            draw_chain(frame, p, c, bottom[1]);
        }
    }
}

fn panel<'a>(title: &'a str, c: &Colors) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(c.accent)))
}

fn draw_market(frame: &mut Frame, p: &crate::providers::Providers, c: &Colors, area: Rect) {
    let lines: Vec<Line> = p
        .market
        .quotes()
        .into_iter()
        .map(|q| {
            Line::from(vec![
                Span::styled(format!("{:<6}", q.symbol), Style::default().fg(c.text)),
                Span::styled(format!("{:>10.2}", q.price), Style::default().fg(c.dim)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel("Market", c)), area);
}

fn draw_portfolio(frame: &mut Frame, p: &crate::providers::Providers, c: &Colors, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Value     ${:.2}", p.market.portfolio_value()),
            Style::default().fg(c.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Selected  {}", p.market.selected_symbol),
            Style::default().fg(c.text),
        )),
        Line::from(Span::styled(
            format!("Sentiment {}", p.market.sentiment()),
            Style::default().fg(c.dim),
        )),
        Line::from(Span::styled(
            format!("Orders    {}", p.market.orders().len()),
            Style::default().fg(c.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Portfolio", c)), area);
}

fn draw_analytics(frame: &mut Frame, p: &crate::providers::Providers, c: &Colors, area: Rect) {
    let mut lines: Vec<Line> = p
        .analytics
        .reports()
        .iter()
        .rev()
        .take(8)
        .map(|r| {
            Line::from(Span::styled(
                format!("{} ({})", r.kind, r.window),
                Style::default().fg(c.text),
            ))
        })
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "no reports yet",
            Style::default().fg(c.dim),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("Analytics", c)), area);
}

fn draw_chain(frame: &mut Frame, p: &crate::providers::Providers, c: &Colors, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        p.chain
            .connected_network()
            .map_or_else(|| "not connected".to_string(), |n| format!("network: {n}")),
        Style::default().fg(c.text),
    ))];
    for contract in p.chain.deployed() {
        lines.push(Line::from(Span::styled(
            format!("deployed {contract}"),
            Style::default().fg(c.dim),
        )));
    }
    frame.render_widget(Paragraph::new(lines).block(panel("Chain", c)), area);
}

fn draw_terminal(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let inner = panel("Terminal", c).inner(area);
    frame.render_widget(panel("Terminal", c), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for rec in app.term.records() {
        lines.push(Line::from(vec![
            Span::styled("$ ", Style::default().fg(c.accent)),
            Span::styled(rec.input.clone(), Style::default().fg(c.text)),
        ]));
        let style = if rec.success {
            Style::default().fg(c.dim)
        } else {
            Style::default().fg(c.error)
        };
        for out in rec.output.lines() {
            lines.push(Line::from(Span::styled(format!("  {out}"), style)));
        }
    }
    let visible = rows[0].height as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let prompt = Line::from(vec![
        Span::styled("$ ", Style::default().fg(c.accent)),
        Span::styled(app.input.buf.clone(), Style::default().fg(c.text)),
    ]);
    frame.render_widget(Paragraph::new(prompt), rows[1]);
}

fn draw_palette(frame: &mut Frame, app: &App, c: &Colors, area: Rect) {
    let Some(pal) = app.palette.as_ref() else {
        return;
    };

    let width = area.width.saturating_sub(8).min(72);
    let height = area.height.saturating_sub(4).min(22);
    let overlay = Rect {
        x: (area.width - width) / 2,
        y: (area.height - height) / 3,
        width,
        height,
    };

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Command Palette", Style::default().fg(c.accent)));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ];
    if pal.preview {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    // Query line
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(c.accent)),
            Span::styled(pal.query.clone(), Style::default().fg(c.text)),
        ])),
        rows[0],
    );

    let candidates = resolve(&pal.query, &app.registry, &app.cfg.fuzzy);
    let categories = categories_present(&candidates);
    let groups = group_by_category(&candidates, pal.selection.selected_category);
    let visible = flatten(&groups);

    // Category strip
    let mut spans = Vec::new();
    for cat in &categories {
        let selected = pal.selection.selected_category == Some(*cat);
        let mut style = if selected {
            Style::default().fg(Color::Black).bg(c.accent)
        } else {
            Style::default().fg(c.dim)
        };
        if selected && pal.selection.focused == Section::Categories {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {cat} "), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);

    // Grouped command list
    let mut lines: Vec<Line> = Vec::new();
    let mut flat_idx = 0usize;
    for (cat, bucket) in &groups {
        lines.push(Line::from(Span::styled(
            cat.to_string(),
            Style::default().fg(c.dim).add_modifier(Modifier::BOLD),
        )));
        for cand in bucket {
            let highlighted =
                pal.selection.focused == Section::Commands && flat_idx == pal.selection.highlighted;
            let style = if highlighted {
                Style::default().fg(Color::Black).bg(c.accent)
            } else {
                Style::default().fg(c.text)
            };
            let shortcut = cand
                .entry
                .shortcut
                .as_deref()
                .map(|s| format!("  [{s}]"))
                .unwrap_or_default();
            lines.push(Line::from(Span::styled(
                format!("  {}{shortcut}", cand.entry.title),
                style,
            )));
            flat_idx += 1;
        }
    }
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "no matching commands",
            Style::default().fg(c.dim),
        )));
    }
    frame.render_widget(Paragraph::new(lines), rows[2]);

    // Detail pane for the highlighted command.
    if pal.preview {
        let detail = match visible.get(pal.selection.highlighted) {
            Some(cand) => {
                let e = cand.entry;
                let meta = match e.shortcut.as_deref() {
                    Some(s) => format!("{}  [{s}]", e.category),
                    None => e.category.to_string(),
                };
                vec![
                    Line::from(Span::styled(
                        e.description.clone().unwrap_or_else(|| e.title.clone()),
                        Style::default().fg(c.text),
                    )),
                    Line::from(Span::styled(meta, Style::default().fg(c.dim))),
                ]
            }
            None => vec![Line::from(Span::styled(
                "nothing highlighted",
                Style::default().fg(c.dim),
            ))],
        };
        frame.render_widget(Paragraph::new(detail), rows[3]);
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab section | Alt+1-9 category | Ctrl+Space preview | Ctrl+B/M/A filter | Ctrl+P/N history | Esc close",
            Style::default().fg(c.dim),
        ))),
        rows[rows.len() - 1],
    );
}
