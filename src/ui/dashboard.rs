use crate::config::{
    finishing_schedule, handover_profile, package_profile, OWNER_SUPPLIED, TECHNICAL_SPECS,
};
use crate::display::{format_area, format_millions, format_vnd};
use crate::form::FormField;
use crate::model::ConstructionInput;
use crate::ui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    },
    Frame,
};

// Brand colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const SECTION_STYLE: Style = Style::new().fg(BRAND_MUTED).add_modifier(Modifier::ITALIC);
const MONEY_COLOR: Color = BRAND_GREEN;
const TOTAL_COLOR: Color = BRAND_ORANGE;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);

    let help = app.status.as_deref().unwrap_or(
        " ↑↓ Field | ←→ Change | Space Toggle | t Specs | PgUp/PgDn Scroll | s Save | q Quit ",
    );
    draw_footer(frame, chunks[2], help);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Construction Estimator | {} | {} | {} | pricing {} ",
        app.input.location.label(),
        app.input.package_type.label(),
        format_area(app.result.total_converted_area),
        app.config.version
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(40), // Form
        Constraint::Percentage(60), // Estimate
    ])
    .split(area);

    draw_fields(frame, chunks[0], app);

    let right = Layout::vertical([
        Constraint::Length(7),  // Summary
        Constraint::Length(10), // Cost structure
        Constraint::Min(5),     // Line items or specs
        Constraint::Length(4),  // Materials
    ])
    .split(chunks[1]);

    draw_summary(frame, right[0], app);
    draw_cost_structure(frame, right[1], app);
    if app.show_specs {
        draw_specs(frame, right[2], app);
    } else {
        draw_items(frame, right[2], app);
    }
    draw_materials(frame, right[3], app);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let mut rows: Vec<Row> = Vec::new();
    let mut selected_row = 0;
    let mut last_section = None;

    for (i, field) in FormField::ALL.iter().enumerate() {
        let section = field.section();
        if last_section != Some(section) {
            rows.push(
                Row::new(vec![format!("── {} ──", section.title()), String::new()])
                    .style(SECTION_STYLE),
            );
            last_section = Some(section);
        }

        let is_selected = i == app.selected_field;
        if is_selected {
            selected_row = rows.len();
        }

        let style = if is_selected {
            SELECTED_STYLE
        } else if field.is_active(&app.input) {
            Style::default()
        } else {
            Style::default().fg(BRAND_MUTED)
        };

        rows.push(Row::new(vec![field.label().to_string(), field.value(&app.input)]).style(style));
    }

    // Borders take two rows
    let visible_rows = (area.height as usize).saturating_sub(2);
    let total_rows = rows.len();
    let scroll_offset = if selected_row >= visible_rows {
        selected_row - visible_rows + 1
    } else {
        0
    };

    let rows: Vec<Row> = rows.into_iter().skip(scroll_offset).take(visible_rows).collect();
    let widths = [Constraint::Percentage(55), Constraint::Percentage(45)];

    let table = Table::new(rows, widths).block(
        Block::default()
            .title(" Project ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ORANGE)),
    );
    frame.render_widget(table, area);

    if total_rows > visible_rows {
        draw_scrollbar(frame, area, total_rows, selected_row);
    }
}

/// Scrollbar on the inside of the right border.
fn draw_scrollbar(frame: &mut Frame, area: Rect, total: usize, position: usize) {
    if area.width == 0 || area.height <= 2 {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(total).position(position);

    let scrollbar_area = Rect {
        x: area.x + area.width.saturating_sub(1),
        y: area.y + 1,
        width: 1,
        height: area.height.saturating_sub(2),
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

/// First row to show so that `visible` rows never run past the end.
fn clamp_offset(requested: usize, total: usize, visible: usize) -> usize {
    requested.min(total.saturating_sub(visible))
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let result = &app.result;
    let money = Style::default().fg(MONEY_COLOR);

    let lines = vec![
        Line::from(vec![
            Span::raw("Converted area:   "),
            Span::styled(format_area(result.total_converted_area), HEADER_STYLE),
        ]),
        Line::from(vec![
            Span::raw("Unit price:       "),
            Span::styled(format!("{}/m²", format_vnd(result.unit_price)), money),
        ]),
        Line::from(vec![
            Span::raw("Construction:     "),
            Span::styled(format_vnd(result.total_cost), money),
        ]),
        Line::from(vec![
            Span::raw("Total investment: "),
            Span::styled(
                format_vnd(result.total_investment),
                Style::default().fg(TOTAL_COLOR).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Schedule:         "),
            Span::styled(format!("~{} weeks", result.schedule_weeks), HEADER_STYLE),
        ]),
    ];

    let summary =
        Paragraph::new(lines).block(Block::default().title(" Estimate ").borders(Borders::ALL));
    frame.render_widget(summary, area);
}

fn draw_cost_structure(frame: &mut Frame, area: Rect, app: &App) {
    let costs = &app.result.cost_structure;
    let total = app.result.total_investment;

    let entries = [
        ("Labour", costs.labor),
        ("Rough material", costs.rough_material),
        ("Finishing", costs.finishing),
        ("Equipment", costs.equipment),
        ("Furniture", costs.furniture),
        ("Soft costs", costs.soft),
        ("Contingency", costs.contingency),
    ];

    let rows: Vec<Row> = entries
        .iter()
        .map(|(name, amount)| {
            let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
            Row::new(vec![
                (*name).to_string(),
                format_millions(*amount),
                format!("{share:.1}%"),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(45),
        Constraint::Percentage(35),
        Constraint::Percentage(20),
    ];
    let header = Row::new(vec!["Category", "VND", "Share"]).style(HEADER_STYLE);

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Cost structure ").borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn draw_items(frame: &mut Frame, area: Rect, app: &App) {
    let result = &app.result;
    // Borders and the header row
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total_rows = result.items.len();
    let scroll_offset = clamp_offset(app.detail_scroll, total_rows, visible_rows);

    let rows: Vec<Row> = result
        .items
        .iter()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|item| {
            if item.is_extra {
                Row::new(vec![
                    item.name.clone(),
                    item.description.clone(),
                    String::new(),
                    format_millions(item.cost.unwrap_or(0.0)),
                ])
                .style(Style::default().fg(BRAND_ORANGE))
            } else {
                Row::new(vec![
                    item.name.clone(),
                    item.description.clone(),
                    format!("{:.2}", item.converted_area),
                    format_millions(item.converted_area * result.unit_price),
                ])
            }
        })
        .collect();

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(40),
        Constraint::Percentage(15),
        Constraint::Percentage(20),
    ];
    let header = Row::new(vec!["Item", "Detail", "m²", "VND"]).style(HEADER_STYLE);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Line items ({total_rows}) "))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);

    if total_rows > visible_rows {
        draw_scrollbar(frame, area, total_rows, scroll_offset);
    }
}

/// What the selected package and handover mode actually include.
pub(crate) fn spec_lines(input: &ConstructionInput) -> Vec<Line<'static>> {
    let package = package_profile(input.package_type);
    let handover = handover_profile(input.handover_mode);
    let muted = Style::default().fg(BRAND_MUTED);
    let owner_supplied = muted.add_modifier(Modifier::ITALIC);

    let mut lines = vec![
        Line::styled(package.name, HEADER_STYLE),
        Line::styled(package.description, muted),
        Line::default(),
        Line::styled(handover.name, HEADER_STYLE),
        Line::styled(handover.description, muted),
    ];
    for item in handover.includes {
        lines.push(Line::styled(format!("  + {item}"), Style::default().fg(BRAND_GREEN)));
    }
    for item in handover.excludes {
        lines.push(Line::styled(format!("  - {item}"), muted));
    }

    lines.push(Line::styled("── Finishing materials ──", SECTION_STYLE));
    for (item, brand) in finishing_schedule(input.package_type) {
        let style = if brand == OWNER_SUPPLIED {
            owner_supplied
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{item:<22}")),
            Span::styled(brand, style),
        ]));
    }

    for category in &TECHNICAL_SPECS {
        lines.push(Line::styled(format!("── {} ──", category.name), SECTION_STYLE));
        for spec in category.lines {
            lines.push(Line::styled(spec.title, HEADER_STYLE));
            lines.push(Line::raw(format!("  {}", spec.by_tier.get(input.package_type))));
        }
    }

    lines
}

fn draw_specs(frame: &mut Frame, area: Rect, app: &App) {
    let lines = spec_lines(&app.input);
    let visible_rows = (area.height as usize).saturating_sub(2);
    let total_rows = lines.len();
    let scroll_offset = clamp_offset(app.detail_scroll, total_rows, visible_rows);

    let lines: Vec<Line> = lines.into_iter().skip(scroll_offset).take(visible_rows).collect();
    let specs = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Specs: {} ", app.input.package_type.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_GREEN)),
    );
    frame.render_widget(specs, area);

    if total_rows > visible_rows {
        draw_scrollbar(frame, area, total_rows, scroll_offset);
    }
}

fn draw_materials(frame: &mut Frame, area: Rect, app: &App) {
    let m = &app.result.materials;
    let text = format!(
        "Bricks {:.0} pcs | Sand {:.1} m³ | Stone {:.1} m³ | \
         Cement {:.0} kg | Steel {:.0} kg | Paint {:.0} m²",
        m.bricks, m.sand, m.stone, m.cement, m.steel, m.paint
    );

    let materials = Paragraph::new(text)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().title(" Materials ").borders(Borders::ALL));
    frame.render_widget(materials, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
