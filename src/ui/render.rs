//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Header with title, greeting and clock
//! - The option wheel with its depth tiers
//! - Position dots under the wheel
//! - Click ripple, buzzer pulse and the welcome overlay
//! - Status bar

use crate::app::App;
use crate::carousel::{BUZZER_PULSE_DURATION, RIPPLE_DURATION};
use crate::types::CareOption;
use crate::ui::wheel::{self, DepthTier, ProjectedItem};
use crate::ui::{theme::Theme, widgets};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    // Main layout: header, wheel, dots, status bar
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(7),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_wheel(frame, app, now, layout[1]);
    render_dots(frame, app, layout[2]);
    render_status_bar(frame, app, layout[3]);

    // Transient feedback sits on top of everything drawn so far
    render_buzzer_pulse(frame, app, now, layout[1]);
    render_ripple(frame, app, now, area);

    if app.carousel.show_instructions() {
        render_instructions(frame, app, area);
    }

    if let Some((msg, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, msg, *is_error, &app.theme, area);
    }
}

/// Render header with title, greeting and clock
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let header_block = Block::default()
        .style(theme.block_style())
        .title(format!(" {} ", app.config.title))
        .title_style(theme.title())
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    frame.render_widget(header_block, area);

    let clock_line = Line::from(vec![
        Span::styled(
            app.navbar.greeting,
            Style::default().fg(theme.accent).bg(theme.bg),
        ),
        Span::styled("  ", theme.text()),
        Span::styled(&app.navbar.date_line, theme.text()),
        Span::styled("  ", theme.text()),
        Span::styled(
            &app.navbar.time_line,
            theme.text().add_modifier(Modifier::BOLD),
        ),
    ]);

    let clock_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(clock_line).alignment(Alignment::Right),
        clock_area,
    );
}

// === WHEEL ===

/// Render the option ring around the focused card
fn render_wheel(frame: &mut Frame, app: &App, now: Instant, area: Rect) {
    let theme = &app.theme;
    frame.render_widget(Block::default().style(theme.block_style()), area);

    // Tiny terminals get just the focused option
    if area.width < 30 || area.height < 7 {
        let option = app.carousel.current_option();
        let label = Paragraph::new(format!("{} {}", option.icon, option.label))
            .style(Style::default().fg(option.color).bg(theme.bg))
            .alignment(Alignment::Center);
        frame.render_widget(label, widgets::centered_rect(area.width, 1, area));
        return;
    }

    let center_x = area.x + area.width / 2;
    let center_y = area.y + area.height / 2;
    let radius = f64::from(area.width.saturating_sub(26)) / 2.0;

    let rotation = app.carousel.display_rotation(now);
    let items = wheel::project(rotation, app.carousel.options.len(), radius);

    // Painter's order: the projection is sorted back to front
    for item in &items {
        let Some(tier) = wheel::tier_for_depth(item.depth) else {
            continue;
        };
        let option = &app.carousel.options[item.index];
        match tier {
            DepthTier::Front => render_front_card(frame, option, center_x, center_y, theme, area),
            DepthTier::Mid | DepthTier::Back => {
                render_ring_label(frame, option, item, tier, center_x, center_y, theme, area);
            }
        }
    }
}

/// Render the focused option as a bordered card at the wheel center
fn render_front_card(
    frame: &mut Frame,
    option: &CareOption,
    center_x: u16,
    center_y: u16,
    theme: &Theme,
    area: Rect,
) {
    let (width, height) = front_card_size(option);
    let card = Rect {
        x: center_x.saturating_sub(width / 2),
        y: center_y.saturating_sub(height / 2),
        width,
        height,
    }
    .intersection(area);

    frame.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(option.color).bg(theme.bg))
        .style(theme.block_style());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let label_style = if option.urgent {
        theme.error().add_modifier(Modifier::BOLD)
    } else {
        theme.text().add_modifier(Modifier::BOLD)
    };
    let hint = if option.urgent {
        Span::styled("double click NOW", theme.error())
    } else if option.launches_game() {
        Span::styled("double click to play", theme.text_dim())
    } else {
        Span::styled("double click to call", theme.text_dim())
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", option.icon, option.label),
            label_style,
        )),
        Line::from(hint),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// Render a non-focused ring position as a single label
fn render_ring_label(
    frame: &mut Frame,
    option: &CareOption,
    item: &ProjectedItem,
    tier: DepthTier,
    center_x: u16,
    center_y: u16,
    theme: &Theme,
    area: Rect,
) {
    let text = format!("{} {}", option.icon, option.label);
    let style = match tier {
        DepthTier::Mid => Style::default().fg(option.color).bg(theme.bg),
        _ => theme.text_dim(),
    };

    // Farther items ride higher up the ellipse
    let rise = ((1.0 - item.depth) * 6.0).round() as u16;
    let y = center_y.saturating_sub(rise);

    let width = text.chars().count() as u16 + 2;
    let ideal_x = f64::from(center_x) + item.x_offset - f64::from(width) / 2.0;
    let max_x = area.right().saturating_sub(width).max(area.x);
    let x = (ideal_x.max(f64::from(area.x)) as u16).min(max_x);

    let label_area = Rect {
        x,
        y,
        width,
        height: 1,
    }
    .intersection(area);
    if label_area.width == 0 {
        return;
    }

    frame.render_widget(Paragraph::new(text).style(style), label_area);
}

/// Width and height of the focused card for an option
fn front_card_size(option: &CareOption) -> (u16, u16) {
    let width = option.label.chars().count() as u16 + 10;
    (width.max(24), 4)
}

/// Render one position dot per option under the wheel
fn render_dots(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    for i in 0..app.carousel.options.len() {
        if i > 0 {
            spans.push(Span::styled(" ", theme.text()));
        }
        if i == app.carousel.current_index {
            spans.push(Span::styled(
                "●",
                Style::default().fg(theme.accent).bg(theme.bg),
            ));
        } else {
            spans.push(Span::styled(
                "○",
                Style::default().fg(theme.accent_dim).bg(theme.bg),
            ));
        }
    }

    let dots = Paragraph::new(Line::from(spans))
        .style(theme.text())
        .alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

/// Render status bar with gesture hints
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let hints = if app.carousel.fullscreen_initiated {
        "[click] Rotate  [double click] Call  [swipe] Rotate  [Esc] Leave fullscreen  [q] Quit"
    } else {
        "Click anywhere to begin  [q] Quit"
    };

    let sound = if app.sound_active() {
        "sound on"
    } else {
        "sound off"
    };
    let right = if app.dry_run {
        format!("dry-run · {} · {}", app.fullscreen.as_str(), sound)
    } else {
        format!("{} · {}", app.fullscreen.as_str(), sound)
    };

    widgets::render_status_bar(frame, hints, &right, theme, area);
}

// === FEEDBACK OVERLAYS ===

/// Render the click ripple, fading through three glyphs as it ages
fn render_ripple(frame: &mut Frame, app: &App, now: Instant, area: Rect) {
    let Some(ripple) = app.carousel.ripple else {
        return;
    };

    let age = now.duration_since(ripple.shown_at);
    if age >= RIPPLE_DURATION {
        return;
    }

    let third = RIPPLE_DURATION / 3;
    let glyph = if age < third {
        "•"
    } else if age < third * 2 {
        "○"
    } else {
        "◌"
    };

    if ripple.x >= area.right() || ripple.y >= area.bottom() {
        return;
    }
    let cell = Rect {
        x: ripple.x,
        y: ripple.y,
        width: 1,
        height: 1,
    };

    let style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(glyph).style(style), cell);
}

/// Render expanding rings around the focused card while the buzzer plays
fn render_buzzer_pulse(frame: &mut Frame, app: &App, now: Instant, wheel_area: Rect) {
    let Some(started) = app.carousel.pulse_started_at else {
        return;
    };

    let age = now.duration_since(started);
    if age >= BUZZER_PULSE_DURATION {
        return;
    }

    let option = app.carousel.current_option();
    let (card_width, card_height) = front_card_size(option);
    let progress = age.as_secs_f64() / BUZZER_PULSE_DURATION.as_secs_f64();
    let grow = (progress * 8.0) as u16;

    let ring_style = Style::default().fg(option.color);
    for ring in [grow / 2, grow] {
        let ring_area = widgets::centered_rect(
            card_width + 6 + ring * 4,
            card_height + 2 + ring,
            wheel_area,
        );
        let ring_block = Block::default()
            .borders(Borders::ALL)
            .border_style(ring_style);
        frame.render_widget(ring_block, ring_area);
    }
}

/// Render the welcome overlay shown for the first seconds after launch
fn render_instructions(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let action = |s: &'static str| Span::styled(s, Style::default().fg(theme.accent).bg(theme.bg));
    let content = vec![
        Line::raw(""),
        Line::styled("Click anywhere to begin in fullscreen", theme.text()),
        Line::raw(""),
        Line::from(vec![action("Single click"), Span::raw("  rotates the wheel")]),
        Line::from(vec![
            action("Double click"),
            Span::raw("  calls for what you need"),
        ]),
        Line::from(vec![action("Swipe"), Span::raw("  rotates the wheel too")]),
        Line::raw(""),
        Line::styled("Esc leaves fullscreen", theme.text_dim()),
    ];

    widgets::render_popup(
        frame,
        &format!("Welcome to {}", app.config.title),
        content,
        theme,
        area,
    );
}
