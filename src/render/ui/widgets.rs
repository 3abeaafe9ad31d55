//! Region painting and frame composition.
//!
//! Each region paints its border, title and content into its own surface; a frame is then
//! composed by copying every surface into the terminal buffer. Overlays (help popup, fatal
//! error modal) are drawn straight onto the composed buffer.

use crate::error::Result;
use crate::registry::{Region, RegionRole, WindowRegistry};
use crate::render::ui::state::{DashboardView, HELP_HINT};
use crate::render::ui::theme::{ColorRole, ColorTheme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
};

const CURSOR: &str = "\u{2588}";
const SEARCH_PROMPT: &str = "Search: ";

/// Key bindings listed in the help overlay.
const HELP_ENTRIES: [(&str, &str); 6] = [
    ("q", "Quit the application"),
    ("?", "Show this help"),
    ("Arrows/hjkl", "Move between sections"),
    ("Enter", "Search / open the library list / select"),
    ("Esc", "Leave search or list selection"),
    ("Backspace", "Delete the last search character"),
];

/// Paint every region into its surface, honouring the focused index.
pub fn paint_regions(
    registry: &mut WindowRegistry,
    view: &DashboardView<'_>,
    theme: &ColorTheme,
) -> Result<()> {
    let focused = view.state.focused();
    registry.get(focused)?;

    for (index, region) in registry.iter_mut().enumerate() {
        paint_frame(region, index == focused, theme);
        paint_content(region, view, theme);
    }
    Ok(())
}

/// Draw border and title in the region's focus or unfocus color role.
pub fn paint_frame(region: &mut Region, focused: bool, theme: &ColorTheme) {
    let spec = region.spec();
    let role = if focused {
        spec.focus_role
    } else {
        spec.unfocus_role
    };
    let border_style = theme.role_style(role);
    let title = spec.title;
    let area = region.bounds();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(theme.base);
    if let Some(title) = title {
        block = block.title(Span::styled(title, border_style));
    }

    let surface = region.surface_mut();
    surface.clear();
    block.render(area, surface.buffer_mut());
}

fn paint_content(region: &mut Region, view: &DashboardView<'_>, theme: &ColorTheme) {
    let inner = Block::default().borders(Borders::ALL).inner(region.bounds());
    if inner.area() == 0 {
        return;
    }
    let role = region.role();
    let buf = region.surface_mut().buffer_mut();

    match role {
        RegionRole::Search => {
            if let Some(query) = view.state.query() {
                search_line(query, inner.width, theme).render(inner, buf);
            }
        }
        RegionRole::Library => {
            let items: Vec<ListItem> = view
                .library
                .iter()
                .map(|item| ListItem::new(item.as_str()))
                .collect();
            let list = List::new(items)
                .style(theme.base)
                .highlight_style(theme.selection)
                .highlight_symbol("> ");
            let mut list_state = ListState::default();
            list_state.select(view.state.selection());
            StatefulWidget::render(list, inner, buf, &mut list_state);
        }
        RegionRole::Main => {
            Paragraph::new(view.welcome)
                .style(theme.base)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }
        RegionRole::Help => {
            Paragraph::new(help_hint_line(theme))
                .style(theme.base)
                .render(inner, buf);
        }
        RegionRole::Playlists | RegionRole::Progress => {}
    }
}

/// [`HELP_HINT`] with its `?` key underlined in the key-hint color.
fn help_hint_line(theme: &ColorTheme) -> Line<'static> {
    match HELP_HINT.split_once('?') {
        Some((before, after)) => Line::from(vec![
            Span::raw(before),
            Span::styled("?", theme.key_hint.add_modifier(Modifier::UNDERLINED)),
            Span::raw(after),
        ]),
        None => Line::from(HELP_HINT),
    }
}

/// `Search: <query>` followed by a cursor block, scrolled so the end of the query stays visible.
fn search_line<'a>(query: &'a str, width: u16, theme: &ColorTheme) -> Paragraph<'a> {
    let room = usize::from(width)
        .saturating_sub(SEARCH_PROMPT.len())
        .saturating_sub(1);
    let skip = query.chars().count().saturating_sub(room);
    let visible = match query.char_indices().nth(skip) {
        Some((offset, _)) => &query[offset..],
        None => "",
    };

    Paragraph::new(Line::from(vec![
        Span::styled(SEARCH_PROMPT, theme.key_hint),
        Span::raw(visible),
        Span::styled(CURSOR, theme.role_style(ColorRole::SearchAccent)),
    ]))
    .style(theme.base)
}

/// Copy every region surface into `target`, clipped to the target area.
pub fn compose(registry: &WindowRegistry, target: &mut Buffer) {
    for region in registry.iter() {
        let source = region.surface().buffer();
        let area = source.area.intersection(target.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                *target.get_mut(x, y) = source.get(x, y).clone();
            }
        }
    }
}

/// Compose the regions and any overlay requested by the view.
pub fn draw_frame(
    registry: &WindowRegistry,
    view: &DashboardView<'_>,
    theme: &ColorTheme,
    target: &mut Buffer,
) {
    compose(registry, target);
    if view.help_overlay {
        paint_help_overlay(target, theme);
    }
}

/// Paint and compose a whole frame into a fresh buffer of `area`.
pub fn render_to_buffer(
    registry: &mut WindowRegistry,
    view: &DashboardView<'_>,
    theme: &ColorTheme,
    area: Rect,
) -> Result<Buffer> {
    paint_regions(registry, view, theme)?;
    let mut buffer = Buffer::empty(area);
    draw_frame(registry, view, theme, &mut buffer);
    Ok(buffer)
}

/// Centered popup listing the key bindings.
pub fn paint_help_overlay(target: &mut Buffer, theme: &ColorTheme) {
    let area = target.area;
    let width = 50.min(area.width);
    let height = (u32::from(area.height) * 9 / 10) as u16;
    let popup = centered(area, width, height);

    let mut lines = vec![
        Line::from(Span::styled(
            "Commands List",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(HELP_ENTRIES.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(*key, theme.key_hint),
            Span::raw(" - "),
            Span::raw(*description),
        ])
    }));

    Clear.render(popup, target);
    Paragraph::new(lines)
        .block(
            Block::default()
                .title("Commands")
                .borders(Borders::ALL)
                .border_style(theme.role_style(ColorRole::MainAccent)),
        )
        .style(theme.base)
        .wrap(Wrap { trim: true })
        .render(popup, target);
}

/// Blocking error modal body; the caller waits for a key afterwards.
pub fn paint_error_modal(target: &mut Buffer, message: &str, theme: &ColorTheme) {
    let area = target.area;
    let popup = centered(area, 60.min(area.width), 4.min(area.height));

    Clear.render(popup, target);
    Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(theme.error_text),
        )),
        Line::from("Press any key to continue..."),
    ])
    .block(Block::default().borders(Borders::ALL))
    .wrap(Wrap { trim: true })
    .render(popup, target);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Plain-text rows of a buffer, for logging and assertions.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}
