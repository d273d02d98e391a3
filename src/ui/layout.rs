use ratatui::layout::Rect;

/// Header (3 rows), body (the rest) and footer (3 rows), top to bottom.
///
/// The header wins on short terminals, then the footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_rows = area.height.min(3);
    let footer_rows = (area.height - header_rows).min(3);
    let body_rows = area.height - header_rows - footer_rows;

    let band = |offset: u16, rows: u16| Rect::new(area.x, area.y + offset, area.width, rows);
    (
        band(0, header_rows),
        band(header_rows, body_rows),
        band(header_rows + body_rows, footer_rows),
    )
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
