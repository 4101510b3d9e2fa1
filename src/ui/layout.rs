use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    pub status: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let [header, input, button, status, summary, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);

    Regions {
        header,
        input,
        button,
        status,
        summary,
        footer,
    }
}

/// Horizontally centered slice of `area`, at most `width` columns wide.
pub fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_fill_the_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let regions = layout_regions(area);
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.input.y, 3);
        assert_eq!(regions.button.y, 6);
        assert_eq!(regions.summary.y, 9);
        assert_eq!(regions.summary.height, 12);
        assert_eq!(regions.footer.y, 21);
    }

    #[test]
    fn centered_columns_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 1);
        assert_eq!(centered_columns(area, 20), Rect::new(10, 0, 20, 1));
        assert_eq!(centered_columns(area, 100), area);
    }
}
