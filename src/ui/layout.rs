use crate::nav::LayoutMode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 20;

/// Screen regions for one frame. `sidebar` is only present in the
/// expanded layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub sidebar: Option<Rect>,
    pub detail: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, mode: LayoutMode) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    match mode {
        LayoutMode::Compact => Regions {
            header,
            sidebar: None,
            detail: body,
            footer,
        },
        LayoutMode::Expanded => {
            let sidebar_width = SIDEBAR_WIDTH.min(body.width / 2);
            let sidebar = Rect {
                width: sidebar_width,
                ..body
            };
            let detail = Rect {
                x: body.x + sidebar_width,
                width: body.width - sidebar_width,
                ..body
            };
            Regions {
                header,
                sidebar: Some(sidebar),
                detail,
                footer,
            }
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        }
    }

    #[test]
    fn compact_has_no_sidebar() {
        let regions = layout_regions(area(), LayoutMode::Compact);
        assert!(regions.sidebar.is_none());
        assert_eq!(regions.detail.width, 120);
        assert_eq!(regions.detail.height, 34);
    }

    #[test]
    fn expanded_splits_body() {
        let regions = layout_regions(area(), LayoutMode::Expanded);
        let sidebar = regions.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(regions.detail.x, SIDEBAR_WIDTH);
        assert_eq!(sidebar.width + regions.detail.width, 120);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 3,
            height: 2,
        };
        let regions = layout_regions(tiny, LayoutMode::Expanded);
        assert_eq!(regions.footer.height, 0);
        assert_eq!(regions.detail.height, 0);
    }
}
