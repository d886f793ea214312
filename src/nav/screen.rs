//! Destination screens as plain data.
//!
//! Every function here is a total mapping from a route (or a tab root) to a
//! [`Screen`]. The terminal shell renders these; the navigation core never
//! looks at them.

use crate::nav::route::{ButtonRoute, LinkRoute, Route, StackedRoute, Tagged};
use crate::nav::selection::SelectionTab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Text(String),
    /// Activating the item pushes `route`.
    Link { label: String, route: Route },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: Option<&'static str>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Screen {
    fn single(title: &str, items: Vec<Item>) -> Self {
        Self {
            title: title.to_string(),
            sections: vec![Section {
                header: None,
                items,
            }],
        }
    }

    /// Routes of every link, in display order.
    pub fn links(&self) -> Vec<Route> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .filter_map(|item| match item {
                Item::Link { route, .. } => Some(*route),
                Item::Text(_) => None,
            })
            .collect()
    }

    pub fn link_at(&self, index: usize) -> Option<Route> {
        self.links().get(index).copied()
    }
}

/// The form shown when a tab's stack is empty.
pub fn root_screen(tab: SelectionTab) -> Screen {
    let links = LinkRoute::ALL
        .iter()
        .map(|route| Item::Link {
            label: format!("Go to {route} navigation link screen"),
            route: Route::Link(*route),
        })
        .collect();
    let buttons = ButtonRoute::ALL
        .iter()
        .map(|route| Item::Link {
            label: format!("Go to {route} button screen"),
            route: Route::Button(*route),
        })
        .collect();

    Screen {
        title: format!("Navigation {tab}"),
        sections: vec![
            Section {
                header: Some("NavigationLink"),
                items: links,
            },
            Section {
                header: Some("Buttons"),
                items: buttons,
            },
        ],
    }
}

/// The screen a pushed route leads to.
pub fn destination(route: Route) -> Screen {
    match route {
        Route::Link(LinkRoute::First) => Screen::single("Navigation Link", vec![text("First")]),
        Route::Link(LinkRoute::Second) => Screen::single("Navigation Link", vec![text("Second")]),
        Route::Link(LinkRoute::Stacked) => {
            let items = StackedRoute::ALL
                .iter()
                .map(|nested| Item::Link {
                    label: format!("Stack navigation {nested}"),
                    route: Route::Stacked(*nested),
                })
                .collect();
            Screen::single("Navigation Link", items)
        }
        Route::Stacked(nested) => Screen::single("Stacked", vec![text(nested.tag())]),
        Route::Button(ButtonRoute::First) => Screen::single("Button", vec![text("First")]),
        Route::Button(ButtonRoute::Second) => Screen::single("Button", vec![text("Second")]),
    }
}

fn text(value: &str) -> Item {
    Item::Text(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_links_cover_both_taxonomies() {
        let screen = root_screen(SelectionTab::Second);
        assert_eq!(screen.title, "Navigation second");
        assert_eq!(
            screen.links(),
            vec![
                Route::Link(LinkRoute::First),
                Route::Link(LinkRoute::Second),
                Route::Link(LinkRoute::Stacked),
                Route::Button(ButtonRoute::First),
                Route::Button(ButtonRoute::Second),
            ]
        );
    }

    #[test]
    fn stacked_link_offers_nested_routes() {
        let screen = destination(Route::Link(LinkRoute::Stacked));
        assert_eq!(
            screen.links(),
            vec![
                Route::Stacked(StackedRoute::First),
                Route::Stacked(StackedRoute::Second)
            ]
        );
    }

    #[test]
    fn every_route_has_a_destination() {
        for route in Route::all() {
            let screen = destination(route);
            assert!(!screen.title.is_empty());
            assert!(screen.sections.iter().any(|s| !s.items.is_empty()));
        }
    }

    #[test]
    fn leaf_screens_have_no_links() {
        let screen = destination(Route::Stacked(StackedRoute::Second));
        assert!(screen.links().is_empty());
        assert_eq!(screen.link_at(0), None);
        assert_eq!(screen.sections[0].items, vec![Item::Text("second".into())]);
    }
}
