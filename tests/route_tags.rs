use stacknav::nav::{
    ButtonRoute, DecodeError, LinkRoute, NavigationPathStore, Route, SelectionTab, StackedRoute,
    Tagged,
};

fn assert_round_trips<T: Tagged>() {
    for variant in T::ALL {
        assert_eq!(T::from_tag(variant.tag()), Ok(*variant));
    }
}

#[test]
fn every_variant_round_trips_through_its_tag() {
    assert_round_trips::<LinkRoute>();
    assert_round_trips::<StackedRoute>();
    assert_round_trips::<ButtonRoute>();
    assert_round_trips::<SelectionTab>();
}

#[test]
fn tags_are_stable() {
    let tags: Vec<&str> = LinkRoute::ALL.iter().map(|r| r.tag()).collect();
    assert_eq!(tags, vec!["first", "second", "stacked"]);
    let tags: Vec<&str> = ButtonRoute::ALL.iter().map(|r| r.tag()).collect();
    assert_eq!(tags, vec!["first", "second"]);
}

#[test]
fn qualified_routes_round_trip() {
    for route in Route::all() {
        assert_eq!(Route::parse(&route.qualified()), Ok(route));
    }
}

#[test]
fn unknown_tag_fails_with_decode_error() {
    assert_eq!(
        LinkRoute::from_tag("third"),
        Err(DecodeError {
            taxonomy: "link",
            tag: "third".to_string()
        })
    );
    assert!("third".parse::<StackedRoute>().is_err());
    assert!(Route::parse("button:stacked").is_err());
}

#[test]
fn failed_decode_leaves_stack_untouched() {
    let mut store = NavigationPathStore::default();
    store.push(Route::Link(LinkRoute::First));

    if let Ok(route) = Route::parse("link:third") {
        store.push(route);
    }
    assert_eq!(store.len(), 1);
}

#[test]
fn serde_json_uses_tags() {
    assert_eq!(serde_json::to_string(&LinkRoute::Stacked).unwrap(), "\"stacked\"");
    assert_eq!(
        serde_json::from_str::<SelectionTab>("\"second\"").unwrap(),
        SelectionTab::Second
    );
    assert!(serde_json::from_str::<ButtonRoute>("\"stacked\"").is_err());
}
