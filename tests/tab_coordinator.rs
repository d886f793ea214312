mod common;

use common::Recorded;
use stacknav::nav::{ButtonRoute, ClearMode, LinkRoute, Route, SelectionTab, TabCoordinator};

#[test]
fn reset_policy_clears_on_round_trip() {
    let mut tabs = TabCoordinator::new(true, ClearMode::Reset);
    tabs.current_mut().push(Route::Link(LinkRoute::First));
    assert_eq!(tabs.store(SelectionTab::First).len(), 1);

    tabs.select(SelectionTab::Second);
    tabs.select(SelectionTab::First);
    assert_eq!(tabs.store(SelectionTab::First).len(), 0);
}

#[test]
fn without_reset_each_tab_keeps_its_depth() {
    let mut tabs = TabCoordinator::new(false, ClearMode::Reset);
    tabs.current_mut().push(Route::Link(LinkRoute::First));

    tabs.select(SelectionTab::Second);
    tabs.current_mut().push(Route::Button(ButtonRoute::First));
    tabs.current_mut().push(Route::Button(ButtonRoute::Second));
    tabs.select(SelectionTab::First);

    assert_eq!(tabs.store(SelectionTab::First).len(), 1);
    assert_eq!(tabs.store(SelectionTab::Second).len(), 2);
    assert_eq!(tabs.current().current(), Some(Route::Link(LinkRoute::First)));
}

#[test]
fn reset_notifies_observers_of_the_left_tab() {
    let mut tabs = TabCoordinator::new(true, ClearMode::Reset);
    let first = Recorded::attach(tabs.store_mut(SelectionTab::First));
    let second = Recorded::attach(tabs.store_mut(SelectionTab::Second));

    tabs.current_mut().push(Route::Link(LinkRoute::Stacked));
    tabs.select(SelectionTab::Second);

    assert_eq!(first.count(), 2);
    assert!(first.snapshots()[1].is_empty());
    assert_eq!(second.count(), 0);
}

#[test]
fn reselecting_current_tab_is_noop() {
    let mut tabs = TabCoordinator::new(true, ClearMode::Reset);
    tabs.current_mut().push(Route::Link(LinkRoute::Second));
    assert!(!tabs.select(SelectionTab::First));
    assert_eq!(tabs.current().len(), 1);
}

#[test]
fn switching_with_empty_stack_emits_nothing() {
    let mut tabs = TabCoordinator::new(true, ClearMode::RemoveLast);
    let first = Recorded::attach(tabs.store_mut(SelectionTab::First));
    tabs.select(SelectionTab::Second);
    assert_eq!(first.count(), 0);
}
