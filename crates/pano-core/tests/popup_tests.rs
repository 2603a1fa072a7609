// Host-side tests for the single-open popup policy.

mod common;

use common::RecordingMarker;
use pano_core::*;

#[test]
fn opening_a_closes_b() {
    let mut group = PopupGroup::new(3);
    let mut els = vec![RecordingMarker::default(); 3];

    let change = group.trigger(1);
    apply_popup_change(&change, &mut els);
    assert_eq!(group.open_index(), Some(1));

    let change = group.trigger(0);
    assert_eq!(change.hide, vec![1]);
    assert_eq!(change.show, Some(0));
    apply_popup_change(&change, &mut els);
    assert!(els[0].shown);
    assert!(!els[1].shown);
    assert!(!els[2].shown);
}

#[test]
fn triggering_the_open_popup_closes_it() {
    let mut group = PopupGroup::new(3);
    let mut els = vec![RecordingMarker::default(); 3];
    apply_popup_change(&group.trigger(0), &mut els);

    let change = group.trigger(0);
    assert_eq!(change.hide, vec![0]);
    assert_eq!(change.show, None);
    apply_popup_change(&change, &mut els);
    assert!(els.iter().all(|e| !e.shown));
    assert_eq!(group.open_index(), None);
    assert!(!group.is_open(0));
}

#[test]
fn out_of_range_trigger_changes_nothing() {
    let mut group = PopupGroup::new(2);
    group.trigger(1);
    let change = group.trigger(7);
    assert!(change.is_empty());
    assert!(group.is_open(1));
    assert!(!group.is_open(7));
}

#[test]
fn close_all_hides_the_open_one() {
    let mut group = PopupGroup::new(2);
    group.trigger(0);
    let change = group.close_all();
    assert_eq!(change.hide, vec![0]);
    assert!(group.close_all().is_empty());
}

#[test]
fn apply_ignores_missing_elements() {
    let mut group = PopupGroup::new(4);
    let mut els = vec![RecordingMarker::default(); 1];
    apply_popup_change(&group.trigger(3), &mut els);
    assert!(els[0].calls.is_empty());
}
