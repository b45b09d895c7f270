mod common;

use common::camera_core::mode::{Mode, MODES, MODE_COUNT};

#[test]
fn from_index_wraps_any_integer_into_the_set() {
    for i in -25i64..25 {
        let m = Mode::from_index(i);
        assert!(MODES.contains(&m));
        assert_eq!(m.index() as i64, i.rem_euclid(MODE_COUNT as i64));
    }
}

#[test]
fn stepping_forward_a_full_turn_returns_home() {
    let mut m = Mode::Home;
    for _ in 0..MODE_COUNT {
        m = m.step(1);
    }
    assert_eq!(m, Mode::Home);
}

#[test]
fn stepping_back_from_first_lands_on_last() {
    assert_eq!(Mode::Home.step(-1), Mode::Contact);
    assert_eq!(Mode::Home.step(-1).index(), MODE_COUNT - 1);
}

#[test]
fn step_uses_only_the_sign_of_the_direction() {
    assert_eq!(Mode::Films.step(0), Mode::Films);
    assert_eq!(Mode::Films.step(7), Mode::Services);
    assert_eq!(Mode::Films.step(-3), Mode::Portfolio);
}

#[test]
fn order_matches_indices_and_labels_are_distinct() {
    for (i, m) in MODES.iter().enumerate() {
        assert_eq!(m.index(), i);
    }
    let mut labels: Vec<_> = MODES.iter().map(|m| m.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), MODE_COUNT);
    assert_eq!(Mode::default(), Mode::Home);
}

#[test]
fn dial_rotation_puts_each_sector_under_the_notch() {
    assert_eq!(Mode::sector_degrees(), 60.0);
    assert_eq!(Mode::Home.dial_rotation(), 0.0);
    assert_eq!(Mode::Portfolio.dial_rotation(), -60.0);
    assert_eq!(Mode::Contact.dial_rotation(), -300.0);
}
