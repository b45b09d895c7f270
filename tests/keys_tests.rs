mod common;

use common::camera_core::cue::Cue;
use common::camera_core::keys::{key_intent, mode_for_digit, KeyIntent};
use common::camera_core::mode::Mode;

#[test]
fn arrows_step_like_the_wheel() {
    assert_eq!(key_intent("ArrowRight"), Some(KeyIntent::Step(1)));
    assert_eq!(key_intent("ArrowDown"), Some(KeyIntent::Step(1)));
    assert_eq!(key_intent("ArrowLeft"), Some(KeyIntent::Step(-1)));
    assert_eq!(key_intent("ArrowUp"), Some(KeyIntent::Step(-1)));
}

#[test]
fn digits_select_modes_in_dial_order() {
    assert_eq!(mode_for_digit("1"), Some(Mode::Home));
    assert_eq!(mode_for_digit("6"), Some(Mode::Contact));
    assert_eq!(mode_for_digit("0"), None);
    assert_eq!(mode_for_digit("7"), None);
    assert_eq!(mode_for_digit("12"), None);
    assert_eq!(mode_for_digit("+1"), None);
    assert_eq!(key_intent("3"), Some(KeyIntent::Select(Mode::Films)));
}

#[test]
fn letters_toggle_audio_and_hud() {
    assert_eq!(key_intent("m"), Some(KeyIntent::ToggleAudio));
    assert_eq!(key_intent("M"), Some(KeyIntent::ToggleAudio));
    assert_eq!(key_intent("h"), Some(KeyIntent::ToggleHud));
    assert_eq!(key_intent("x"), None);
    assert_eq!(key_intent(" "), None);
}

#[test]
fn cue_recipes() {
    assert_eq!(Cue::Click.chirps().len(), 1);
    assert_eq!(Cue::ShutterClose.chirps().len(), 2);
    let beeps = Cue::FocusLock.chirps();
    assert_eq!(beeps.len(), 2);
    assert!((beeps[1].offset_sec - beeps[0].offset_sec - 0.12).abs() < 1e-9);
    assert!(beeps.iter().all(|c| c.from_hz == 2400.0 && c.to_hz == 2400.0));
    let click = Cue::Click.chirps()[0];
    assert_eq!((click.from_hz, click.to_hz), (2000.0, 100.0));
    assert_eq!(Cue::ShutterOpen.name(), "shutterOpen");
}
