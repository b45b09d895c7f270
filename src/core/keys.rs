use super::mode::{Mode, MODE_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Wheel-equivalent step, +1 forward, -1 back.
    Step(i32),
    Select(Mode),
    ToggleAudio,
    ToggleHud,
}

#[inline]
pub fn key_intent(key: &str) -> Option<KeyIntent> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(KeyIntent::Step(1)),
        "ArrowLeft" | "ArrowUp" => Some(KeyIntent::Step(-1)),
        "m" | "M" => Some(KeyIntent::ToggleAudio),
        "h" | "H" => Some(KeyIntent::ToggleHud),
        _ => mode_for_digit(key).map(KeyIntent::Select),
    }
}

/// "1".."6" pick a mode directly in dial order.
#[inline]
pub fn mode_for_digit(key: &str) -> Option<Mode> {
    let digit = key.parse::<usize>().ok()?;
    if (1..=MODE_COUNT).contains(&digit) && key.len() == 1 {
        Some(Mode::from_index(digit as i64 - 1))
    } else {
        None
    }
}
