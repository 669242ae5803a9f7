use macroquad::input::{is_key_pressed, is_quit_requested, KeyCode};

use crate::game::Input;
use crate::snake::Direction::*;

// Examined in this order every frame
const BINDINGS: [(KeyCode, Input); 5] = [
    (KeyCode::Up, Input::Turn(Up)),
    (KeyCode::Down, Input::Turn(Down)),
    (KeyCode::Left, Input::Turn(Left)),
    (KeyCode::Right, Input::Turn(Right)),
    (KeyCode::R, Input::Restart),
];

pub fn binding(key: KeyCode) -> Option<Input> {
    BINDINGS.iter().find(|(bound, _)| *bound == key).map(|(_, input)| *input)
}

/// Collects this frame's inputs into `events`, replacing what was there.
pub fn poll(events: &mut Vec<Input>) {
    events.clear();

    if is_quit_requested() {
        events.push(Input::Close);
    }

    for (key, _) in BINDINGS.iter() {
        if is_key_pressed(*key) {
            events.extend(binding(*key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_turn() {
        assert_eq!(binding(KeyCode::Up), Some(Input::Turn(Up)));
        assert_eq!(binding(KeyCode::Down), Some(Input::Turn(Down)));
        assert_eq!(binding(KeyCode::Left), Some(Input::Turn(Left)));
        assert_eq!(binding(KeyCode::Right), Some(Input::Turn(Right)));
    }

    #[test]
    fn r_restarts() {
        assert_eq!(binding(KeyCode::R), Some(Input::Restart));
    }

    #[test]
    fn other_keys_are_unbound() {
        assert_eq!(binding(KeyCode::W), None);
        assert_eq!(binding(KeyCode::Escape), None);
        assert_eq!(binding(KeyCode::Space), None);
    }
}
