//! Keyboard input handling

use game_core::HeldKeys;
use ggez::input::keyboard::KeyCode;
use ggez::Context;

use crate::menu::MenuKey;

/// Map a key-down event to a menu key; anything else is ignored
pub fn menu_key(code: KeyCode) -> Option<MenuKey> {
    match code {
        KeyCode::Up => Some(MenuKey::Up),
        KeyCode::Down => Some(MenuKey::Down),
        KeyCode::Left => Some(MenuKey::Left),
        KeyCode::Right => Some(MenuKey::Right),
        KeyCode::Return | KeyCode::NumpadEnter => Some(MenuKey::Enter),
        _ => None,
    }
}

/// Build held-key state from any key query
pub fn held_keys_with(pressed: impl Fn(KeyCode) -> bool) -> HeldKeys {
    HeldKeys {
        w: pressed(KeyCode::W),
        s: pressed(KeyCode::S),
        up: pressed(KeyCode::Up),
        down: pressed(KeyCode::Down),
    }
}

/// Sample held movement keys from the live keyboard
pub fn held_keys(ctx: &Context) -> HeldKeys {
    held_keys_with(|code| ctx.keyboard.is_key_pressed(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_key_mapping() {
        assert_eq!(menu_key(KeyCode::Up), Some(MenuKey::Up));
        assert_eq!(menu_key(KeyCode::Return), Some(MenuKey::Enter));
        assert_eq!(menu_key(KeyCode::W), None, "Unmapped keys are ignored");
        assert_eq!(menu_key(KeyCode::NumpadEnter), Some(MenuKey::Enter));
        assert_eq!(menu_key(KeyCode::Space), None);
    }

    #[test]
    fn test_held_keys_with() {
        let keys = held_keys_with(|code| matches!(code, KeyCode::W | KeyCode::Down));
        assert_eq!(
            keys,
            HeldKeys {
                w: true,
                s: false,
                up: false,
                down: true,
            }
        );
    }
}
