use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

use crate::controllers::viewer::Key;

/// Maps a winit logical key to a viewer key. Multi-character text and keys
/// the viewer has no use for map to `None`.
#[must_use]
pub fn viewer_key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::Escape) => Some(Key::Escape),
        WinitKey::Named(NamedKey::ArrowUp) => Some(Key::ArrowUp),
        WinitKey::Named(NamedKey::ArrowDown) => Some(Key::ArrowDown),
        WinitKey::Named(NamedKey::ArrowLeft) => Some(Key::ArrowLeft),
        WinitKey::Named(NamedKey::ArrowRight) => Some(Key::ArrowRight),
        WinitKey::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Character(c)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Only presses (including auto-repeat) drive the viewer.
#[must_use]
pub fn pressed_viewer_key(event: &KeyEvent) -> Option<Key> {
    if event.state != ElementState::Pressed {
        return None;
    }

    viewer_key(&event.logical_key)
}
