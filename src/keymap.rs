// Keyboard shortcuts, kept free of DOM types so they can be tested on the host.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleAnimation,
    TogglePanel,
    Reset,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::ToggleAnimation),
        "t" | "T" => Some(KeyAction::TogglePanel),
        "r" | "R" => Some(KeyAction::Reset),
        _ => None,
    }
}
