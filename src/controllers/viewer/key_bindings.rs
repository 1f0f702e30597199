use std::collections::HashMap;

/// Host-independent key identity. Characters are case sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    Quit,
    ToggleFullscreen,
    RandomizeColour,
    ResetColour,
    ToggleRotation,
    ToggleOverlay,
    IncreasePoints,
    DecreasePoints,
    IncreasePointSize,
    DecreasePointSize,
}

impl KeyCommand {
    pub const ALL: &'static [KeyCommand] = &[
        KeyCommand::Quit,
        KeyCommand::ToggleFullscreen,
        KeyCommand::RandomizeColour,
        KeyCommand::ResetColour,
        KeyCommand::ToggleRotation,
        KeyCommand::ToggleOverlay,
        KeyCommand::IncreasePoints,
        KeyCommand::DecreasePoints,
        KeyCommand::IncreasePointSize,
        KeyCommand::DecreasePointSize,
    ];

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Quit => "leave fullscreen, or quit",
            Self::ToggleFullscreen => "toggle fullscreen",
            Self::RandomizeColour => "random colour",
            Self::ResetColour => "reset colour",
            Self::ToggleRotation => "pause/resume rotation",
            Self::ToggleOverlay => "show/hide info overlay",
            Self::IncreasePoints => "more points per frame",
            Self::DecreasePoints => "fewer points per frame",
            Self::IncreasePointSize => "larger points",
            Self::DecreasePointSize => "smaller points",
        }
    }
}

/// Key to command table. Unmapped keys resolve to `None` and are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<Key, KeyCommand>,
}

impl KeyBindings {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: Key, command: KeyCommand) {
        self.bindings.insert(key, command);
    }

    #[must_use]
    pub fn command_for(&self, key: Key) -> Option<KeyCommand> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to `command`, in a stable order.
    #[must_use]
    pub fn keys_for(&self, command: KeyCommand) -> Vec<Key> {
        let mut keys: Vec<Key> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == command)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| format!("{:?}", key));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(Key::Character('q'), KeyCommand::Quit);
        bindings.bind(Key::Escape, KeyCommand::Quit);
        bindings.bind(Key::Character('f'), KeyCommand::ToggleFullscreen);
        bindings.bind(Key::Character('c'), KeyCommand::RandomizeColour);
        bindings.bind(Key::Character('C'), KeyCommand::ResetColour);
        bindings.bind(Key::Character('r'), KeyCommand::ToggleRotation);
        bindings.bind(Key::Character('i'), KeyCommand::ToggleOverlay);
        bindings.bind(Key::ArrowUp, KeyCommand::IncreasePoints);
        bindings.bind(Key::ArrowDown, KeyCommand::DecreasePoints);
        bindings.bind(Key::ArrowRight, KeyCommand::IncreasePointSize);
        bindings.bind(Key::ArrowLeft, KeyCommand::DecreasePointSize);

        bindings
    }
}
