//! Discrete user commands and the keyboard bindings that produce them.

use std::collections::HashMap;

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Every action the user can trigger. Each command is self-contained, so the
/// order in which different commands arrive does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    /// Raise the time scale by one step.
    SpeedUp,
    /// Lower the time scale by one step.
    SpeedDown,
    TogglePause,
    ToggleOrbits,
    ToggleTextures,
    Quit,
}

/// Maps physical keys to commands.
pub struct InputController {
    bindings: HashMap<KeyCode, Command>,
}

impl Default for InputController {
    fn default() -> Self {
        let bindings = [
            (KeyCode::KeyW, Command::ZoomIn),
            (KeyCode::KeyS, Command::ZoomOut),
            (KeyCode::ArrowLeft, Command::YawLeft),
            (KeyCode::ArrowRight, Command::YawRight),
            (KeyCode::ArrowUp, Command::PitchUp),
            (KeyCode::ArrowDown, Command::PitchDown),
            // `+` shares the `=` key on most layouts.
            (KeyCode::Equal, Command::SpeedUp),
            (KeyCode::NumpadAdd, Command::SpeedUp),
            (KeyCode::Minus, Command::SpeedDown),
            (KeyCode::NumpadSubtract, Command::SpeedDown),
            (KeyCode::KeyP, Command::TogglePause),
            (KeyCode::KeyO, Command::ToggleOrbits),
            (KeyCode::KeyT, Command::ToggleTextures),
            (KeyCode::KeyQ, Command::Quit),
            (KeyCode::Escape, Command::Quit),
        ];

        Self {
            bindings: bindings.into_iter().collect(),
        }
    }
}

impl InputController {
    /// Command for a key press. Releases and unbound keys yield `None`.
    pub fn process_key_event(&self, event: &KeyEvent) -> Option<Command> {
        if event.state != ElementState::Pressed {
            return None;
        }
        match event.physical_key {
            PhysicalKey::Code(code) => self.command_for(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    pub fn command_for(&self, code: KeyCode) -> Option<Command> {
        self.bindings.get(&code).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let input = InputController::default();
        assert_eq!(input.command_for(KeyCode::KeyW), Some(Command::ZoomIn));
        assert_eq!(input.command_for(KeyCode::KeyS), Some(Command::ZoomOut));
        assert_eq!(input.command_for(KeyCode::ArrowUp), Some(Command::PitchUp));
        assert_eq!(input.command_for(KeyCode::Equal), Some(Command::SpeedUp));
        assert_eq!(input.command_for(KeyCode::Minus), Some(Command::SpeedDown));
        assert_eq!(input.command_for(KeyCode::Escape), Some(Command::Quit));
        assert_eq!(input.command_for(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_every_command_is_bound() {
        let input = InputController::default();
        let bound: std::collections::HashSet<_> = input.bindings.values().copied().collect();
        assert_eq!(bound.len(), 12);
    }
}
