//! Interaction mode state machine.
//!
//! The viewer is always in exactly one of two modes: annotate (pointer
//! events hit-test the bounding-box overlay) or pan (pointer events
//! drive dragging). The mode flips via an explicit toggle action, or
//! momentarily while a designated key is held.

use crate::constants::icon;

/// The two pointer interaction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Pointer movement hit-tests bounding boxes
    Annotate,
    /// Pointer drag pans the image
    Pan,
}

impl InteractionMode {
    /// Toolbar indicator icon name for this mode.
    pub fn icon(&self) -> &'static str {
        match self {
            InteractionMode::Annotate => icon::ANNOTATE,
            InteractionMode::Pan => icon::PAN,
        }
    }
}

impl Default for InteractionMode {
    fn default() -> Self {
        InteractionMode::Annotate
    }
}

/// Tracks the current mode plus the momentary-hold override.
///
/// `hold_active` is the guard that suppresses re-toggling on key
/// auto-repeat; `hold_switched` records whether the hold itself caused
/// the switch to pan, so release only restores a mode the hold took
/// away.
#[derive(Debug, Clone, Default)]
pub struct ModeStateMachine {
    mode: InteractionMode,
    hold_active: bool,
    hold_switched: bool,
}

impl ModeStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Whether pan mode is active.
    pub fn is_pan(&self) -> bool {
        self.mode == InteractionMode::Pan
    }

    /// Explicit toggle action (toolbar button).
    ///
    /// Returns the new mode.
    pub fn toggle(&mut self) -> InteractionMode {
        self.mode = match self.mode {
            InteractionMode::Annotate => InteractionMode::Pan,
            InteractionMode::Pan => InteractionMode::Annotate,
        };
        log::debug!("Mode toggled: {:?}", self.mode);
        self.mode
    }

    /// The designated hold key went down.
    ///
    /// Forces pan mode while held. Auto-repeat of the key delivers
    /// repeated presses; the guard flag makes them no-ops. Returns true
    /// if the mode changed.
    pub fn hold_pressed(&mut self) -> bool {
        if self.hold_active {
            return false; // auto-repeat
        }
        self.hold_active = true;
        if self.mode == InteractionMode::Annotate {
            self.mode = InteractionMode::Pan;
            self.hold_switched = true;
            log::debug!("Hold key: forcing pan mode");
            return true;
        }
        false
    }

    /// The designated hold key was released.
    ///
    /// Restores the prior mode, but only if the hold caused the switch
    /// in the first place. Returns true if the mode changed.
    pub fn hold_released(&mut self) -> bool {
        if !self.hold_active {
            return false;
        }
        self.hold_active = false;
        if self.hold_switched && self.mode == InteractionMode::Pan {
            self.mode = InteractionMode::Annotate;
            self.hold_switched = false;
            log::debug!("Hold key released: restoring annotate mode");
            return true;
        }
        self.hold_switched = false;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_annotate() {
        let machine = ModeStateMachine::new();
        assert_eq!(machine.mode(), InteractionMode::Annotate);
        assert!(!machine.is_pan());
    }

    #[test]
    fn test_explicit_toggle_flips() {
        let mut machine = ModeStateMachine::new();
        assert_eq!(machine.toggle(), InteractionMode::Pan);
        assert_eq!(machine.toggle(), InteractionMode::Annotate);
    }

    #[test]
    fn test_hold_forces_pan_and_restores() {
        let mut machine = ModeStateMachine::new();
        assert!(machine.hold_pressed());
        assert_eq!(machine.mode(), InteractionMode::Pan);
        assert!(machine.hold_released());
        assert_eq!(machine.mode(), InteractionMode::Annotate);
    }

    #[test]
    fn test_hold_auto_repeat_does_not_retoggle() {
        let mut machine = ModeStateMachine::new();
        assert!(machine.hold_pressed());
        // Key auto-repeat delivers more presses while held
        assert!(!machine.hold_pressed());
        assert!(!machine.hold_pressed());
        assert_eq!(machine.mode(), InteractionMode::Pan);
        assert!(machine.hold_released());
        assert_eq!(machine.mode(), InteractionMode::Annotate);
    }

    #[test]
    fn test_hold_over_explicit_pan_is_preserved() {
        // If the user toggled to pan before holding, releasing the key
        // must not kick them back to annotate.
        let mut machine = ModeStateMachine::new();
        machine.toggle();
        assert_eq!(machine.mode(), InteractionMode::Pan);
        assert!(!machine.hold_pressed());
        assert!(!machine.hold_released());
        assert_eq!(machine.mode(), InteractionMode::Pan);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut machine = ModeStateMachine::new();
        assert!(!machine.hold_released());
        assert_eq!(machine.mode(), InteractionMode::Annotate);
    }
}
