use bevy::prelude::Event;

/// Event emitted when the reset button is pressed.
#[derive(Clone, Copy, Debug, Event)]
pub struct ResetPressed;
