use bevy::prelude::*;

use super::common;

/// Marker for the bottom "whose turn" text.
#[derive(Component)]
pub struct StatusText;

/// Marker for the image of the sign to move next (or the winner).
#[derive(Component)]
pub struct TurnImage;

/// Marker for the reset button.
#[derive(Component)]
pub struct ResetButton;

#[derive(Bundle)]
pub struct StatusTextBundle {
    text: Text,
    font: TextFont,
    color: TextColor,
    status: StatusText,
}

impl StatusTextBundle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Text::new(text),
            font: common::status_text_font(),
            color: TextColor(common::TEXT_COLOR),
            status: StatusText,
        }
    }
}

#[derive(Bundle)]
pub struct TurnImageBundle {
    image: ImageNode,
    node: Node,
    turn_image: TurnImage,
}

impl TurnImageBundle {
    pub fn new(image: Handle<Image>) -> Self {
        Self {
            image: ImageNode::new(image),
            node: Node {
                width: Val::Px(common::TURN_IMAGE_SIDE),
                height: Val::Px(common::TURN_IMAGE_SIDE),
                ..default()
            },
            turn_image: TurnImage,
        }
    }
}

/// Bundle for the reset button. Hidden until the first move is made.
#[derive(Bundle)]
pub struct ResetButtonBundle {
    button: Button,
    node: Node,
    background_color: BackgroundColor,
    visibility: Visibility,
    reset: ResetButton,
}

impl ResetButtonBundle {
    pub fn new() -> Self {
        Self {
            button: Button,
            node: Node {
                width: Val::Px(100.0),
                height: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background_color: common::RESET_BUTTON_COLOR.into(),
            visibility: Visibility::Hidden,
            reset: ResetButton,
        }
    }
}
