use bevy::prelude::*;
use game_core::Sign;

use crate::settings::PANEL_HEIGHT;

pub const FONT_SIZE: f32 = 30.0;
pub const RESET_FONT_SIZE: f32 = 18.0;
pub const TURN_IMAGE_SIDE: f32 = 50.0;

pub const TEXT_COLOR: Color = Color::BLACK;
pub const TIE_TEXT_COLOR: Color = Color::srgb(0.5, 0.0, 0.5);
pub const X_COLOR: Color = Color::srgb(0.85, 0.1, 0.1);
pub const O_COLOR: Color = Color::srgb(0.1, 0.25, 0.85);

pub const PANEL_COLOR: Color = Color::WHITE;
pub const RESET_BUTTON_COLOR: Color = Color::srgb(0.85, 0.1, 0.1);
pub const RESET_BUTTON_HOVERED_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);
pub const RESET_TEXT_COLOR: Color = Color::WHITE;

/// Each sign announces itself in its mark's color.
pub fn sign_color(sign: Sign) -> Color {
    match sign {
        Sign::X => X_COLOR,
        Sign::O => O_COLOR,
    }
}

// Containers

pub fn panel_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        bottom: Val::Px(0.0),
        width: Val::Percent(100.0),
        height: Val::Px(PANEL_HEIGHT),
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::SpaceBetween,
        padding: UiRect::horizontal(Val::Px(10.0)),
        column_gap: Val::Px(10.0),
        ..default()
    }
}

pub fn row_node() -> Node {
    Node {
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        column_gap: Val::Px(10.0),
        ..default()
    }
}

pub fn status_text_font() -> TextFont {
    TextFont {
        font_size: FONT_SIZE,
        ..default()
    }
}
