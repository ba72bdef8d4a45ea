use bevy::prelude::*;
use game_core::Sign;

use super::common;
use super::components::{
    ResetButton, ResetButtonBundle, StatusText, StatusTextBundle, TurnImage, TurnImageBundle,
};
use super::events::ResetPressed;
use crate::game::{GameDraw, GameReset, Images, MoveMade, SignWon, TurnStart};

const FIRST_TURN_TEXT: &str = "First turn:";
const NEXT_TURN_TEXT: &str = "Next turn:";
const TIE_TEXT: &str = "It's a tie!";

/// Spawns the bottom panel: status text, the active sign's image and
/// the reset button.
pub fn create(mut commands: Commands, images: Res<Images>) {
    commands
        .spawn((common::panel_node(), BackgroundColor(common::PANEL_COLOR)))
        .with_children(|builder| {
            builder.spawn(common::row_node()).with_children(|builder| {
                builder.spawn(StatusTextBundle::new(FIRST_TURN_TEXT));
                builder.spawn(TurnImageBundle::new(images.get(Sign::X).clone()));
            });
            builder.spawn(ResetButtonBundle::new()).with_child((
                Text::new("RESET"),
                TextFont {
                    font_size: common::RESET_FONT_SIZE,
                    ..default()
                },
                TextColor(common::RESET_TEXT_COLOR),
            ));
        });
}

/// Receive [`TurnStart`] event and show which sign moves next.
pub fn update_next_turn(
    mut text: Query<(&mut Text, &mut TextColor), With<StatusText>>,
    mut image: Query<(&mut ImageNode, &mut Visibility), With<TurnImage>>,
    mut turn_start: EventReader<TurnStart>,
    images: Res<Images>,
) {
    for event in turn_start.read() {
        if let Ok((mut text, mut color)) = text.get_single_mut() {
            text.0 = NEXT_TURN_TEXT.to_string();
            *color = TextColor(common::TEXT_COLOR);
        }
        if let Ok((mut image, mut visibility)) = image.get_single_mut() {
            image.image = images.get(**event).clone();
            *visibility = Visibility::Inherited;
        }
    }
}

/// Receive [`SignWon`] event and announce the winner in the winner's
/// color, keeping the winner's mark next to the text.
pub fn set_winner(
    mut text: Query<(&mut Text, &mut TextColor), With<StatusText>>,
    mut image: Query<(&mut ImageNode, &mut Visibility), With<TurnImage>>,
    mut sign_won: EventReader<SignWon>,
    images: Res<Images>,
) {
    for event in sign_won.read() {
        if let Ok((mut text, mut color)) = text.get_single_mut() {
            text.0 = format!("{} wins!", **event);
            *color = TextColor(common::sign_color(**event));
        }
        if let Ok((mut image, mut visibility)) = image.get_single_mut() {
            image.image = images.get(**event).clone();
            *visibility = Visibility::Inherited;
        }
    }
}

/// Receive [`GameDraw`] event and announce the tie. No sign image, the
/// board belongs to no one.
pub fn set_draw(
    mut text: Query<(&mut Text, &mut TextColor), With<StatusText>>,
    mut image: Query<&mut Visibility, With<TurnImage>>,
    mut game_draw: EventReader<GameDraw>,
) {
    for _ in game_draw.read() {
        if let Ok((mut text, mut color)) = text.get_single_mut() {
            text.0 = TIE_TEXT.to_string();
            *color = TextColor(common::TIE_TEXT_COLOR);
        }
        if let Ok(mut visibility) = image.get_single_mut() {
            *visibility = Visibility::Hidden;
        }
    }
}

/// Receive [`GameReset`] event and restore the initial panel.
pub fn reset_status(
    mut text: Query<(&mut Text, &mut TextColor), With<StatusText>>,
    mut image: Query<(&mut ImageNode, &mut Visibility), With<TurnImage>>,
    mut game_reset: EventReader<GameReset>,
    images: Res<Images>,
) {
    for _ in game_reset.read() {
        if let Ok((mut text, mut color)) = text.get_single_mut() {
            text.0 = FIRST_TURN_TEXT.to_string();
            *color = TextColor(common::TEXT_COLOR);
        }
        if let Ok((mut image, mut visibility)) = image.get_single_mut() {
            image.image = images.get(Sign::X).clone();
            *visibility = Visibility::Inherited;
        }
    }
}

/// Send [`ResetPressed`] when the reset button is pressed.
pub fn handle_reset_button(
    button: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut reset_pressed: EventWriter<ResetPressed>,
) {
    for interaction in button.iter() {
        if *interaction == Interaction::Pressed {
            reset_pressed.send(ResetPressed);
        }
    }
}

/// Lighten the reset button while the pointer hovers over it.
pub fn update_reset_button_color(
    mut button: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ResetButton>)>,
) {
    for (interaction, mut background) in button.iter_mut() {
        *background = match interaction {
            Interaction::Hovered => common::RESET_BUTTON_HOVERED_COLOR.into(),
            _ => common::RESET_BUTTON_COLOR.into(),
        };
    }
}

/// The reset button appears with the first move and hides again right
/// after a reset.
pub fn update_reset_button_visibility(
    mut button: Query<&mut Visibility, With<ResetButton>>,
    mut move_made: EventReader<MoveMade>,
    mut game_reset: EventReader<GameReset>,
) {
    if move_made.read().next().is_some() {
        for mut visibility in button.iter_mut() {
            *visibility = Visibility::Inherited;
        }
    }
    if game_reset.read().next().is_some() {
        for mut visibility in button.iter_mut() {
            *visibility = Visibility::Hidden;
        }
    }
}
