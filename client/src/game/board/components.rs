use bevy::prelude::*;
use game_core::GridIndex;

/// Marker for the grid line sprites.
#[derive(Component)]
pub struct Border;

/// Board cell sprite, carries the grid index of its cell.
#[derive(Clone, Copy, Debug, PartialEq, Component)]
pub struct Tile(GridIndex);

impl Tile {
    pub fn index(&self) -> GridIndex {
        self.0
    }
}

impl From<GridIndex> for Tile {
    fn from(value: GridIndex) -> Self {
        Self(value)
    }
}

/// Bundle for a board tile. The mark image stays hidden until the cell
/// is played.
#[derive(Bundle)]
pub struct TileBundle {
    sprite: Sprite,
    transform: Transform,
    visibility: Visibility,
    tile: Tile,
}

impl TileBundle {
    pub fn new_empty(size: Vec2, translation: Vec3, index: GridIndex) -> Self {
        Self {
            sprite: Sprite {
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_translation(translation),
            visibility: Visibility::Hidden,
            tile: index.into(),
        }
    }
}

/// Bundle for a grid line.
#[derive(Bundle)]
pub struct BorderBundle {
    sprite: Sprite,
    transform: Transform,
    border: Border,
}

impl BorderBundle {
    pub fn new(color: Color, size: Vec2, translation: Vec3) -> Self {
        Self {
            sprite: Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_translation(translation),
            border: Border,
        }
    }
}
