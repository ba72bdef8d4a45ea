use bevy::prelude::*;
use game_core::Sign;

use super::{O_SPRITE_PATH, X_SPRITE_PATH};

/// Handles to the mark images, one per sign.
#[derive(Debug, Resource)]
pub struct Images {
    x_img: Handle<Image>,
    o_img: Handle<Image>,
}

impl FromWorld for Images {
    fn from_world(world: &mut World) -> Self {
        let asset_server = world.resource::<AssetServer>();
        Self {
            x_img: asset_server.load(X_SPRITE_PATH),
            o_img: asset_server.load(O_SPRITE_PATH),
        }
    }
}

impl Images {
    pub fn get(&self, sign: Sign) -> &Handle<Image> {
        match sign {
            Sign::X => &self.x_img,
            Sign::O => &self.o_img,
        }
    }
}
