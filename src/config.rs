//! Construction-time configuration.
//!
//! The simulation runs in a fixed pixel-space whose bounds are set here
//! once; malformed bounds are rejected up front rather than producing
//! empty spawn ranges later.

use anyhow::{bail, Result};

use crate::entities::SpriteTable;

pub const DEFAULT_DISPLAY_WIDTH: i32 = 640;
pub const DEFAULT_DISPLAY_HEIGHT: i32 = 480;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub display_width: i32,
    pub display_height: i32,
    pub sprites: SpriteTable,
}

impl Config {
    /// Validate the display bounds against the sprite dimensions.
    pub fn new(display_width: i32, display_height: i32) -> Result<Self> {
        let sprites = SpriteTable::default();

        if display_width <= 0 || display_height <= 0 {
            bail!(
                "display dimensions must be positive, got {display_width}x{display_height}"
            );
        }

        let widest = sprites
            .robot
            .width
            .max(sprites.coin.width)
            .max(sprites.monster.width);
        if display_width < widest {
            bail!(
                "display width {display_width} is narrower than the widest sprite ({widest})"
            );
        }
        if display_height < sprites.robot.height {
            bail!(
                "display height {display_height} is shorter than the robot sprite ({})",
                sprites.robot.height
            );
        }

        Ok(Config {
            display_width,
            display_height,
            sprites,
        })
    }
}
