use std::path::Path;

use macroquad::text::{load_ttf_font, Font};
use macroquad::texture::{load_texture, Texture2D};
use thiserror::Error;
use tracing::debug;

pub const BACKGROUND_FILE: &str = "background.png";
pub const FOOD_FILE: &str = "food.png";
pub const FONT_FILE: &str = "arial.ttf";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to load {kind} image ({path}): {reason}")]
    Texture {
        kind: &'static str,
        path: String,
        reason: String,
    },

    #[error("Failed to load font ({path}): {reason}")]
    Font { path: String, reason: String },
}

/// Everything the renderer needs from disk, loaded once before the first frame.
pub struct Assets {
    pub background: Texture2D,
    pub food: Texture2D,
    pub font: Font,
}

impl Assets {
    pub async fn load(dir: &Path) -> Result<Self, AssetError> {
        let background = texture(dir, BACKGROUND_FILE, "background").await?;
        let food = texture(dir, FOOD_FILE, "food").await?;

        let path = asset_path(dir, FONT_FILE);
        let font = load_ttf_font(&path).await.map_err(|err| AssetError::Font {
            path: path.clone(),
            reason: format!("{:?}", err),
        })?;
        debug!(%path, "loaded font");

        Ok(Assets { background, food, font })
    }
}

async fn texture(dir: &Path, file: &str, kind: &'static str) -> Result<Texture2D, AssetError> {
    let path = asset_path(dir, file);
    let texture = load_texture(&path).await.map_err(|err| AssetError::Texture {
        kind,
        path: path.clone(),
        reason: format!("{:?}", err),
    })?;
    debug!(%path, width = texture.width(), height = texture.height(), "loaded texture");

    Ok(texture)
}

fn asset_path(dir: &Path, file: &str) -> String {
    dir.join(file).to_string_lossy().into_owned()
}
