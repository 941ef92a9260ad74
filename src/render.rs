//! SDL2-backed display/input surface
//!
//! This module is the only place that knows the game is drawn with SDL:
//!
//! - `decode_sprite()`: decodes the embedded PNG, no window needed
//! - `load_sprite()`: turns the decoded image into a texture, once at startup
//! - `SdlSurface`: implements `DrawSurface` on top of a window canvas
//! - `PointerState`: implements `InputSurface` from SDL's mouse state
//!
//! # Usage Example
//!
//! ```rust
//! let (texture, size) = load_sprite(&texture_creator, JELLYFISH_PNG)?;
//! let mut surface = SdlSurface::new(&mut canvas, &texture);
//! game.draw(&mut surface)?;
//! canvas.present();
//! ```
use crate::error::GameError;
use crate::surface::{DrawSurface, InputSurface, Placement, SpriteSize};
use crate::text::{TEXT_SCALE, glyph_rects};
use sdl2::image::ImageRWops;
use sdl2::mouse::MouseState;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};

/// Decode PNG bytes and report the image's pixel size
pub fn decode_sprite(png: &[u8]) -> Result<(Surface<'static>, SpriteSize), GameError> {
    let rwops = RWops::from_bytes(png).map_err(GameError::AssetDecode)?;
    let image = rwops.load_png().map_err(GameError::AssetDecode)?;

    let size = SpriteSize {
        width: image.width(),
        height: image.height(),
    };
    if size.width == 0 || size.height == 0 {
        return Err(GameError::AssetDecode("image has no pixels".to_string()));
    }

    Ok((image, size))
}

/// Decode PNG bytes into a texture and report its pixel size
pub fn load_sprite<'t>(
    texture_creator: &'t TextureCreator<WindowContext>,
    png: &[u8],
) -> Result<(Texture<'t>, SpriteSize), GameError> {
    let (image, size) = decode_sprite(png)?;
    let texture = texture_creator
        .create_texture_from_surface(&image)
        .map_err(|e| GameError::AssetDecode(e.to_string()))?;

    Ok((texture, size))
}

/// A window canvas plus the sprite texture, borrowed for one frame
pub struct SdlSurface<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    sprite: &'c Texture<'t>,
}

impl<'c, 't> SdlSurface<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>, sprite: &'c Texture<'t>) -> Self {
        SdlSurface { canvas, sprite }
    }
}

impl DrawSurface for SdlSurface<'_, '_> {
    fn fill(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn draw_sprite(&mut self, placement: Placement) -> Result<(), String> {
        self.canvas.copy(self.sprite, None, placement_rect(placement))
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        let rects = glyph_rects(text, x, y, TEXT_SCALE);
        if rects.is_empty() {
            return Ok(());
        }
        self.canvas.fill_rects(&rects)
    }
}

/// Snap a placement to whole pixels; a sprite is never thinner than 1px
fn placement_rect(placement: Placement) -> Rect {
    Rect::new(
        placement.x.round() as i32,
        placement.y.round() as i32,
        (placement.width.round() as u32).max(1),
        (placement.height.round() as u32).max(1),
    )
}

/// Left-button state captured at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    pub left: bool,
}

impl PointerState {
    pub fn from_mouse(state: &MouseState) -> Self {
        PointerState { left: state.left() }
    }
}

impl InputSurface for PointerState {
    fn is_primary_pressed(&self) -> bool {
        self.left
    }
}
