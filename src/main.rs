use sdl2::event::Event;
use std::time::Duration;

mod config;
mod error;
mod game;
mod jellyfish;
mod render;
mod surface;
mod text;

use config::{GameConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use error::GameError;
use game::Game;
use log::info;
use render::{PointerState, SdlSurface, load_sprite};

/// The jellyfish sprite, embedded so the binary runs from anywhere
const JELLYFISH_PNG: &[u8] = include_bytes!("../assets/jellyfish.png");

const FRAME_TIME: Duration = Duration::new(0, 1_000_000_000u32 / 60);

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load()?;
    if config.debug {
        info!("Debug overlay enabled");
    }

    let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::Sdl)?;

    let window = video_subsystem
        .window(&config.title, SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let (sprite_texture, sprite_size) = load_sprite(&texture_creator, JELLYFISH_PNG)?;
    info!("Loaded sprite ({}x{})", sprite_size.width, sprite_size.height);

    let mut game = Game::new(config, sprite_size);

    // The game always sees its own logical resolution; SDL scales to the window
    let (logical_width, logical_height) = game.layout();
    canvas
        .set_logical_size(logical_width, logical_height)
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let mut event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

    info!("Click to drop jellyfish. Past 100 they start falling on their own.");

    'running: loop {
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
        }

        let pointer = PointerState::from_mouse(&event_pump.mouse_state());
        game.update(&pointer);

        let mut surface = SdlSurface::new(&mut canvas, &sprite_texture);
        game.draw(&mut surface)?;
        canvas.present();

        std::thread::sleep(FRAME_TIME);
    }

    info!(
        "Final score: {:.0} ({} jellyfish still tracked)",
        game.state().score,
        game.jellyfishes().len()
    );
    Ok(())
}
