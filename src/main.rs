use anyhow::{Context, Result};
use log::info;
use rand::seq::SliceRandom;
use raylib::prelude::*;

mod carousel;
mod config;
mod constants;
mod controls;
mod error;
mod input;
mod modal;
mod slide;
mod stage;
mod surface;
mod texture_loader;
mod visibility;

use crate::carousel::Carousel;
use crate::config::Config;
use crate::constants::*;
use crate::controls::HoverFade;
use crate::input::{command_for_key, dispatch, route_click};
use crate::modal::Modal;
use crate::stage::Stage;
use crate::texture_loader::load_sorted_image_paths;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args()?;
    info!("Input path: {}", config.directory.display());

    // --- Discover Slides ---
    let mut image_paths = load_sorted_image_paths(&config.directory)?;
    if config.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("Found {} images", image_paths.len());

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the help modal
    rl.set_exit_key(None);

    let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    let stage = Stage::new(image_paths, screen, config.lazy_margin);
    let mut carousel = Carousel::new(stage, config.start_slide)
        .with_context(|| format!("Cannot start at slide {}", config.start_slide))?;

    let fade = HoverFade { opacity: config.hover_opacity };
    let mut modal = Modal::default();
    let mut shown = carousel.current_slide();
    rl.set_window_title(&thread, &format!("Carousel {}/{}", shown + 1, carousel.len()));

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        if rl.is_window_resized() {
            carousel.surface_mut().resize(screen);
        }

        // --- Input, in arrival order: keys first, then the pointer ---
        let mut commands = Vec::new();
        while let Some(key) = rl.get_key_pressed() {
            commands.extend(command_for_key(key));
        }

        let pointer = rl.get_mouse_position();
        let hovered = if modal.is_open() { None } else { carousel.surface().controls.hit_test(pointer) };
        carousel.surface_mut().controls.hover(hovered, fade);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let controls = &carousel.surface().controls;
            let command = route_click(&mut modal, pointer, screen, hovered, |i| {
                controls.dots().get(i).map(|d| d.label.as_str())
            });
            commands.extend(command);
        }

        dispatch(commands, &mut carousel, &mut modal);

        if carousel.current_slide() != shown {
            shown = carousel.current_slide();
            rl.set_window_title(&thread, &format!("Carousel {}/{}", shown + 1, carousel.len()));
        }

        // --- Update ---
        let stage = carousel.surface_mut();
        stage.update(dt);
        stage.load_visible(&mut rl, &thread);
        stage.reveal_visible();

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.surface().draw(&mut d);
        modal.draw(&mut d, screen);
    }

    Ok(())
}
