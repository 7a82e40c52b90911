use std::path::PathBuf;
use log::{info, warn};
use raylib::prelude::*;
use crate::constants::*;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::visibility::Extent;

enum SlideImage {
    Pending,
    Loaded(Texture2D),
    Failed,
}

pub struct Slide {
    path: PathBuf,
    image: SlideImage,

    offset: f32, // percent of the viewport width, animated
    target_offset: f32,
    tween_offset: ease::Tween,
    offset_timer: f32,
    pub is_animating: bool,

    revealed: bool,
    reveal_timer: f32,
    tween_reveal: ease::Tween,
    opacity: f32,
}

impl Slide {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            image: SlideImage::Pending,

            offset: 0.0,
            target_offset: 0.0,
            tween_offset: ease::Tween::new(ease::cubic_out, 0.0, 0.0, TRANSITION_DURATION),
            offset_timer: 0.0,
            is_animating: false,

            revealed: false,
            reveal_timer: 0.0,
            tween_reveal: ease::Tween::new(ease::cubic_out, 0.0, 1.0, REVEAL_DURATION),
            opacity: 0.0,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The first placement jumps straight there; later ones ease from
    /// wherever the slide currently is.
    pub fn set_target_offset(&mut self, percent: i32, animate: bool) {
        let target = percent as f32;
        if !animate {
            self.offset = target;
            self.target_offset = target;
            self.is_animating = false;
            return;
        }
        if target == self.target_offset {
            return;
        }
        self.target_offset = target;
        self.tween_offset = ease::Tween::new(ease::cubic_out, self.offset, target, TRANSITION_DURATION);
        self.offset_timer = 0.0;
        self.is_animating = true;
    }

    pub fn extent(&self) -> Extent {
        let start = self.offset / 100.0;
        Extent { start, end: start + 1.0 }
    }

    /// Decodes and uploads the image; called once the slide nears the viewport.
    pub fn load(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if !matches!(self.image, SlideImage::Pending) {
            return;
        }

        match load_texture_with_exif_rotation(rl, thread, &self.path) {
            Ok(texture) => {
                info!("Loaded {} ({}x{})", self.file_name(), texture.width(), texture.height());
                self.image = SlideImage::Loaded(texture);
            }
            Err(e) => {
                warn!("Keeping placeholder for {}: {:#}", self.file_name(), e);
                self.image = SlideImage::Failed;
            }
        }
    }

    /// Starts the fade-in; called once the slide is actually on screen.
    pub fn start_reveal(&mut self) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        self.reveal_timer = 0.0;
    }

    #[cfg(test)]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_animating {
            self.offset = self.tween_offset.apply(dt);
            self.offset_timer += dt;
            if self.offset_timer >= TRANSITION_DURATION {
                self.is_animating = false;
                self.offset = self.target_offset;
            }
        }

        if self.revealed && self.reveal_timer < REVEAL_DURATION {
            self.opacity = self.tween_reveal.apply(dt);
            self.reveal_timer += dt;
            if self.reveal_timer >= REVEAL_DURATION {
                self.opacity = 1.0;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen: Vector2) {
        if !self.extent().intersects(0.0) {
            return;
        }

        let shift = screen.x * self.offset / 100.0;

        match &self.image {
            SlideImage::Loaded(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;

                // Fit inside the screen, never upscale
                let scale = (screen.x * SLIDE_FILL / tex_width)
                    .min(screen.y * SLIDE_FILL / tex_height)
                    .min(1.0);
                let width = tex_width * scale;
                let height = tex_height * scale;

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(shift + (screen.x - width) * 0.5, (screen.y - height) * 0.5, width, height),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE.fade(self.opacity),
                );
            }
            SlideImage::Pending | SlideImage::Failed => {
                let width = screen.x * SLIDE_FILL;
                let height = screen.y * SLIDE_FILL;
                let rect = Rectangle::new(shift + (screen.x - width) * 0.5, (screen.y - height) * 0.5, width, height);
                d.draw_rectangle_rec(rect, Color::DARKGRAY.fade(0.5));
                if let SlideImage::Failed = self.image {
                    d.draw_text(
                        &format!("Could not load {}", self.file_name()),
                        rect.x as i32 + 20,
                        rect.y as i32 + 20,
                        CAPTION_FONT_SIZE,
                        Color::RED,
                    );
                }
            }
        }
    }
}
