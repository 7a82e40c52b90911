use std::path::PathBuf;
use raylib::prelude::*;
use crate::constants::*;
use crate::controls::Controls;
use crate::slide::Slide;
use crate::surface::SlideSurface;
use crate::visibility::{VisibilityWatcher, Watch};

/// raylib render surface of the carousel: the slides plus their controls.
pub struct Stage {
    slides: Vec<Slide>,
    pub controls: Controls,
    loader: VisibilityWatcher,
    revealer: VisibilityWatcher,
    screen: Vector2,
    current: usize,
    placed: bool,
}

impl Stage {
    pub fn new(paths: Vec<PathBuf>, screen: Vector2, lazy_margin: f32) -> Self {
        let slides: Vec<Slide> = paths.into_iter().map(Slide::new).collect();

        // Loading looks ahead by the margin, the fade waits for the real viewport
        let mut loader = VisibilityWatcher::new(lazy_margin);
        let mut revealer = VisibilityWatcher::new(0.0);
        for id in 0..slides.len() {
            loader.observe(id);
            revealer.observe(id);
        }

        Self {
            slides,
            controls: Controls::new(screen),
            loader,
            revealer,
            screen,
            current: 0,
            placed: false,
        }
    }

    pub fn resize(&mut self, screen: Vector2) {
        self.screen = screen;
        self.controls.resize(screen);
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    /// Loads every slide that came within the lazy margin of the viewport
    /// since the last frame. Each slide is watched until its first load.
    pub fn load_visible(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let extents: Vec<_> = self.slides.iter().map(Slide::extent).enumerate().collect();
        let slides = &mut self.slides;
        self.loader.poll(extents, |id, visible| {
            if !visible {
                return Watch::Keep;
            }
            slides[id].load(rl, thread);
            Watch::Unobserve
        });
    }

    /// Starts the fade of every slide that entered the viewport itself.
    pub fn reveal_visible(&mut self) {
        let extents: Vec<_> = self.slides.iter().map(Slide::extent).enumerate().collect();
        let slides = &mut self.slides;
        self.revealer.poll(extents, |id, visible| {
            if !visible {
                return Watch::Keep;
            }
            slides[id].start_reveal();
            Watch::Unobserve
        });
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for slide in self.slides.iter() {
            slide.draw(d, self.screen);
        }

        self.controls.draw(d);

        if let Some(slide) = self.slides.get(self.current) {
            let caption = format!("{} / {}   {}", self.current + 1, self.slides.len(), slide.file_name());
            d.draw_text(
                &caption,
                BUTTON_MARGIN as i32,
                BUTTON_MARGIN as i32,
                CAPTION_FONT_SIZE,
                Color::WHITE.fade(self.controls.caption_opacity()),
            );
        }
    }
}

impl SlideSurface for Stage {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn create_dot(&mut self, _index: usize, label: String) {
        self.controls.push_dot(label);
    }

    fn set_offset(&mut self, slide: usize, percent: i32) {
        if percent == 0 {
            self.current = slide;
        }
        let animate = self.placed;
        if let Some(s) = self.slides.get_mut(slide) {
            s.set_target_offset(percent, animate);
        }
        if slide + 1 == self.slides.len() {
            self.placed = true;
        }
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        self.controls.set_dot_active(dot, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;

    fn stage(count: usize) -> Stage {
        let paths = (0..count).map(|i| PathBuf::from(format!("{i}.png"))).collect();
        Stage::new(paths, Vector2::new(800.0, 600.0), DEFAULT_LAZY_MARGIN)
    }

    #[test]
    fn first_render_places_without_animation_then_animates() {
        let mut carousel = Carousel::new(stage(3), 0).unwrap();
        assert!(carousel.surface().slides.iter().all(|s| !s.is_animating));

        carousel.next_slide();
        let stage = carousel.surface();
        assert_eq!(stage.current, 1);
        assert!(stage.slides.iter().all(|s| s.is_animating));
    }

    #[test]
    fn dots_follow_the_carousel() {
        let mut carousel = Carousel::new(stage(4), 0).unwrap();
        carousel.go_to_slide(2).unwrap();
        let active: Vec<bool> = carousel.surface().controls.dots().iter().map(|d| d.active).collect();
        assert_eq!(active, [false, false, true, false]);
        let labels: Vec<&str> = carousel.surface().controls.dots().iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["0", "1", "2", "3"]);
    }

    #[test]
    fn every_slide_starts_watched() {
        let stage = stage(3);
        assert!((0..3).all(|id| stage.loader.is_observing(id)));
        assert!((0..3).all(|id| stage.revealer.is_observing(id)));
    }

    #[test]
    fn neighbour_fades_in_only_once_it_enters_the_viewport() {
        let step = 1.0 / FPS as f32;
        let mut carousel = Carousel::new(stage(3), 0).unwrap();

        // slide 1 waits just off screen, inside the lazy margin
        let stage = carousel.surface_mut();
        stage.reveal_visible();
        for _ in 0..FPS {
            stage.update(step);
            stage.reveal_visible();
        }
        assert_eq!(stage.slides[0].opacity(), 1.0);
        assert_eq!(stage.slides[1].opacity(), 0.0);
        assert!(stage.loader.is_observing(1));
        assert!(stage.revealer.is_observing(1));

        carousel.next_slide();
        let stage = carousel.surface_mut();
        stage.update(step);
        stage.update(step);
        stage.reveal_visible();
        assert!(!stage.revealer.is_observing(1));
        stage.update(step);
        stage.update(step);
        let fading = stage.slides[1].opacity();
        assert!(fading > 0.0 && fading < 1.0);

        // slide 2 is still off screen a few frames into the transition
        assert_eq!(stage.slides[2].opacity(), 0.0);
        assert!(stage.revealer.is_observing(2));
    }
}
