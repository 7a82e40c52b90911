use raylib::prelude::*;
use crate::constants::*;

/// Opacity applied to sibling controls while one control is hovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverFade {
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    Help,
    Dot(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Button {
    Prev = 0,
    Next = 1,
    Help = 2,
}

const BUTTONS: [Button; 3] = [Button::Prev, Button::Next, Button::Help];

pub struct Dot {
    pub label: String,
    pub active: bool,
}

pub struct Controls {
    screen: Vector2,
    dots: Vec<Dot>,
    button_opacity: [f32; 3],
    caption_opacity: f32,
}

impl Controls {
    pub fn new(screen: Vector2) -> Self {
        Self {
            screen,
            dots: Vec::new(),
            button_opacity: [1.0; 3],
            caption_opacity: 1.0,
        }
    }

    pub fn resize(&mut self, screen: Vector2) {
        self.screen = screen;
    }

    pub fn push_dot(&mut self, label: String) {
        self.dots.push(Dot { label, active: false });
    }

    pub fn set_dot_active(&mut self, dot: usize, active: bool) {
        if let Some(dot) = self.dots.get_mut(dot) {
            dot.active = active;
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn caption_opacity(&self) -> f32 {
        self.caption_opacity
    }

    fn button_rect(&self, button: Button) -> Rectangle {
        let y = (self.screen.y - BUTTON_SIZE) * 0.5;
        match button {
            Button::Prev => Rectangle::new(BUTTON_MARGIN, y, BUTTON_SIZE, BUTTON_SIZE),
            Button::Next => Rectangle::new(self.screen.x - BUTTON_MARGIN - BUTTON_SIZE, y, BUTTON_SIZE, BUTTON_SIZE),
            Button::Help => Rectangle::new(
                self.screen.x - BUTTON_MARGIN - BUTTON_SIZE * 0.6,
                BUTTON_MARGIN,
                BUTTON_SIZE * 0.6,
                BUTTON_SIZE * 0.6,
            ),
        }
    }

    fn dot_center(&self, index: usize) -> Vector2 {
        let strip = (self.dots.len().saturating_sub(1)) as f32 * DOT_SPACING;
        Vector2::new(
            (self.screen.x - strip) * 0.5 + index as f32 * DOT_SPACING,
            self.screen.y - DOT_STRIP_OFFSET,
        )
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        for button in BUTTONS {
            if self.button_rect(button).check_collision_point_rec(point) {
                return Some(match button {
                    Button::Prev => Control::Prev,
                    Button::Next => Control::Next,
                    Button::Help => Control::Help,
                });
            }
        }

        // Hit area is a bit larger than the drawn dot
        let reach = DOT_SPACING * 0.5;
        (0..self.dots.len()).find_map(|index| {
            let center = self.dot_center(index);
            let inside = (point.x - center.x).abs() <= reach && (point.y - center.y).abs() <= reach;
            inside.then_some(Control::Dot(index))
        })
    }

    /// Fades every button except the hovered one, plus the caption.
    /// `None` (pointer left the controls) restores full opacity.
    pub fn hover(&mut self, hovered: Option<Control>, fade: HoverFade) {
        let hovered_button = match hovered {
            Some(Control::Prev) => Some(Button::Prev),
            Some(Control::Next) => Some(Button::Next),
            Some(Control::Help) => Some(Button::Help),
            Some(Control::Dot(_)) | None => None,
        };

        match hovered_button {
            Some(hovered) => {
                for button in BUTTONS {
                    self.button_opacity[button as usize] = if button == hovered { 1.0 } else { fade.opacity };
                }
                self.caption_opacity = fade.opacity;
            }
            None => {
                self.button_opacity = [1.0; 3];
                self.caption_opacity = 1.0;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for button in BUTTONS {
            let rect = self.button_rect(button);
            let alpha = self.button_opacity[button as usize];
            d.draw_rectangle_rounded(rect, 0.5, 8, Color::WHITE.fade(0.7 * alpha));

            let glyph = match button {
                Button::Prev => "<",
                Button::Next => ">",
                Button::Help => "?",
            };
            let size = (rect.height * 0.6) as i32;
            d.draw_text(
                glyph,
                (rect.x + rect.width * 0.5 - size as f32 * 0.25) as i32,
                (rect.y + rect.height * 0.5 - size as f32 * 0.5) as i32,
                size,
                Color::DARKGRAY.fade(alpha),
            );
        }

        for (index, dot) in self.dots.iter().enumerate() {
            let center = self.dot_center(index);
            if dot.active {
                d.draw_circle_v(center, DOT_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_v(center, DOT_RADIUS, Color::WHITE.fade(0.35));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: HoverFade = HoverFade { opacity: 0.5 };

    fn controls(dots: usize) -> Controls {
        let mut controls = Controls::new(Vector2::new(1000.0, 600.0));
        for i in 0..dots {
            controls.push_dot(i.to_string());
        }
        controls
    }

    #[test]
    fn buttons_are_hit_at_their_centers() {
        let c = controls(0);
        assert_eq!(c.hit_test(Vector2::new(24.0 + 28.0, 300.0)), Some(Control::Prev));
        assert_eq!(c.hit_test(Vector2::new(1000.0 - 24.0 - 28.0, 300.0)), Some(Control::Next));
        assert_eq!(c.hit_test(Vector2::new(1000.0 - 24.0 - 16.0, 40.0)), Some(Control::Help));
        assert_eq!(c.hit_test(Vector2::new(500.0, 300.0)), None);
    }

    #[test]
    fn dots_are_centered_and_hit_by_index() {
        // three dots: centers at 472, 500, 528 on y = 560
        let c = controls(3);
        assert_eq!(c.hit_test(Vector2::new(472.0, 560.0)), Some(Control::Dot(0)));
        assert_eq!(c.hit_test(Vector2::new(500.0, 556.0)), Some(Control::Dot(1)));
        assert_eq!(c.hit_test(Vector2::new(530.0, 562.0)), Some(Control::Dot(2)));
        assert_eq!(c.hit_test(Vector2::new(600.0, 560.0)), None);
    }

    #[test]
    fn hovering_a_button_fades_its_siblings_and_the_caption() {
        let mut c = controls(2);
        c.hover(Some(Control::Next), FADE);
        assert_eq!(c.button_opacity, [0.5, 1.0, 0.5]);
        assert_eq!(c.caption_opacity(), 0.5);

        c.hover(None, FADE);
        assert_eq!(c.button_opacity, [1.0; 3]);
        assert_eq!(c.caption_opacity(), 1.0);
    }

    #[test]
    fn hovering_a_dot_does_not_fade() {
        let mut c = controls(2);
        c.hover(Some(Control::Dot(1)), FADE);
        assert_eq!(c.button_opacity, [1.0; 3]);
        assert_eq!(c.caption_opacity(), 1.0);
    }

    #[test]
    fn out_of_range_dot_updates_are_ignored() {
        let mut c = controls(2);
        c.set_dot_active(1, true);
        c.set_dot_active(5, true);
        let active: Vec<bool> = c.dots().iter().map(|d| d.active).collect();
        assert_eq!(active, [false, true]);
    }
}
