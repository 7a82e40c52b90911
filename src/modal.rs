use raylib::prelude::*;

const PANEL_WIDTH: f32 = 520.0;
const PANEL_HEIGHT: f32 = 260.0;
const CLOSE_SIZE: f32 = 32.0;

const HELP_LINES: [&str; 5] = [
    "Left / Right arrow    previous / next slide",
    "< and > buttons       previous / next slide",
    "Dots                  jump to a slide",
    "H                     show this help",
    "Escape                close this help",
];

/// What a click landed on while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    Panel,
    Close,
    Overlay,
}

#[derive(Debug, Default)]
pub struct Modal {
    open: bool,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape only means something while the modal is showing.
    pub fn handle_escape(&mut self) -> bool {
        if self.open {
            self.close();
            return true;
        }
        false
    }

    /// Close button and overlay both dismiss; clicks inside the panel don't.
    pub fn handle_click(&mut self, point: Vector2, screen: Vector2) -> ModalHit {
        let hit = Self::hit_test(point, screen);
        if hit != ModalHit::Panel {
            self.close();
        }
        hit
    }

    pub fn hit_test(point: Vector2, screen: Vector2) -> ModalHit {
        if Self::close_rect(screen).check_collision_point_rec(point) {
            ModalHit::Close
        } else if Self::panel_rect(screen).check_collision_point_rec(point) {
            ModalHit::Panel
        } else {
            ModalHit::Overlay
        }
    }

    fn panel_rect(screen: Vector2) -> Rectangle {
        Rectangle::new(
            (screen.x - PANEL_WIDTH) * 0.5,
            (screen.y - PANEL_HEIGHT) * 0.5,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        )
    }

    fn close_rect(screen: Vector2) -> Rectangle {
        let panel = Self::panel_rect(screen);
        Rectangle::new(panel.x + panel.width - CLOSE_SIZE - 8.0, panel.y + 8.0, CLOSE_SIZE, CLOSE_SIZE)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen: Vector2) {
        if !self.open {
            return;
        }

        d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, screen.x, screen.y), Color::BLACK.fade(0.6));

        let panel = Self::panel_rect(screen);
        d.draw_rectangle_rounded(panel, 0.08, 8, Color::RAYWHITE);
        d.draw_text("Carousel controls", panel.x as i32 + 24, panel.y as i32 + 20, 24, Color::DARKGRAY);
        for (i, line) in HELP_LINES.iter().enumerate() {
            d.draw_text(line, panel.x as i32 + 24, panel.y as i32 + 70 + i as i32 * 32, 18, Color::GRAY);
        }

        let close = Self::close_rect(screen);
        d.draw_text("x", close.x as i32 + 10, close.y as i32 + 2, 28, Color::DARKGRAY);
    }
}
