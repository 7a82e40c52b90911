use log::{debug, warn};
use raylib::prelude::*;
use crate::carousel::Carousel;
use crate::controls::Control;
use crate::modal::{Modal, ModalHit};
use crate::surface::SlideSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    /// Dot click, carrying the dot's label as encoded on the dot.
    GoToDot(String),
    OpenHelp,
    CloseHelp,
}

pub fn command_for_key(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT => Some(Command::Next),
        KeyboardKey::KEY_LEFT => Some(Command::Prev),
        KeyboardKey::KEY_ESCAPE => Some(Command::CloseHelp),
        KeyboardKey::KEY_H => Some(Command::OpenHelp),
        _ => None,
    }
}

/// `dot_label` resolves a dot index to the label it was created with.
pub fn command_for_click<'a>(control: Control, dot_label: impl Fn(usize) -> Option<&'a str>) -> Option<Command> {
    match control {
        Control::Next => Some(Command::Next),
        Control::Prev => Some(Command::Prev),
        Control::Help => Some(Command::OpenHelp),
        Control::Dot(index) => dot_label(index).map(|label| Command::GoToDot(label.to_string())),
    }
}

/// An open modal takes every click; otherwise the control under the pointer
/// decides what happens.
pub fn route_click<'a>(
    modal: &mut Modal,
    point: Vector2,
    screen: Vector2,
    control: Option<Control>,
    dot_label: impl Fn(usize) -> Option<&'a str>,
) -> Option<Command> {
    if modal.is_open() {
        if modal.handle_click(point, screen) == ModalHit::Panel {
            debug!("Click inside the help panel ignored");
        }
        return None;
    }
    control.and_then(|control| command_for_click(control, dot_label))
}

/// Applies commands in arrival order. Navigation works whether or not the
/// modal is showing.
pub fn dispatch<S: SlideSurface>(
    commands: impl IntoIterator<Item = Command>,
    carousel: &mut Carousel<S>,
    modal: &mut Modal,
) {
    for command in commands {
        match command {
            Command::Next => carousel.next_slide(),
            Command::Prev => carousel.prev_slide(),
            Command::GoToDot(label) => {
                if let Err(e) = carousel.go_to_dot(&label) {
                    warn!("Ignoring dot click: {}", e);
                }
            }
            Command::OpenHelp => modal.open(),
            Command::CloseHelp => {
                if !modal.handle_escape() {
                    debug!("Escape with no help open");
                }
            }
        }
    }
}
