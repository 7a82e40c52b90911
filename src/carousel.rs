use log::debug;
use crate::error::CarouselError;
use crate::surface::SlideSurface;

/// Offset of `slide` when `current` is the active one: the active slide sits
/// at 0%, the others one viewport width apart on either side.
pub fn offset_percent(slide: usize, current: usize) -> i32 {
    100 * (slide as i32 - current as i32)
}

/// Normalize a textual slide index (dot label, command line) to an integer.
pub fn parse_slide_index(label: &str) -> Result<usize, CarouselError> {
    label
        .trim()
        .parse::<usize>()
        .map_err(|_| CarouselError::InvalidIndex(label.to_string()))
}

pub struct Carousel<S: SlideSurface> {
    surface: S,
    current_slide: usize,
    max_slide: usize,
}

impl<S: SlideSurface> Carousel<S> {
    /// Builds the dots and shows slide `start` without a transition.
    pub fn new(mut surface: S, start: usize) -> Result<Self, CarouselError> {
        let count = surface.slide_count();
        if count == 0 {
            return Err(CarouselError::Empty);
        }
        if start >= count {
            return Err(CarouselError::OutOfRange { index: start, len: count });
        }

        for index in 0..count {
            surface.create_dot(index, index.to_string());
        }

        let mut carousel = Self {
            surface,
            current_slide: start,
            max_slide: count - 1,
        };
        carousel.render(start);
        Ok(carousel)
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn len(&self) -> usize {
        self.max_slide + 1
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn go_to_slide(&mut self, index: usize) -> Result<(), CarouselError> {
        if index > self.max_slide {
            return Err(CarouselError::OutOfRange { index, len: self.len() });
        }
        self.render(index);
        Ok(())
    }

    pub fn go_to_dot(&mut self, label: &str) -> Result<(), CarouselError> {
        let index = parse_slide_index(label)?;
        self.go_to_slide(index)
    }

    pub fn next_slide(&mut self) {
        let next = if self.current_slide == self.max_slide {
            0
        } else {
            self.current_slide + 1
        };
        self.render(next);
    }

    pub fn prev_slide(&mut self) {
        let prev = if self.current_slide == 0 {
            self.max_slide
        } else {
            self.current_slide - 1
        };
        self.render(prev);
    }

    // `index` is always in range here
    fn render(&mut self, index: usize) {
        debug!("showing slide {} of {}", index + 1, self.len());
        self.current_slide = index;
        for slide in 0..self.len() {
            self.surface.set_offset(slide, offset_percent(slide, index));
        }
        for dot in 0..self.len() {
            self.surface.set_dot_active(dot, dot == index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::Recorder;

    fn carousel(count: usize) -> Carousel<Recorder> {
        Carousel::new(Recorder::with_slides(count), 0).unwrap()
    }

    #[test]
    fn starts_on_first_slide_with_one_labelled_dot_per_slide() {
        let c = carousel(3);
        assert_eq!(c.current_slide(), 0);
        let labels: Vec<&str> = c.surface().dots.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["0", "1", "2"]);
        assert_eq!(c.surface().active_dots(), [0]);
        assert_eq!(c.surface().offsets, [0, 100, 200]);
    }

    #[test]
    fn rejects_empty_surface() {
        assert_eq!(Carousel::new(Recorder::with_slides(0), 0).err(), Some(CarouselError::Empty));
    }

    #[test]
    fn start_slide_must_exist() {
        let err = Carousel::new(Recorder::with_slides(2), 2).err();
        assert_eq!(err, Some(CarouselError::OutOfRange { index: 2, len: 2 }));

        let c = Carousel::new(Recorder::with_slides(4), 3).unwrap();
        assert_eq!(c.current_slide(), 3);
        assert_eq!(c.surface().active_dots(), [3]);
    }

    #[test]
    fn next_wraps_forward() {
        let mut c = carousel(3);
        c.next_slide();
        assert_eq!(c.current_slide(), 1);
        c.next_slide();
        assert_eq!(c.current_slide(), 2);
        c.next_slide();
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut c = carousel(3);
        c.prev_slide();
        assert_eq!(c.current_slide(), 2);
        c.prev_slide();
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = carousel(1);
        c.next_slide();
        c.prev_slide();
        assert_eq!(c.current_slide(), 0);
        assert_eq!(c.surface().offsets, [0]);
    }

    #[test]
    fn go_to_positions_every_slide_relative_to_target() {
        let mut c = carousel(4);
        c.go_to_slide(1).unwrap();
        assert_eq!(c.surface().offsets, [100, 0, -100, -200]);
        assert_eq!(c.surface().active_dots(), [1]);
    }

    #[test]
    fn every_target_gets_exactly_one_active_dot() {
        let mut c = carousel(5);
        for target in [4, 0, 2, 2, 3] {
            c.go_to_slide(target).unwrap();
            assert_eq!(c.surface().active_dots(), [target]);
            for (k, offset) in c.surface().offsets.iter().enumerate() {
                assert_eq!(*offset, 100 * (k as i32 - target as i32));
            }
        }
    }

    #[test]
    fn out_of_range_go_to_changes_nothing() {
        let mut c = carousel(3);
        c.go_to_slide(2).unwrap();
        let writes = c.surface().writes;

        assert_eq!(c.go_to_slide(3), Err(CarouselError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(c.current_slide(), 2);
        assert_eq!(c.surface().writes, writes);
        assert_eq!(c.surface().active_dots(), [2]);
    }

    #[test]
    fn dot_labels_are_normalized_to_integers() {
        let mut c = carousel(4);
        c.go_to_dot("2").unwrap();
        assert_eq!(c.current_slide(), 2);
        c.go_to_dot(" 3 ").unwrap();
        assert_eq!(c.current_slide(), 3);

        assert_eq!(c.go_to_dot("two"), Err(CarouselError::InvalidIndex("two".into())));
        assert_eq!(c.go_to_dot("-1"), Err(CarouselError::InvalidIndex("-1".into())));
        assert_eq!(c.current_slide(), 3);
    }

    #[test]
    fn navigation_never_leaves_bounds() {
        // deterministic walk mixing both directions over several sizes
        for n in 1..=7 {
            let mut c = carousel(n);
            let mut expected = 0usize;
            for step in 0..60 {
                if (step * 7 + n) % 3 == 0 {
                    c.prev_slide();
                    expected = (expected + n - 1) % n;
                } else {
                    c.next_slide();
                    expected = (expected + 1) % n;
                }
                assert!(c.current_slide() < n);
                assert_eq!(c.current_slide(), expected);
                assert_eq!(c.surface().active_dots(), [expected]);
            }
        }
    }
}
