/// What the carousel draws on. The carousel only ever writes through this
/// trait, so any surface (the raylib stage, a test recorder) can be injected.
pub trait SlideSurface {
    fn slide_count(&self) -> usize;

    /// Called once per slide when the carousel is built.
    fn create_dot(&mut self, index: usize, label: String);

    /// Horizontal offset of `slide` in percent of the viewport width.
    fn set_offset(&mut self, slide: usize, percent: i32);

    fn set_dot_active(&mut self, dot: usize, active: bool);
}
