/// Returned by a watcher callback to keep or drop the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Keep,
    Unobserve,
}

/// Horizontal extent of an element, in fractions of the viewport width.
/// The viewport itself spans `0.0..1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub start: f32,
    pub end: f32,
}

impl Extent {
    pub fn intersects(&self, margin: f32) -> bool {
        self.end > -margin && self.start < 1.0 + margin
    }
}

#[derive(Clone, Copy)]
enum Entry {
    Unwatched,
    // last reported visibility, None until the first poll
    Watched(Option<bool>),
}

pub struct VisibilityWatcher {
    margin: f32,
    entries: Vec<Entry>,
}

impl VisibilityWatcher {
    pub fn new(margin: f32) -> Self {
        Self { margin, entries: Vec::new() }
    }

    pub fn observe(&mut self, id: usize) {
        if self.entries.len() <= id {
            self.entries.resize(id + 1, Entry::Unwatched);
        }
        self.entries[id] = Entry::Watched(None);
    }

    #[cfg(test)]
    pub fn unobserve(&mut self, id: usize) {
        if let Some(entry) = self.entries.get_mut(id) {
            *entry = Entry::Unwatched;
        }
    }

    #[cfg(test)]
    pub fn is_observing(&self, id: usize) -> bool {
        matches!(self.entries.get(id), Some(Entry::Watched(_)))
    }

    /// Reports every observed element whose visibility changed since the last
    /// poll. Elements missing from `extents` are left alone.
    pub fn poll<I, F>(&mut self, extents: I, mut on_change: F)
    where
        I: IntoIterator<Item = (usize, Extent)>,
        F: FnMut(usize, bool) -> Watch,
    {
        for (id, extent) in extents {
            let Some(Entry::Watched(last)) = self.entries.get(id).copied() else {
                continue;
            };
            let visible = extent.intersects(self.margin);
            if last == Some(visible) {
                continue;
            }
            self.entries[id] = match on_change(id, visible) {
                Watch::Keep => Entry::Watched(Some(visible)),
                Watch::Unobserve => Entry::Unwatched,
            };
        }
    }
}
