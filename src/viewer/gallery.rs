//! Gallery navigation
//!
//! A gallery shows exactly one of its images. The shown index is kept here
//! instead of being read back from element styles on every click.

use rustc_hash::FxHashMap;

/// Direction of one navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Visibility change produced by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub hide: usize,
    pub show: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    current: usize,
}

impl Gallery {
    /// `current` is clamped into range; an empty gallery stays at 0
    pub fn new(len: usize, current: usize) -> Self {
        Self {
            len,
            current: current.min(len.saturating_sub(1)),
        }
    }

    /// Start from whichever image is shown (first one if none is)
    pub fn from_visibility<I>(shown: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut len = 0;
        let mut current = None;
        for (index, visible) in shown.into_iter().enumerate() {
            len += 1;
            if visible && current.is_none() {
                current = Some(index);
            }
        }
        Self::new(len, current.unwrap_or(0))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Move one image along; `None` at either end (no wrap-around)
    pub fn step(&mut self, step: Step) -> Option<Toggle> {
        let target = match step {
            Step::Next if self.current + 1 < self.len => self.current + 1,
            Step::Previous if self.current > 0 => self.current - 1,
            _ => return None,
        };
        let toggle = Toggle { hide: self.current, show: target };
        self.current = target;
        Some(toggle)
    }

    pub fn next(&mut self) -> Option<Toggle> {
        self.step(Step::Next)
    }

    pub fn previous(&mut self) -> Option<Toggle> {
        self.step(Step::Previous)
    }
}

/// Gallery state for every gallery on a page, keyed by document order
#[derive(Debug, Clone, Default)]
pub struct GalleryRegistry {
    galleries: FxHashMap<usize, Gallery>,
}

impl GalleryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: usize, gallery: Gallery) {
        self.galleries.insert(key, gallery);
    }

    pub fn get(&self, key: usize) -> Option<&Gallery> {
        self.galleries.get(&key)
    }

    /// Step a registered gallery; unknown keys are a no-op
    pub fn step(&mut self, key: usize, step: Step) -> Option<Toggle> {
        self.galleries.get_mut(&key)?.step(step)
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_from_middle() {
        let mut gallery = Gallery::new(3, 1);
        assert_eq!(gallery.next(), Some(Toggle { hide: 1, show: 2 }));
        assert_eq!(gallery.current(), 2);
    }

    #[test]
    fn test_no_wrap_at_ends() {
        let mut gallery = Gallery::new(3, 2);
        assert_eq!(gallery.next(), None);
        assert_eq!(gallery.current(), 2);

        let mut gallery = Gallery::new(3, 0);
        assert_eq!(gallery.previous(), None);
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn test_single_and_empty_galleries() {
        let mut single = Gallery::new(1, 0);
        assert_eq!(single.next(), None);
        assert_eq!(single.previous(), None);

        let mut empty = Gallery::new(0, 5);
        assert!(empty.is_empty());
        assert_eq!(empty.current(), 0);
        assert_eq!(empty.next(), None);
    }

    #[test]
    fn test_from_visibility() {
        let gallery = Gallery::from_visibility([false, true, false]);
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.current(), 1);

        let gallery = Gallery::from_visibility([false, false]);
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn test_registry_steps_independently() {
        let mut registry = GalleryRegistry::new();
        registry.insert(0, Gallery::new(3, 0));
        registry.insert(1, Gallery::new(2, 1));

        assert_eq!(registry.step(0, Step::Next), Some(Toggle { hide: 0, show: 1 }));
        assert_eq!(registry.step(1, Step::Next), None);
        assert_eq!(registry.step(1, Step::Previous), Some(Toggle { hide: 1, show: 0 }));
        assert_eq!(registry.step(9, Step::Next), None);
        assert_eq!(registry.get(0).map(Gallery::current), Some(1));
    }
}
