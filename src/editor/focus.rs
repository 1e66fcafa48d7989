//! Focus coordination between scene inputs.
//!
//! After a structural edit the editor reports which scene index should hold
//! keyboard focus; the embedding layer owns the mapping from indices to live
//! input handles. [`FocusRegistry`] is that mapping: an explicit map the
//! embedder rebuilds on each render (or maintains incrementally as inputs
//! mount and unmount), with best-effort focusing — a missing handle is
//! skipped silently, never an error.

use std::collections::HashMap;

/// A live input handle that can be focused imperatively.
pub trait FocusTarget {
    fn focus(&mut self);
}

/// Index → input-handle registry for one editor instance.
#[derive(Debug)]
pub struct FocusRegistry<T: FocusTarget> {
    handles: HashMap<usize, T>,
}

impl<T: FocusTarget> FocusRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Replaces the whole registry from the current render pass. Preferred
    /// over incremental registration: the registry can never drift from the
    /// scene list.
    pub fn rebuild<I>(&mut self, handles: I)
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        self.handles.clear();
        self.handles.extend(handles);
    }

    /// Registers the handle for a newly mounted input. Keeps an existing
    /// registration for the same index.
    pub fn register(&mut self, index: usize, handle: T) {
        self.handles.entry(index).or_insert(handle);
    }

    /// Removes the handle at `index` and shifts every higher index down by
    /// one, mirroring a scene removal.
    pub fn deregister(&mut self, index: usize) -> Option<T> {
        let removed = self.handles.remove(&index);
        let mut above: Vec<usize> = self
            .handles
            .keys()
            .copied()
            .filter(|&i| i > index)
            .collect();
        above.sort_unstable();
        for i in above {
            if let Some(handle) = self.handles.remove(&i) {
                self.handles.insert(i - 1, handle);
            }
        }
        removed
    }

    /// Focuses the handle at `index`, if one is registered. Returns whether
    /// a handle was actually focused.
    pub fn focus(&mut self, index: usize) -> bool {
        match self.handles.get_mut(&index) {
            Some(handle) => {
                handle.focus();
                true
            }
            None => false,
        }
    }

    /// Whether a handle is registered at `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.handles.contains_key(&index)
    }

    /// Gets the handle registered at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.handles.get(&index)
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True if no handles are registered.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Drops all registrations (editor unmount).
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

impl<T: FocusTarget> Default for FocusRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MockInput {
        focus_count: usize,
    }

    impl FocusTarget for MockInput {
        fn focus(&mut self) {
            self.focus_count += 1;
        }
    }

    #[test]
    fn test_focus_registered_handle() {
        let mut registry = FocusRegistry::new();
        registry.register(0, MockInput::default());
        registry.register(1, MockInput::default());

        assert!(registry.focus(1));
        assert!(registry.focus(1));
    }

    #[test]
    fn test_focus_missing_handle_is_best_effort() {
        let mut registry: FocusRegistry<MockInput> = FocusRegistry::new();
        assert!(!registry.focus(3));
    }

    #[test]
    fn test_register_keeps_existing() {
        let mut registry = FocusRegistry::new();
        registry.register(0, MockInput { focus_count: 7 });
        registry.register(0, MockInput::default());
        registry.focus(0);
        // The first registration won
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0).unwrap().focus_count, 8);
    }

    #[test]
    fn test_deregister_shifts_higher_indices_down() {
        let mut registry = FocusRegistry::new();
        for i in 0..4 {
            registry.register(i, MockInput { focus_count: i });
        }

        let removed = registry.deregister(1);
        assert!(removed.is_some());
        assert_eq!(registry.len(), 3);

        // Former index 2 now answers at index 1, former 3 at 2
        assert!(registry.contains(0));
        assert!(registry.contains(1));
        assert!(registry.contains(2));
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_rebuild_replaces_everything() {
        let mut registry = FocusRegistry::new();
        registry.register(0, MockInput::default());
        registry.register(5, MockInput::default());

        registry.rebuild((0..3).map(|i| (i, MockInput::default())));
        assert_eq!(registry.len(), 3);
        assert!(!registry.contains(5));
    }

    #[test]
    fn test_clear() {
        let mut registry = FocusRegistry::new();
        registry.register(0, MockInput::default());
        registry.clear();
        assert!(registry.is_empty());
    }
}
