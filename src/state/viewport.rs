//! Responsive layout policy.
//!
//! Classifies the viewport width against a breakpoint and reports only the
//! moments the class changes, so consumers react to class edges rather than to
//! every pixel of a resize.

/// Default breakpoint in logical pixels. Widths strictly below it are compact.
pub const DEFAULT_COMPACT_BREAKPOINT: f32 = 900.0;

/// Derived width class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Regular,
}

impl ViewportClass {
    /// Pure predicate: compact iff `width < breakpoint`.
    pub fn classify(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }

    pub fn is_compact(self) -> bool {
        self == ViewportClass::Compact
    }
}

/// A class transition observed between two viewport snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportChange {
    /// Class before the change; `None` for the first observation
    pub from: Option<ViewportClass>,
    pub to: ViewportClass,
}

impl ViewportChange {
    /// True when this change is a not-compact -> compact edge.
    pub fn entered_compact(&self) -> bool {
        self.to.is_compact() && !matches!(self.from, Some(ViewportClass::Compact))
    }
}

/// Observes viewport widths and emits a [`ViewportChange`] per class edge.
///
/// Holds only the last reported class; it has no setter for the class itself.
#[derive(Debug, Clone)]
pub struct ViewportObserver {
    breakpoint: f32,
    current: Option<ViewportClass>,
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(DEFAULT_COMPACT_BREAKPOINT)
    }
}

impl ViewportObserver {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            breakpoint,
            current: None,
        }
    }

    /// Current `isCompact` signal. Unobserved viewports count as regular.
    pub fn is_compact(&self) -> bool {
        self.current.is_some_and(ViewportClass::is_compact)
    }

    /// Feeds a new width snapshot. Returns a change only when the class differs
    /// from the previous snapshot.
    pub fn observe(&mut self, width: f32) -> Option<ViewportChange> {
        let class = ViewportClass::classify(width, self.breakpoint);
        if self.current == Some(class) {
            return None;
        }

        let change = ViewportChange {
            from: self.current,
            to: class,
        };
        self.current = Some(class);
        tracing::debug!(width, ?change, "viewport class changed");
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_against_breakpoint() {
        assert_eq!(ViewportClass::classify(899.9, 900.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::classify(900.0, 900.0), ViewportClass::Regular);
        assert_eq!(ViewportClass::classify(1400.0, 900.0), ViewportClass::Regular);
    }

    #[test]
    fn test_first_observation_is_a_change() {
        let mut observer = ViewportObserver::default();
        assert!(!observer.is_compact());

        let change = observer.observe(600.0).unwrap();
        assert_eq!(change.from, None);
        assert!(change.entered_compact());
        assert!(observer.is_compact());
    }

    #[test]
    fn test_resizes_within_class_are_silent() {
        let mut observer = ViewportObserver::new(900.0);
        assert!(observer.observe(1200.0).is_some());
        assert!(observer.observe(1100.0).is_none());
        assert!(observer.observe(901.0).is_none());

        let change = observer.observe(899.0).unwrap();
        assert_eq!(change.from, Some(ViewportClass::Regular));
        assert!(change.entered_compact());

        assert!(observer.observe(500.0).is_none());

        let change = observer.observe(1000.0).unwrap();
        assert!(!change.entered_compact());
        assert_eq!(change.to, ViewportClass::Regular);
    }
}
