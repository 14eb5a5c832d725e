//! Scroll roots
//!
//! The page scrolls either inside a designated container element or in the
//! window viewport, and which one applies can change whenever layout does.
//! `RootKind` tags the two models; `ScrollRoot` is the interface each host
//! implements for them.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Which scroll model is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// The browser window viewport.
    Window,
    /// The designated scrollable container element.
    Container,
}

/// How a programmatic scroll is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Content vs. visible size of the container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub scroll_height: f64,
    pub client_height: f64,
}

impl Extent {
    pub fn new(scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_height,
            client_height,
        }
    }

    /// True when content overflows the visible area.
    ///
    /// One pixel of slack absorbs sub-pixel rounding in `scrollHeight`.
    pub fn overflows(&self) -> bool {
        self.scroll_height - 1.0 > self.client_height
    }
}

/// Pick the scroll root for the current layout.
///
/// The container wins only when it exists and its content overflows it.
/// Must be re-evaluated on every call; layout can change without notice.
pub fn select_root(container: Option<Extent>) -> RootKind {
    match container {
        Some(extent) if extent.overflows() => RootKind::Container,
        _ => RootKind::Window,
    }
}

/// A concrete scroll context.
pub trait ScrollRoot {
    fn kind(&self) -> RootKind;

    /// Current scroll offset.
    fn offset(&self) -> f64;

    /// Height of the visible area.
    fn visible_extent(&self) -> f64;

    /// Measure every declared section, in document order, relative to this root.
    fn sections(&self) -> Vec<Section>;

    /// Offset of the element with `id`, relative to this root.
    ///
    /// `None` when no such element exists.
    fn offset_of(&self, id: &str) -> Option<f64>;

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Reference point used to decide which section is current: the
    /// middle of the visible area.
    fn reference_position(&self) -> f64 {
        self.offset() + self.visible_extent() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_container_selects_window() {
        assert_eq!(select_root(None), RootKind::Window);
    }

    #[test]
    fn test_overflowing_container_selects_container() {
        assert_eq!(
            select_root(Some(Extent::new(3000.0, 800.0))),
            RootKind::Container
        );
    }

    #[test]
    fn test_fitting_container_selects_window() {
        assert_eq!(select_root(Some(Extent::new(800.0, 800.0))), RootKind::Window);
        // Sub-pixel overflow is ignored
        assert_eq!(select_root(Some(Extent::new(800.5, 800.0))), RootKind::Window);
        assert_eq!(select_root(Some(Extent::new(801.0, 800.0))), RootKind::Window);
        assert_eq!(
            select_root(Some(Extent::new(801.5, 800.0))),
            RootKind::Container
        );
    }

    #[test]
    fn test_scroll_behavior_serializes_lowercase() {
        let json = serde_json::to_string(&ScrollBehavior::Smooth).unwrap();
        assert_eq!(json, "\"smooth\"");
    }
}
