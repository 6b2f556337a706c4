//! Drag-and-drop geometry for vertical lists.
//!
//! These helpers work on plain rectangles taken from `getBoundingClientRect`
//! so list reordering and edge auto-scroll can be reasoned about (and tested)
//! without a browser.

/// Drag lifecycle of a reorderable list: idle → dragging → idle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState<K> {
    /// No drag in progress
    #[default]
    Idle,
    /// An item is being dragged
    Dragging {
        /// Key of the item that was picked up
        source: K,
    },
}

impl<K> DragState<K> {
    /// Begin dragging `source`. Replaces any drag that was never ended.
    pub fn start(&mut self, source: K) {
        *self = DragState::Dragging { source };
    }

    /// Finish the drag and return the dragged key, if any.
    pub fn end(&mut self) -> Option<K> {
        match std::mem::take(self) {
            DragState::Dragging { source } => Some(source),
            DragState::Idle => None,
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Key of the dragged item, if any.
    pub fn source(&self) -> Option<&K> {
        match self {
            DragState::Dragging { source } => Some(source),
            DragState::Idle => None,
        }
    }
}

/// Vertical extent of a list item in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBounds {
    pub top: f64,
    pub height: f64,
}

impl ItemBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Vertical midpoint of the item.
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Find the item the dragged element should be inserted before.
///
/// `items` must exclude the dragged element. Among the items whose midpoint
/// lies below `pointer_y`, the one closest to the pointer is returned; on a
/// tie the earlier item wins. `None` means "append at the end".
pub fn insertion_anchor(items: &[ItemBounds], pointer_y: f64) -> Option<usize> {
    let mut closest: Option<(usize, f64)> = None;
    for (index, item) in items.iter().enumerate() {
        let offset = pointer_y - item.midpoint();
        if offset < 0.0 && closest.is_none_or(|(_, best)| offset > best) {
            closest = Some((index, offset));
        }
    }
    closest.map(|(index, _)| index)
}

/// Vertical bounds of a scrollable container in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollViewport {
    pub top: f64,
    pub bottom: f64,
}

/// Direction of an edge auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Edge auto-scroll parameters for a container being dragged over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoScroll {
    /// Distance from an edge (px) that triggers scrolling
    pub threshold: f64,
    /// Pixels scrolled per tick
    pub speed: f64,
    /// Tick period in milliseconds
    pub period_ms: u32,
}

impl AutoScroll {
    /// Which way to scroll for a pointer at `pointer_y`, if at all.
    pub fn direction(&self, viewport: ScrollViewport, pointer_y: f64) -> Option<ScrollDirection> {
        if pointer_y < viewport.top + self.threshold {
            Some(ScrollDirection::Up)
        } else if pointer_y > viewport.bottom - self.threshold {
            Some(ScrollDirection::Down)
        } else {
            None
        }
    }

    /// Scroll offset after one tick, clamped to `[0, scroll_height - client_height]`.
    pub fn step(
        &self,
        direction: ScrollDirection,
        scroll_top: f64,
        scroll_height: f64,
        client_height: f64,
    ) -> f64 {
        match direction {
            ScrollDirection::Up => (scroll_top - self.speed).max(0.0),
            ScrollDirection::Down => {
                let max = (scroll_height - client_height).max(0.0);
                (scroll_top + self.speed).min(max)
            }
        }
    }
}
