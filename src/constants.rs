//! Global constants for the filter studio

use studio_ui::AutoScroll;

/// Quiet period before slider/checkbox changes are sent to the server
pub const APPLY_DEBOUNCE_MS: u32 = 300;

/// Edge auto-scroll while dragging a filter item
pub const AUTO_SCROLL: AutoScroll = AutoScroll {
    threshold: 50.0,
    speed: 5.0,
    // ~60fps
    period_ms: 16,
};

/// Largest upload accepted (10 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Delay between items when restaging controls on reset
pub const RESET_STAGGER_MS: u32 = 50;

/// Notification timings
pub mod notification {
    /// Default time a notification stays visible
    pub const DEFAULT_DURATION_MS: u32 = 3000;
    /// Delay before the reveal animation starts
    pub const REVEAL_DELAY_MS: u32 = 100;
    /// Time between hiding and removing the element
    pub const REMOVE_DELAY_MS: u32 = 300;
    /// "Reordering filters..." hint on drag start
    pub const DRAG_HINT_MS: u32 = 1000;
    /// "Filter order updated" on drag end
    pub const ORDER_DONE_MS: u32 = 2000;
    /// "Applying: ..." hint before a filter update
    pub const APPLYING_MS: u32 = 1500;
}
