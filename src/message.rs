//! Application message and effect types.
//!
//! DOM events and request results arrive as [`Message`]s. Updating the app
//! returns [`Effect`]s, which the browser shell carries out.

use studio_ui::{ItemBounds, KeyPress, ScrollDirection, ScrollViewport, SliderRange};

use crate::api::{ApiError, FilterUpdate, OrderUpdate, ServerReply, UploadReply};
use crate::model::{Param, ParamSpec};
use crate::notification::Notification;
use crate::upload::UploadCandidate;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(UploadMessage),
    Control(ControlMessage),
    Drag(DragMessage),
    Action(ActionMessage),
}

/// Upload flow messages.
#[derive(Debug, Clone)]
pub enum UploadMessage {
    /// User picked a file
    FileChosen(UploadCandidate),
    /// `POST /upload` completed
    Finished(Result<UploadReply, ApiError>),
}

/// Checkbox and slider messages.
#[derive(Debug, Clone)]
pub enum ControlMessage {
    /// A range input reported a new value
    SliderInput {
        filter: String,
        param: Param,
        raw: String,
    },
    /// A filter checkbox was toggled
    Toggled { filter: String, enabled: bool },
    /// Debounce window elapsed; send the current filters
    Apply,
    /// `POST /filter/update` completed
    Applied(Result<ServerReply, ApiError>),
}

/// Drag-and-drop reorder messages.
#[derive(Debug, Clone)]
pub enum DragMessage {
    /// Dragging of a filter item began
    Started(String),
    /// Pointer moved over the list while dragging
    Over {
        pointer_y: f64,
        /// Every filter item in page order with its bounds
        items: Vec<(String, ItemBounds)>,
        /// Bounds of the scrollable controls section
        viewport: ScrollViewport,
    },
    /// Drag finished; `order` is the item order read from the page
    Ended { order: Vec<String> },
    /// `POST /filter/order` completed
    OrderSaved(Result<ServerReply, ApiError>),
}

/// Button and shortcut messages.
#[derive(Debug, Clone)]
pub enum ActionMessage {
    /// Reset all filters
    Reset,
    /// `POST /filter/reset` completed
    ResetFinished(Result<ServerReply, ApiError>),
    /// Download the processed image
    Download,
    /// Discard the uploaded image
    Discard,
    /// `DELETE /image/{name}` completed
    Discarded(Result<ServerReply, ApiError>),
    /// Key pressed anywhere on the page
    Key(KeyPress),
}

impl From<UploadMessage> for Message {
    fn from(msg: UploadMessage) -> Self {
        Message::Upload(msg)
    }
}

impl From<ControlMessage> for Message {
    fn from(msg: ControlMessage) -> Self {
        Message::Control(msg)
    }
}

impl From<DragMessage> for Message {
    fn from(msg: DragMessage) -> Self {
        Message::Drag(msg)
    }
}

impl From<ActionMessage> for Message {
    fn from(msg: ActionMessage) -> Self {
        Message::Action(msg)
    }
}

/// What a slider's readout should show.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderReadout {
    pub filter: String,
    pub param: Param,
    /// Value for the range input itself
    pub input: String,
    /// Text for the value label
    pub text: String,
    /// Width of the progress bar in percent
    pub percent: f64,
}

impl SliderReadout {
    pub fn new(filter: &str, param: Param, spec: &ParamSpec, value: f64) -> Self {
        Self {
            filter: filter.to_string(),
            param,
            input: spec.range.input_value(value),
            text: SliderRange::format_value(value),
            percent: spec.range.progress_percent(value),
        }
    }
}

/// Side effects requested by an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show a toast, replacing the current one
    Notify(Notification),
    /// Show or hide the loading indicator
    SetLoading(bool),
    /// Enable or disable buttons, checkboxes and sliders
    SetControlsEnabled(bool),

    /// Send the chosen file as multipart field `file`
    Upload { url: String },
    /// Show the uploaded image in the original pane
    ShowOriginal { url: String },
    /// Put the original pane back to its placeholder
    ClearOriginal,
    /// Show the processed image in the result pane
    ShowResult { url: String },
    /// Put the result pane back to its placeholder
    ClearResult,

    /// Update a slider's value text and progress bar
    Readout(SliderReadout),
    /// Toggle the active styling of a filter item
    SetActive { filter: String, active: bool },
    /// (Re)start the apply debounce window
    ScheduleApply,
    /// Drop a pending debounced apply
    CancelApply,
    /// `POST /filter/update`
    SendFilters { url: String, body: FilterUpdate },

    /// Mark or unmark the dragged item and manage its placeholder
    MarkDragging { filter: String, dragging: bool },
    /// Move a filter item in front of another, or to the end
    MoveItem {
        filter: String,
        before: Option<String>,
    },
    /// Stop edge auto-scroll and restart it in the given direction
    AutoScroll(Option<ScrollDirection>),
    /// `POST /filter/order`
    SendOrder { url: String, body: OrderUpdate },

    /// After `delay_ms`, uncheck a filter and put its sliders back to defaults
    Restage {
        filter: String,
        readouts: Vec<SliderReadout>,
        delay_ms: u32,
    },
    /// Drop the pending restage of one filter, or of all filters with `None`
    CancelRestage(Option<String>),
    /// `POST /filter/reset` with form field `fileName`
    SendReset { url: String, file_name: String },
    /// `DELETE /image/{name}`
    SendDiscard { url: String },
    /// Start a download through a synthetic anchor click
    Navigate { url: String },
}
