//! Browser file handling.
//!
//! Reads the picked file from the upload input and starts downloads through
//! a temporary anchor element.

use studio_ui::dom::{self, El};
use studio_ui::DomError;
use web_sys::{File, HtmlAnchorElement, HtmlInputElement};

use crate::upload::UploadCandidate;

/// First file selected in a file input, if any.
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    let files = input.files()?;
    if files.length() == 0 {
        log::warn!("📂 No file selected");
        return None;
    }
    files.get(0)
}

/// Metadata of a picked file for validation.
pub fn candidate(file: &File) -> UploadCandidate {
    UploadCandidate::new(file.name(), file.type_(), file.size() as u64)
}

/// Navigate to `url` through a synthetic anchor click so the browser treats
/// the response as a download.
pub fn trigger_download(url: &str) -> Result<(), DomError> {
    let body = dom::document()?
        .body()
        .ok_or(DomError::NoGlobal("body"))?;
    let link = El::new("a")?
        .attr("href", url)?
        .attr("download", "")?
        .build_as::<HtmlAnchorElement>()?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}
