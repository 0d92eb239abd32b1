//! Metadata view over a file picked in the browser.
//!
//! The validation schema only needs a file's name, size and declared MIME type, so it works
//! against this trait instead of a concrete browser handle. The frontend implements it for its
//! `web_sys::File` wrapper; tests use plain structs.

/// A file chosen through a file input.
pub trait SelectedFile {
    /// File name as reported by the browser, used as the multipart filename.
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Declared MIME type, e.g. `image/png`. Empty when the browser could not tell.
    fn mime_type(&self) -> String;
}
