//! Add-school submission: the form state machine and the multipart body it produces.
//!
//! `SubmissionFlow` goes `Idle -> Submitting -> Success | Error`. The flow itself never touches
//! the network; `submit` returns a `CreateSchoolRequest` and the caller reports back through
//! `complete`.

mod flow;
mod payload;

pub use flow::{SubmissionFlow, SubmissionStatus, ERROR_MESSAGE, SUCCESS_MESSAGE};
pub use payload::{CreateSchoolRequest, MultipartPayload, Part, PartValue};
