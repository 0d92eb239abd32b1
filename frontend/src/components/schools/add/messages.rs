use common::error::ApiError;
use common::model::form::Field;

use crate::components::schools::file::PickedFile;

pub enum Msg {
    UpdateField(Field, String),
    ImageSelected(Vec<PickedFile>),
    Submit,
    SubmitFinished(Result<(), ApiError>),
    Back,
}
