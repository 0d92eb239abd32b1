use common::listing::PageSize;
use common::model::school::SchoolRecord;

pub enum Msg {
    FetchSucceeded(Vec<SchoolRecord>),
    FetchFailed(String),
    UpdateQuery(String),
    SetPageSize(PageSize),
    NextPage,
    PreviousPage,
    AddSchool,
}
