use crate::RequestId;

/// Side effects requested by `update`; executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartSearch { request_id: RequestId, query: String },
    CancelSearch { request_id: RequestId },
}
