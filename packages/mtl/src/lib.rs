pub use crate::callback::{
    ApprovalRequest, BalanceRequest, MtlApprovalCallbackMsg, MtlBalanceCallbackMsg,
    MtlBatchBalanceCallbackMsg,
};
pub use crate::msg::{MtlExecuteMsg, TokenId};
pub use crate::query::{
    ApprovedForAllResponse, BalanceResponse, BatchBalanceResponse, IsApprovedForAllResponse,
    MtlQueryMsg,
};
pub use crate::receiver::{MtlBatchReceiveMsg, MtlReceiveMsg};

mod callback;
mod msg;
mod query;
mod receiver;
