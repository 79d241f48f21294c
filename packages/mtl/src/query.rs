use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::msg::TokenId;

#[cw_serde]
#[derive(QueryResponses)]
pub enum MtlQueryMsg {
    /// Returns the current balance of the given address, 0 if unset.
    #[returns(BalanceResponse)]
    Balance { owner: String, token_id: TokenId },
    /// Returns the current balance of the given address for a batch of
    /// tokens, 0 if unset, in the same order as `token_ids`.
    #[returns(BatchBalanceResponse)]
    BatchBalance {
        owner: String,
        token_ids: Vec<TokenId>,
    },
    /// Query approved status `owner` granted to `operator`. Always true when
    /// owner and operator are the same account.
    #[returns(IsApprovedForAllResponse)]
    IsApprovedForAll { owner: String, operator: String },
    /// List all operators that can access all of the owner's tokens.
    #[returns(ApprovedForAllResponse)]
    ApprovedForAll {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct BatchBalanceResponse {
    pub balances: Vec<Uint128>,
}

#[cw_serde]
pub struct IsApprovedForAllResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct ApprovedForAllResponse {
    pub operators: Vec<String>,
}
