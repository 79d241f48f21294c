use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Insufficient balance of token {token_id}: {available} < {required}")]
    InsufficientBalance {
        token_id: String,
        available: Uint128,
        required: Uint128,
    },
}
