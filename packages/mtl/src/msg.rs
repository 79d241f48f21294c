use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

use crate::callback::BalanceRequest;

/// Token ids are opaque strings, so arbitrarily wide numeric id spaces stay
/// representable without an integer width commitment.
pub type TokenId = String;

#[cw_serde]
pub enum MtlExecuteMsg {
    /// Move `amount` of `token_id` from `from` to `to`, if the sender is
    /// `from` or one of its operators. The destination is always notified
    /// through its receive hook, `msg` is forwarded to it unmodified.
    Transfer {
        from: String,
        to: String,
        token_id: TokenId,
        amount: Uint128,
        msg: Binary,
    },
    /// Move a batch of token types between one (from, to) pair. The whole
    /// batch settles or none of it does, and the destination receives a
    /// single batch hook call listing the items in submission order.
    BatchTransfer {
        from: String,
        to: String,
        batch: Vec<(TokenId, Uint128)>,
        msg: Binary,
    },
    /// Create `amount` new units of `token_id` for `to`. Only the minter.
    /// The receive hook is invoked with `from: None`.
    Mint {
        to: String,
        token_id: TokenId,
        amount: Uint128,
        msg: Binary,
    },
    /// Batched form of `Mint`, one batch hook call for all items.
    BatchMint {
        to: String,
        batch: Vec<(TokenId, Uint128)>,
        msg: Binary,
    },
    /// Destroy `amount` of `token_id` held by `from`. Whoever can transfer
    /// can burn. No hook is invoked, there is no destination.
    Burn {
        from: String,
        token_id: TokenId,
        amount: Uint128,
    },
    /// Batched form of `Burn`.
    BatchBurn {
        from: String,
        batch: Vec<(TokenId, Uint128)>,
    },
    /// Grant or revoke `operator`'s authority over all of the sender's
    /// balances, across every token id. Idempotent in both directions.
    SetApproval { operator: String, approved: bool },
    /// Look up a balance and deliver it to `callback` as an execute call.
    /// Read-only; the result is not observed by this invocation.
    BalanceOf {
        owner: String,
        token_id: TokenId,
        callback: String,
    },
    /// Batched form of `BalanceOf`; one callback call carrying all pairs in
    /// request order.
    BalanceOfBatch {
        requests: Vec<BalanceRequest>,
        callback: String,
    },
    /// Look up approval status and deliver it to `callback`.
    IsApprovedForAll {
        owner: String,
        operator: String,
        callback: String,
    },
}
