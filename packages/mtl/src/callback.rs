use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};

use crate::msg::TokenId;

/// A single balance lookup, echoed back verbatim alongside the result so the
/// continuation can correlate responses without keeping its own state.
#[cw_serde]
pub struct BalanceRequest {
    pub owner: String,
    pub token_id: TokenId,
}

/// An approval lookup, echoed back like `BalanceRequest`.
#[cw_serde]
pub struct ApprovalRequest {
    pub owner: String,
    pub operator: String,
}

/// Delivered under the `balance_result` variant of the continuation's
/// ExecuteMsg.
#[cw_serde]
pub struct MtlBalanceCallbackMsg {
    pub request: BalanceRequest,
    pub balance: Uint128,
}

impl MtlBalanceCallbackMsg {
    pub fn into_binary(self) -> StdResult<Binary> {
        let msg = CallbackExecuteMsg::BalanceResult(self);
        to_json_binary(&msg)
    }

    pub fn into_cosmos_msg(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg> {
        let msg = self.into_binary()?;
        let execute = WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg,
            funds: vec![],
        };
        Ok(execute.into())
    }
}

/// Delivered under the `batch_balance_result` variant, pairs in the same
/// order as the requests were submitted.
#[cw_serde]
pub struct MtlBatchBalanceCallbackMsg {
    pub balances: Vec<(BalanceRequest, Uint128)>,
}

impl MtlBatchBalanceCallbackMsg {
    pub fn into_binary(self) -> StdResult<Binary> {
        let msg = CallbackExecuteMsg::BatchBalanceResult(self);
        to_json_binary(&msg)
    }

    pub fn into_cosmos_msg(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg> {
        let msg = self.into_binary()?;
        let execute = WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg,
            funds: vec![],
        };
        Ok(execute.into())
    }
}

/// Delivered under the `approval_result` variant.
#[cw_serde]
pub struct MtlApprovalCallbackMsg {
    pub request: ApprovalRequest,
    pub approved: bool,
}

impl MtlApprovalCallbackMsg {
    pub fn into_binary(self) -> StdResult<Binary> {
        let msg = CallbackExecuteMsg::ApprovalResult(self);
        to_json_binary(&msg)
    }

    pub fn into_cosmos_msg(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg> {
        let msg = self.into_binary()?;
        let execute = WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg,
            funds: vec![],
        };
        Ok(execute.into())
    }
}

// This is just a helper to properly serialize the above messages
#[cw_serde]
enum CallbackExecuteMsg {
    BalanceResult(MtlBalanceCallbackMsg),
    BatchBalanceResult(MtlBatchBalanceCallbackMsg),
    ApprovalResult(MtlApprovalCallbackMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_result_wire_shape() {
        let msg = MtlBalanceCallbackMsg {
            request: BalanceRequest {
                owner: "owner".to_string(),
                token_id: "3".to_string(),
            },
            balance: Uint128::new(42),
        };
        let bin = msg.into_binary().unwrap();
        let json: serde_json::Value = serde_json::from_slice(bin.as_slice()).unwrap();
        assert_eq!(json["balance_result"]["request"]["owner"], "owner");
        assert_eq!(json["balance_result"]["balance"], "42");
    }

    #[test]
    fn approval_result_wire_shape() {
        let msg = MtlApprovalCallbackMsg {
            request: ApprovalRequest {
                owner: "owner".to_string(),
                operator: "operator".to_string(),
            },
            approved: true,
        };
        let bin = msg.into_binary().unwrap();
        let json: serde_json::Value = serde_json::from_slice(bin.as_slice()).unwrap();
        assert_eq!(json["approval_result"]["approved"], true);
    }
}
