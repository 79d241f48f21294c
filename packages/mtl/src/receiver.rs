use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};

use crate::msg::TokenId;

/// MtlReceiveMsg should be de/serialized under `Receive()` variant in a
/// receiving contract's ExecuteMsg.
#[cw_serde]
pub struct MtlReceiveMsg {
    /// The account that executed the transfer
    pub operator: String,
    /// The account the tokens came from, `None` when they were minted
    pub from: Option<String>,
    pub token_id: TokenId,
    pub amount: Uint128,
    /// Opaque payload from the transfer request, forwarded byte-for-byte
    pub msg: Binary,
}

impl MtlReceiveMsg {
    /// serializes the message
    pub fn into_binary(self) -> StdResult<Binary> {
        let msg = ReceiverExecuteMsg::Receive(self);
        to_json_binary(&msg)
    }

    /// creates a cosmos_msg sending this struct to the named contract
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

/// MtlBatchReceiveMsg should be de/serialized under `BatchReceive()` variant
/// in a receiving contract's ExecuteMsg. The batch lists the applied line
/// items in the order they were submitted.
#[cw_serde]
pub struct MtlBatchReceiveMsg {
    pub operator: String,
    pub from: Option<String>,
    pub batch: Vec<(TokenId, Uint128)>,
    pub msg: Binary,
}

impl MtlBatchReceiveMsg {
    /// serializes the message
    pub fn into_binary(self) -> StdResult<Binary> {
        let msg = ReceiverExecuteMsg::BatchReceive(self);
        to_json_binary(&msg)
    }

    /// creates a cosmos_msg sending this struct to the named contract
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
enum ReceiverExecuteMsg {
    Receive(MtlReceiveMsg),
    BatchReceive(MtlBatchReceiveMsg),
}
