#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use mtl::{MtlExecuteMsg, MtlQueryMsg};

use crate::error::ContractError;
use crate::msg::InstantiateMsg;
use crate::state::MINTER;
use crate::{execute as exec, query};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:mtl-base";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bundles the mutable execution context so handler signatures stay short.
pub struct ExecuteEnv<'a> {
    pub deps: DepsMut<'a>,
    pub env: Env,
    pub info: MessageInfo,
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let minter = deps.api.addr_validate(&msg.minter)?;
    MINTER.save(deps.storage, &minter)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: MtlExecuteMsg,
) -> Result<Response, ContractError> {
    let env = ExecuteEnv { deps, env, info };
    match msg {
        MtlExecuteMsg::Transfer {
            from,
            to,
            token_id,
            amount,
            msg,
        } => exec::transfer(env, from, to, token_id, amount, msg),
        MtlExecuteMsg::BatchTransfer {
            from,
            to,
            batch,
            msg,
        } => exec::batch_transfer(env, from, to, batch, msg),
        MtlExecuteMsg::Mint {
            to,
            token_id,
            amount,
            msg,
        } => exec::mint(env, to, token_id, amount, msg),
        MtlExecuteMsg::BatchMint { to, batch, msg } => exec::batch_mint(env, to, batch, msg),
        MtlExecuteMsg::Burn {
            from,
            token_id,
            amount,
        } => exec::burn(env, from, token_id, amount),
        MtlExecuteMsg::BatchBurn { from, batch } => exec::batch_burn(env, from, batch),
        MtlExecuteMsg::SetApproval { operator, approved } => {
            exec::set_approval(env, operator, approved)
        }
        MtlExecuteMsg::BalanceOf {
            owner,
            token_id,
            callback,
        } => exec::balance_of(env, owner, token_id, callback),
        MtlExecuteMsg::BalanceOfBatch { requests, callback } => {
            exec::balance_of_batch(env, requests, callback)
        }
        MtlExecuteMsg::IsApprovedForAll {
            owner,
            operator,
            callback,
        } => exec::is_approved_for_all(env, owner, operator, callback),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: MtlQueryMsg) -> StdResult<Binary> {
    match msg {
        MtlQueryMsg::Balance { owner, token_id } => {
            to_json_binary(&query::balance(deps, owner, token_id)?)
        }
        MtlQueryMsg::BatchBalance { owner, token_ids } => {
            to_json_binary(&query::batch_balance(deps, owner, token_ids)?)
        }
        MtlQueryMsg::IsApprovedForAll { owner, operator } => {
            to_json_binary(&query::is_approved_for_all(deps, owner, operator)?)
        }
        MtlQueryMsg::ApprovedForAll {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query::approved_for_all(deps, owner, start_after, limit)?),
    }
}
