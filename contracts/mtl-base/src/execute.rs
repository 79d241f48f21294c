use std::collections::BTreeMap;

use cosmwasm_std::{Addr, Binary, DepsMut, Empty, Response, StdError, Uint128};
use mtl::{
    ApprovalRequest, BalanceRequest, MtlApprovalCallbackMsg, MtlBalanceCallbackMsg,
    MtlBatchBalanceCallbackMsg, MtlBatchReceiveMsg, MtlReceiveMsg, TokenId,
};

use crate::{
    contract::ExecuteEnv,
    helpers::{check_can_transfer, guard_can_transfer},
    state::{APPROVALS, BALANCES, MINTER},
    ContractError,
};

/// Settle a set of balance changes between `from` and `to`.
///
/// `None` on `from` means the tokens are minted, `None` on `to` means they
/// are burned. Line items sharing a token id are validated as one combined
/// amount, and every write is staged before the first one is applied, so a
/// failing item leaves the ledger untouched even without the host's
/// transaction rollback.
///
/// Make sure permissions are checked before calling this.
fn settle(
    deps: &mut DepsMut,
    from: Option<&Addr>,
    to: Option<&Addr>,
    lines: &[(TokenId, Uint128)],
) -> Result<(), ContractError> {
    let mut totals: BTreeMap<&str, Uint128> = BTreeMap::new();
    for (token_id, amount) in lines {
        let total = totals.entry(token_id.as_str()).or_default();
        *total = total.checked_add(*amount).map_err(StdError::overflow)?;
    }

    // a self transfer nets out to zero for every token id, but the
    // sufficiency check still applies
    if let (Some(from_addr), Some(to_addr)) = (from, to) {
        if from_addr == to_addr {
            for (token_id, total) in totals {
                let balance = BALANCES
                    .may_load(deps.storage, (from_addr, token_id))?
                    .unwrap_or_default();
                if balance < total {
                    return Err(ContractError::InsufficientBalance {
                        token_id: token_id.to_string(),
                        available: balance,
                        required: total,
                    });
                }
            }
            return Ok(());
        }
    }

    let mut writes: Vec<((&Addr, &str), Uint128)> = Vec::new();
    for (token_id, total) in totals {
        if let Some(from_addr) = from {
            let balance = BALANCES
                .may_load(deps.storage, (from_addr, token_id))?
                .unwrap_or_default();
            let debited =
                balance
                    .checked_sub(total)
                    .map_err(|_| ContractError::InsufficientBalance {
                        token_id: token_id.to_string(),
                        available: balance,
                        required: total,
                    })?;
            writes.push(((from_addr, token_id), debited));
        }
        if let Some(to_addr) = to {
            let balance = BALANCES
                .may_load(deps.storage, (to_addr, token_id))?
                .unwrap_or_default();
            let credited = balance.checked_add(total).map_err(StdError::overflow)?;
            writes.push(((to_addr, token_id), credited));
        }
    }

    for (key, value) in writes {
        BALANCES.save(deps.storage, key, &value)?;
    }
    Ok(())
}

pub fn transfer(
    env: ExecuteEnv,
    from: String,
    to: String,
    token_id: TokenId,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;

    guard_can_transfer(deps.as_ref(), &from_addr, &info.sender)?;

    settle(
        &mut deps,
        Some(&from_addr),
        Some(&to_addr),
        &[(token_id.clone(), amount)],
    )?;

    let mut rsp = Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("token_id", &token_id)
        .add_attribute("amount", amount.to_string())
        .add_attribute("from", &from)
        .add_attribute("to", &to);

    // the hook is skipped on a self transfer
    if to_addr != from_addr {
        rsp = rsp.add_message(
            MtlReceiveMsg {
                operator: info.sender.into(),
                from: Some(from),
                token_id,
                amount,
                msg,
            }
            .into_cosmos_msg(to)?,
        );
    }

    Ok(rsp)
}

pub fn batch_transfer(
    env: ExecuteEnv,
    from: String,
    to: String,
    batch: Vec<(TokenId, Uint128)>,
    msg: Binary,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;

    // one shared `from`, so authorization is checked once per request
    guard_can_transfer(deps.as_ref(), &from_addr, &info.sender)?;

    settle(&mut deps, Some(&from_addr), Some(&to_addr), &batch)?;

    let mut rsp = Response::new()
        .add_attribute("action", "batch_transfer")
        .add_attribute("from", &from)
        .add_attribute("to", &to);

    if to_addr != from_addr {
        // one hook call for the whole batch, line items in submission order
        rsp = rsp.add_message(
            MtlBatchReceiveMsg {
                operator: info.sender.into(),
                from: Some(from),
                batch,
                msg,
            }
            .into_cosmos_msg(to)?,
        );
    }

    Ok(rsp)
}

pub fn mint(
    env: ExecuteEnv,
    to: String,
    token_id: TokenId,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    let to_addr = deps.api.addr_validate(&to)?;

    if info.sender != MINTER.load(deps.storage)? {
        return Err(ContractError::Unauthorized {});
    }

    settle(&mut deps, None, Some(&to_addr), &[(token_id.clone(), amount)])?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", &token_id)
        .add_attribute("amount", amount.to_string())
        .add_attribute("to", &to)
        .add_message(
            MtlReceiveMsg {
                operator: info.sender.into(),
                from: None,
                token_id,
                amount,
                msg,
            }
            .into_cosmos_msg(to)?,
        ))
}

pub fn batch_mint(
    env: ExecuteEnv,
    to: String,
    batch: Vec<(TokenId, Uint128)>,
    msg: Binary,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    let to_addr = deps.api.addr_validate(&to)?;

    if info.sender != MINTER.load(deps.storage)? {
        return Err(ContractError::Unauthorized {});
    }

    settle(&mut deps, None, Some(&to_addr), &batch)?;

    Ok(Response::new()
        .add_attribute("action", "batch_mint")
        .add_attribute("to", &to)
        .add_message(
            MtlBatchReceiveMsg {
                operator: info.sender.into(),
                from: None,
                batch,
                msg,
            }
            .into_cosmos_msg(to)?,
        ))
}

pub fn burn(
    env: ExecuteEnv,
    from: String,
    token_id: TokenId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    let from_addr = deps.api.addr_validate(&from)?;

    // whoever can transfer these tokens can burn
    guard_can_transfer(deps.as_ref(), &from_addr, &info.sender)?;

    settle(&mut deps, Some(&from_addr), None, &[(token_id.clone(), amount)])?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("token_id", &token_id)
        .add_attribute("amount", amount.to_string())
        .add_attribute("from", &from))
}

pub fn batch_burn(
    env: ExecuteEnv,
    from: String,
    batch: Vec<(TokenId, Uint128)>,
) -> Result<Response, ContractError> {
    let ExecuteEnv { mut deps, info, .. } = env;

    let from_addr = deps.api.addr_validate(&from)?;

    guard_can_transfer(deps.as_ref(), &from_addr, &info.sender)?;

    settle(&mut deps, Some(&from_addr), None, &batch)?;

    Ok(Response::new()
        .add_attribute("action", "batch_burn")
        .add_attribute("from", &from))
}

pub fn set_approval(
    env: ExecuteEnv,
    operator: String,
    approved: bool,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, info, .. } = env;

    let operator_addr = deps.api.addr_validate(&operator)?;

    // saving an existing grant or removing a missing one is a no-op, the
    // entry point is idempotent
    if approved {
        APPROVALS.save(deps.storage, (&info.sender, &operator_addr), &Empty {})?;
    } else {
        APPROVALS.remove(deps.storage, (&info.sender, &operator_addr));
    }

    Ok(Response::new()
        .add_attribute("action", "set_approval")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("operator", &operator)
        .add_attribute("approved", approved.to_string()))
}

pub fn balance_of(
    env: ExecuteEnv,
    owner: String,
    token_id: TokenId,
    callback: String,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, .. } = env;

    let owner_addr = deps.api.addr_validate(&owner)?;
    let balance = BALANCES
        .may_load(deps.storage, (&owner_addr, &token_id))?
        .unwrap_or_default();

    let callback_msg = MtlBalanceCallbackMsg {
        request: BalanceRequest { owner, token_id },
        balance,
    }
    .into_cosmos_msg(callback)?;

    Ok(Response::new()
        .add_attribute("action", "balance_of")
        .add_message(callback_msg))
}

pub fn balance_of_batch(
    env: ExecuteEnv,
    requests: Vec<BalanceRequest>,
    callback: String,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, .. } = env;

    let mut balances = Vec::with_capacity(requests.len());
    for request in requests {
        let owner_addr = deps.api.addr_validate(&request.owner)?;
        let balance = BALANCES
            .may_load(deps.storage, (&owner_addr, &request.token_id))?
            .unwrap_or_default();
        balances.push((request, balance));
    }

    let callback_msg = MtlBatchBalanceCallbackMsg { balances }.into_cosmos_msg(callback)?;

    Ok(Response::new()
        .add_attribute("action", "balance_of_batch")
        .add_message(callback_msg))
}

pub fn is_approved_for_all(
    env: ExecuteEnv,
    owner: String,
    operator: String,
    callback: String,
) -> Result<Response, ContractError> {
    let ExecuteEnv { deps, .. } = env;

    let owner_addr = deps.api.addr_validate(&owner)?;
    let operator_addr = deps.api.addr_validate(&operator)?;
    let approved = check_can_transfer(deps.as_ref(), &owner_addr, &operator_addr)?;

    let callback_msg = MtlApprovalCallbackMsg {
        request: ApprovalRequest { owner, operator },
        approved,
    }
    .into_cosmos_msg(callback)?;

    Ok(Response::new()
        .add_attribute("action", "is_approved_for_all")
        .add_message(callback_msg))
}
