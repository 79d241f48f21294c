use cosmwasm_std::{Addr, Deps, StdResult};

use crate::{state::APPROVALS, ContractError};

/// returns true if `operator` may move `owner`'s balances: either it is the
/// owner itself, or the owner has granted it operator status
pub fn check_can_transfer(deps: Deps, owner: &Addr, operator: &Addr) -> StdResult<bool> {
    // the owner is always its own operator, no entry needed
    if owner == operator {
        return Ok(true);
    }
    Ok(APPROVALS.has(deps.storage, (owner, operator)))
}

pub fn guard_can_transfer(deps: Deps, owner: &Addr, operator: &Addr) -> Result<(), ContractError> {
    if !check_can_transfer(deps, owner, operator)? {
        Err(ContractError::Unauthorized {})
    } else {
        Ok(())
    }
}
