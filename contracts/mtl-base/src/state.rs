use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};

/// The only address allowed to create new tokens.
pub const MINTER: Item<Addr> = Item::new("minter");

/// The ledger of record, `(owner, token_id) -> balance`. A missing entry is
/// a balance of zero, never an error.
pub const BALANCES: Map<(&Addr, &str), Uint128> = Map::new("balances");

/// Operator grants, `(owner, operator) -> ()`. Membership is the grant; a
/// missing entry means no approval. An owner is implicitly approved for
/// itself and never stored here.
pub const APPROVALS: Map<(&Addr, &Addr), Empty> = Map::new("approvals");
