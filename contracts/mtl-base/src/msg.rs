use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    /// The minter is the only one who can create new tokens.
    /// This is designed for a base token that is controlled by an external
    /// program or contract. You will likely replace this with custom logic
    /// in custom tokens.
    pub minter: String,
}
