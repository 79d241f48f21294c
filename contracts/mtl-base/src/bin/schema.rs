use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use mtl::{
    ApprovedForAllResponse, BalanceResponse, BatchBalanceResponse, IsApprovedForAllResponse,
    MtlApprovalCallbackMsg, MtlBalanceCallbackMsg, MtlBatchBalanceCallbackMsg, MtlBatchReceiveMsg,
    MtlExecuteMsg, MtlQueryMsg, MtlReceiveMsg,
};
use mtl_base::msg::InstantiateMsg;

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(MtlExecuteMsg), &out_dir);
    export_schema(&schema_for!(MtlQueryMsg), &out_dir);
    export_schema(&schema_for!(MtlReceiveMsg), &out_dir);
    export_schema(&schema_for!(MtlBatchReceiveMsg), &out_dir);
    export_schema(&schema_for!(MtlBalanceCallbackMsg), &out_dir);
    export_schema(&schema_for!(MtlBatchBalanceCallbackMsg), &out_dir);
    export_schema(&schema_for!(MtlApprovalCallbackMsg), &out_dir);
    export_schema(&schema_for!(BalanceResponse), &out_dir);
    export_schema(&schema_for!(BatchBalanceResponse), &out_dir);
    export_schema(&schema_for!(IsApprovedForAllResponse), &out_dir);
    export_schema(&schema_for!(ApprovedForAllResponse), &out_dir);
}
