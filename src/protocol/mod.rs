pub mod request;
pub mod response;

pub use request::{
    ChartData, ChartRequest, InitializeParams, JsonRpcRequest, RpcId, ToolCallParams,
};
pub use response::{JsonRpcError, JsonRpcResponse, ToolResult, ToolResultContent};
