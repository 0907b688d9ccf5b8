use crate::config::ServerConfig;
use crate::protocol::ToolResult;
use crate::proxy::{ChartProxy, ProxyError};

/// Handle a `check_fastapi_status` tool call: liveness probe against the
/// remote service root.
pub async fn handle(config: &ServerConfig) -> ToolResult {
    let proxy = ChartProxy::new(config);
    match proxy.check_status().await {
        Ok(()) => ToolResult::text("FastAPI server is running and accessible"),
        Err(ProxyError::Connection { base_url }) => ToolResult::error(format!(
            "FastAPI server is not accessible. Make sure it's accessible at {base_url}"
        )),
        Err(ProxyError::Remote { status, .. }) => {
            ToolResult::error(format!("FastAPI server responded with status: {status}"))
        }
        Err(e) => ToolResult::error(format!("Error checking FastAPI status: {e}")),
    }
}
