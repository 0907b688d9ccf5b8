use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::protocol::{ChartRequest, ToolResult};
use crate::proxy::{ChartProxy, ProxyError};
use crate::schema;

/// Handle a `generate_chart` tool call.
///
/// Validates the raw arguments against the advertised input schema, forwards
/// the request to the remote service, and folds every failure path into an
/// error text result. One outbound HTTP call per invocation, no retries.
pub async fn handle(arguments: Option<&Value>, config: &ServerConfig) -> ToolResult {
    let arguments = match arguments {
        Some(v) => v,
        None => return ToolResult::error("Missing arguments for generate_chart"),
    };

    if let Err(e) = schema::validate_arguments(&schema::generate_chart_schema(), arguments) {
        return ToolResult::error(format!("Error generating chart: {e}"));
    }

    let request: ChartRequest = match serde_json::from_value(arguments.clone()) {
        Ok(r) => r,
        Err(e) => return ToolResult::error(format!("Error generating chart: {e}")),
    };

    let proxy = ChartProxy::new(config);
    match proxy.generate_chart(&request).await {
        Ok(png) => ToolResult::text_with_image(
            format!("Chart generated successfully: {}", request.title),
            STANDARD.encode(&png),
            "image/png",
        ),
        Err(ProxyError::Connection { base_url }) => ToolResult::error(format!(
            "Error: Could not connect to chart service. Make sure it's accessible at {base_url}"
        )),
        Err(ProxyError::Remote { status, body }) => {
            ToolResult::error(format!("Error generating chart: {status} - {body}"))
        }
        Err(e) => ToolResult::error(format!("Error generating chart: {e}")),
    }
}
