//! Server initialization utilities
//!
//! Provides standardized tracing setup and the `serve_stdio!` macro
//! for consistent MCP server startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for MCP servers
///
/// Logs go to stderr; stdout is reserved for the MCP protocol.
///
/// - Environment-based filtering via `RUST_LOG`
/// - `info` for the given crate unless `RUST_LOG` says otherwise
/// - `LOG_FORMAT=json` selects structured JSON lines, anything else plain
///   text without ANSI colors
///
/// ```rust,ignore
/// mcp_common::init_tracing("sysmon_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    if json_requested(std::env::var("LOG_FORMAT").ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn json_requested(log_format: Option<&str>) -> bool {
    log_format
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Macro for standardized MCP server startup over stdio
///
/// Expands to a `#[tokio::main] async fn main()` that:
/// 1. Initializes tracing to stderr
/// 2. Builds the server with `<$server_type>::try_new()` (startup errors,
///    such as a broken config file, abort before serving)
/// 3. Serves via stdio transport
/// 4. Waits until the client closes the transport
///
/// ```rust,ignore
/// mcp_common::serve_stdio!(SysmonMcpServer, "sysmon_mcp");
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($server_type:ty, $crate_name:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = <$server_type>::try_new()?;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            let reason = service.waiting().await?;

            tracing::info!(?reason, "Server shutting down");
            Ok(())
        }
    };
}
