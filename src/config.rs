//! Remote order-management API endpoint.

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/ironman";

/// Base URL for the order API. Overridable at build time so deployed
/// bundles can point at the production host.
pub fn api_base() -> &'static str {
    option_env!("AGENT_API_BASE").unwrap_or(DEFAULT_API_BASE)
}
