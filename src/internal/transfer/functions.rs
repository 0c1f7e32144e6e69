pub mod probe_capabilities;
pub mod resolve_redirects;
