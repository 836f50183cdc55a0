//! GitHub repository overview generator
//!
//! - Fetches the owner's public repositories via the GraphQL API in `fetch`
//! - Renders them as a markdown table in `render`
//! - Splices the table into the README between sentinel markers in `splice`
//! - Requires GH_OWNER and GH_TOKEN env vars

pub mod fetch;
pub mod render;
pub mod splice;
