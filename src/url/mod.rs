//! URL helpers shared by the robots gate and the locale resolver
//!
//! This module derives robots.txt locations, builds the request targets that
//! robots rules are matched against, and handles the site-mount prefix of a
//! mirrored documentation site.

mod origin;
mod target;

pub use origin::{parse_http_url, robots_txt_url};
pub use target::{normalize_base_path, parse_site_url, request_target, strip_base_path};
