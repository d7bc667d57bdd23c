//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic; the route table dispatches to the config facade.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{map_error, render_error};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_check_summary, format_config_json, format_config_text, format_config_toml,
    format_networks_json, format_networks_text, format_paths_text,
};
pub use route::RunContext;
