//! Environment source: `TREESEAL__SECTION__KEY=value`.
//!
//! `TREESEAL__SCAN__IGNORE` takes a comma-separated list.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "TREESEAL";

/// Add environment overrides to builder.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("scan.ignore")
            .try_parsing(true),
    )
}
