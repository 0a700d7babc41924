// src/constants.rs
//
// Application-wide constants.

/// GraphQL endpoint used when neither flag, environment nor config name one.
pub const DEFAULT_ENDPOINT: &str = "https://quicknotess.herokuapp.com/v1/graphql";

/// Environment variable overriding the endpoint (read by clap).
///
/// Used in: `cli/args.rs`
pub const ENDPOINT_ENV_VAR: &str = "QUICKNOTES_ENDPOINT";

/// Directory below the platform config dir holding the config file.
pub const CONFIG_DIR_NAME: &str = "quicknotes";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum characters of a note's first line shown by `fetch`.
///
/// Used in: `ports/text.rs`
pub const LIST_PREVIEW_CHARS: usize = 72;
