/// Default number of expression visits a single rendering may perform before the
/// remainder of the graph is elided. Overridable at runtime, see
/// [`set_max_num_calls_in_print`](crate::print::set_max_num_calls_in_print).
pub const DEFAULT_MAX_NUM_CALLS_IN_PRINT: i64 = 10_000;

/// Largest integer exponent magnitude that `pow` expands into products. Beyond this a
/// dedicated constant-power node is emitted.
pub const MAX_POW_EXPANSION: i64 = 100;

/// Recursion budget handed to the equivalence checker by the construction rules.
pub const DEFAULT_EQUIVALENCE_DEPTH: u32 = 1;

/// Text rendered in place of a subgraph once the print budget is exhausted.
pub const ELISION_MARKER: &str = "...";

/// Name of the environment variable containing the path to the TOML configuration file
/// read by [`SxConfig::from_env`](crate::utils::conf::SxConfig::from_env).
pub const ENV_CONFIG_PATH: &str = "SX_CONFIG_PATH";
