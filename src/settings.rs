use serde::{Deserialize, Serialize};

/// How the analyzer executes, independent of any single testcase.
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Print intermediate values of the computations to stderr.
    pub verbose: bool,
    /// How many threads to solve testcases with. `None` means one per CPU.
    pub threads: Option<usize>,
}

pub const DEFAULT_SETTINGS: Settings = Settings {
    verbose: false,
    threads: None,
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}
