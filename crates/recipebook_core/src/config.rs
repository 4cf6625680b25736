//! Cookbook configuration.

/// What to do when a single recipe entry in the store is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Discard the whole store and start empty.
    #[default]
    Abort,
    /// Log and skip the bad entry, keep the rest.
    SkipInvalid,
}

/// Configuration for opening a cookbook.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to pretty-print the store JSON.
    pub pretty: bool,

    /// Whether to write through a temp file and rename over the store.
    pub atomic_writes: bool,

    /// Whether to create missing parent directories on save.
    pub create_parent_dirs: bool,

    /// Behavior on a malformed recipe entry during load.
    pub load_policy: LoadPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: true,
            atomic_writes: true,
            create_parent_dirs: true,
            load_policy: LoadPolicy::Abort,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to pretty-print the store.
    #[must_use]
    pub const fn pretty(mut self, value: bool) -> Self {
        self.pretty = value;
        self
    }

    /// Sets whether saves go through a temp file and rename.
    #[must_use]
    pub const fn atomic_writes(mut self, value: bool) -> Self {
        self.atomic_writes = value;
        self
    }

    /// Sets whether to create missing parent directories on save.
    #[must_use]
    pub const fn create_parent_dirs(mut self, value: bool) -> Self {
        self.create_parent_dirs = value;
        self
    }

    /// Sets the load policy for malformed entries.
    #[must_use]
    pub const fn load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }
}
