//! Generation plugins.

/// A plugin that changes the emitted runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluginId {
    /// Wraps each test body in a `Try`/`Catch` block and includes `CException.h`.
    CException,
}

impl PluginId {
    /// Every known plugin.
    pub const ALL: &'static [PluginId] = &[PluginId::CException];

    /// Canonical config spelling.
    pub fn name(self) -> &'static str {
        match self {
            PluginId::CException => "cexception",
        }
    }

    /// Look a plugin up by its config spelling.
    ///
    /// A leading `:` is accepted so symbol-style entries (`:cexception`) resolve too.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches(':');
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}
