use serde::Serialize;

// ============================================================================
// Capability flags — computed once per descriptor at ingestion time
// ============================================================================

/// One capability an action descriptor can declare.
///
/// Every capability except `CliArguments` is revealed by the presence of a
/// key in the descriptor's `entity.properties` bag. `CliArguments` is revealed
/// by a top-level `cliArguments` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CliArguments,
    Argument,
    ElementTarget,
    ElementAttribute,
    Regex,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::CliArguments,
        Capability::Argument,
        Capability::ElementTarget,
        Capability::ElementAttribute,
        Capability::Regex,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A closed set of `Capability` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn with(mut self, capability: Capability) -> Self {
        self.insert(capability);
        self
    }

    pub fn insert(&mut self, capability: Capability) {
        self.0 |= capability.bit();
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = CapabilitySet::empty();
        for capability in iter {
            set.insert(capability);
        }
        set
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
