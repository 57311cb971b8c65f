//! Monitored blockchain network set.

use std::collections::BTreeMap;

/// The set of networks the monitor polls, mapping chain id to display name.
///
/// Owned by the scheduler and passed by reference into the client and
/// analyzer. Iteration order is ascending chain id, so every polling cycle
/// visits networks in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSet {
    networks: BTreeMap<u64, String>,
}

impl Default for NetworkSet {
    /// The networks Pendle indexes markets on by default.
    fn default() -> Self {
        let mut set = Self::empty();
        set.add(1, "Ethereum");
        set.add(10, "Optimism");
        set.add(56, "BSC");
        set.add(146, "Sonic");
        set.add(5000, "Mantle");
        set.add(8453, "Base");
        set.add(42161, "Arbitrum");
        set
    }
}

impl NetworkSet {
    /// Create an empty set.
    pub fn empty() -> Self {
        Self {
            networks: BTreeMap::new(),
        }
    }

    /// Add a network, replacing any previous entry with the same id.
    pub fn add(&mut self, chain_id: u64, name: impl Into<String>) {
        self.networks.insert(chain_id, name.into());
    }

    /// Remove a network. Returns its display name if it was present.
    pub fn remove(&mut self, chain_id: u64) -> Option<String> {
        self.networks.remove(&chain_id)
    }

    /// Display name for a chain id, if monitored.
    pub fn display_name(&self, chain_id: u64) -> Option<&str> {
        self.networks.get(&chain_id).map(String::as_str)
    }

    /// Display name with a synthesized fallback for unknown ids.
    pub fn label(&self, chain_id: u64) -> String {
        match self.display_name(chain_id) {
            Some(name) => name.to_string(),
            None => format!("Network {}", chain_id),
        }
    }

    /// Iterate over (chain id, display name) in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.networks.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Chain ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.networks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_contains_known_networks() {
        let set = NetworkSet::default();
        assert_eq!(set.display_name(1), Some("Ethereum"));
        assert_eq!(set.display_name(42161), Some("Arbitrum"));
        assert_eq!(set.display_name(8453), Some("Base"));
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_add_and_remove() {
        let mut set = NetworkSet::empty();
        set.add(999, "Testnet");
        assert_eq!(set.display_name(999), Some("Testnet"));

        assert_eq!(set.remove(999), Some("Testnet".to_string()));
        assert_eq!(set.remove(999), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_add_replaces_existing_entry() {
        let mut set = NetworkSet::empty();
        set.add(1, "Mainnet");
        set.add(1, "Ethereum");
        assert_eq!(set.display_name(1), Some("Ethereum"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_label_falls_back_for_unknown_id() {
        let set = NetworkSet::default();
        assert_eq!(set.label(1), "Ethereum");
        assert_eq!(set.label(777), "Network 777");
    }

    #[test]
    fn test_iteration_is_ascending_by_id() {
        let set = NetworkSet::default();
        let ids: Vec<u64> = set.ids().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
