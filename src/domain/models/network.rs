use serde::{Deserialize, Serialize};

/// A named network and the icon used to display it.
///
/// Remote documents may carry extra fields per entry; they are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Display name, matched case-insensitively by lookups
    pub name: String,

    /// Icon identifier (typically a file name or URL)
    pub icon: String,
}

impl Network {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Whether this network's name equals `name`, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// The network list loaded from a configuration source.
///
/// Serialized as a bare JSON array, e.g.
/// `[{"name":"Ethereum","icon":"eth.svg"}]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkConfig {
    networks: Vec<Network>,
}

impl NetworkConfig {
    pub fn new(networks: Vec<Network>) -> Self {
        Self { networks }
    }

    /// Find the first network whose name matches `name` case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.matches(name))
    }

    /// Icon of the first network matching `name`, if any.
    pub fn icon_for(&self, name: &str) -> Option<&str> {
        self.find(name).map(|n| n.icon.as_str())
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl From<Vec<Network>> for NetworkConfig {
    fn from(networks: Vec<Network>) -> Self {
        Self::new(networks)
    }
}

impl<'a> IntoIterator for &'a NetworkConfig {
    type Item = &'a Network;
    type IntoIter = std::slice::Iter<'a, Network>;

    fn into_iter(self) -> Self::IntoIter {
        self.networks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NetworkConfig {
        serde_json::from_str(
            r#"[{"name":"Ethereum","icon":"eth.svg"},{"name":"Polygon","icon":"poly.svg"}]"#,
        )
        .expect("sample config should parse")
    }

    #[test]
    fn test_icon_lookup_ignores_case() {
        let config = sample();
        assert_eq!(config.icon_for("ETHEREUM"), Some("eth.svg"));
        assert_eq!(config.icon_for("polygon"), Some("poly.svg"));
        assert_eq!(config.icon_for("solana"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let config = NetworkConfig::new(vec![
            Network::new("Base", "base-a.svg"),
            Network::new("BASE", "base-b.svg"),
        ]);
        assert_eq!(config.icon_for("base"), Some("base-a.svg"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config: NetworkConfig = serde_json::from_str(
            r#"[{"name":"Arbitrum","icon":"arb.svg","chainId":42161,"rpc":["https://arb1"]}]"#,
        )
        .unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config.networks()[0], Network::new("Arbitrum", "arb.svg"));
    }

    #[test]
    fn test_missing_icon_is_rejected() {
        let result = serde_json::from_str::<NetworkConfig>(r#"[{"name":"Ethereum"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_object_body_is_rejected() {
        let result = serde_json::from_str::<NetworkConfig>(r#"{"networks":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config() {
        let config: NetworkConfig = serde_json::from_str("[]").unwrap();
        assert!(config.is_empty());
        assert_eq!(config.icon_for("anything"), None);
    }
}
