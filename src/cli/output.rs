//! Output formatting utilities for the CLI.

use console::style;
use serde::Serialize;

use crate::domain::models::{ConfigContext, Network};

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Result of an icon lookup.
#[derive(Debug, Serialize)]
pub struct IconOutput {
    pub network: String,
    pub icon: Option<String>,
}

impl CommandOutput for IconOutput {
    fn to_human(&self) -> String {
        match &self.icon {
            Some(icon) => icon.clone(),
            None => format!("No icon found for network '{}'", self.network),
        }
    }
}

/// Every network in the loaded configuration.
#[derive(Debug, Serialize)]
pub struct NetworkListOutput {
    pub networks: Vec<Network>,
}

impl CommandOutput for NetworkListOutput {
    fn to_human(&self) -> String {
        if self.networks.is_empty() {
            return "No networks configured.".to_string();
        }

        let width = self
            .networks
            .iter()
            .map(|n| n.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<String> = self
            .networks
            .iter()
            .map(|n| {
                let padding = " ".repeat(width - n.name.chars().count());
                format!("{}{padding}  {}", style(&n.name).bold(), n.icon)
            })
            .collect();
        lines.push(format!(
            "\nShowing {} network{}",
            self.networks.len(),
            if self.networks.len() == 1 { "" } else { "s" }
        ));
        lines.join("\n")
    }
}

/// Provider state as rendered by `netconfig status`.
#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub source: String,
    #[serde(flatten)]
    pub context: ConfigContext,
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let state = if self.context.loading {
            style("loading").yellow().to_string()
        } else if let Some(error) = &self.context.error {
            format!("{} ({error})", style("failed").red().bold())
        } else {
            let count = self.context.config.as_ref().map_or(0, |c| c.len());
            format!("{} ({count} networks)", style("ready").green().bold())
        };
        format!("Source: {}\nState:  {state}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NetworkConfig;

    #[test]
    fn test_icon_output_human() {
        let found = IconOutput {
            network: "ETHEREUM".to_string(),
            icon: Some("eth.svg".to_string()),
        };
        assert_eq!(found.to_human(), "eth.svg");

        let missing = IconOutput {
            network: "solana".to_string(),
            icon: None,
        };
        assert!(missing.to_human().contains("solana"));
        assert_eq!(missing.to_json()["icon"], serde_json::Value::Null);
    }

    #[test]
    fn test_network_list_json_is_array_of_networks() {
        let out = NetworkListOutput {
            networks: vec![Network::new("Ethereum", "eth.svg")],
        };
        let json = out.to_json();
        assert_eq!(json["networks"][0]["name"], "Ethereum");
        assert_eq!(json["networks"][0]["icon"], "eth.svg");
    }

    #[test]
    fn test_status_json_flattens_context() {
        let out = StatusOutput {
            source: "https://example.com/networks.json".to_string(),
            context: ConfigContext {
                config: Some(NetworkConfig::new(vec![Network::new("Polygon", "poly.svg")])),
                loading: false,
                error: None,
            },
        };
        let json = out.to_json();
        assert_eq!(json["loading"], false);
        assert_eq!(json["error"], serde_json::Value::Null);
        assert_eq!(json["config"][0]["icon"], "poly.svg");
    }

    #[test]
    fn test_network_list_pads_names_by_chars() {
        let out = NetworkListOutput {
            networks: vec![
                Network::new("Zürich", "zrh.svg"),
                Network::new("Base", "base.svg"),
            ],
        };
        let human = console::strip_ansi_codes(&out.to_human()).into_owned();
        let lines: Vec<&str> = human.lines().take(2).collect();
        assert_eq!(lines, ["Zürich  zrh.svg", "Base    base.svg"]);
    }

    #[test]
    fn test_status_human_shows_error() {
        let out = StatusOutput {
            source: "/config.json".to_string(),
            context: ConfigContext {
                config: None,
                loading: false,
                error: Some("Failed to load config file: Not Found".to_string()),
            },
        };
        assert!(out.to_human().contains("Not Found"));
    }
}
