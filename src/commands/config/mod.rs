use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the configuration currently in effect
    Show,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Schema => {
                let schema = crate::shared::config::generate_schema();
                let json = serde_json::to_string_pretty(&schema)?;
                println!("{json}");
            }
            Self::Show => {
                let config = crate::shared::config::load_config()?;
                println!("{config:#?}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn schema_generates_valid_json() {
        let schema = crate::shared::config::generate_schema();
        let value: serde_json::Value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value["title"], "Config");
        assert_eq!(value["type"], "object");
    }

    #[test]
    fn schema_contains_config_properties() {
        let schema = crate::shared::config::generate_schema();
        let value: serde_json::Value = serde_json::to_value(&schema).unwrap();

        let props = value["properties"].as_object().unwrap();
        assert!(props.contains_key("api"));
        assert!(props.contains_key("auth"));
        assert!(props.contains_key("log"));

        let defs = value["$defs"].as_object().unwrap();
        let api_props = defs["ApiConfig"]["properties"].as_object().unwrap();
        assert!(api_props.contains_key("server_endpoint"));
        let log_props = defs["LogConfig"]["properties"].as_object().unwrap();
        assert!(log_props.contains_key("level"));
        assert!(log_props.contains_key("format"));
    }
}
