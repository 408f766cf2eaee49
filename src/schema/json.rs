//! JSON Schema rendering of a [`ProfileSchema`]

use serde_json::{Map, Value, json};

use super::{
    ARCHITECTURES, DEPENDENCIES, FEATURES, GLOBAL_OPTIONS, P4_EXAMPLES, ProfileSchema,
    SOURCE_PACKAGES,
};
use crate::catalog::ValueKind;

impl ProfileSchema {
    /// Render the schema as a draft-07 JSON Schema document
    pub fn to_json_schema(&self) -> Value {
        let mut globals = Map::new();
        for (name, kind) in self.global_names() {
            let property = match kind {
                ValueKind::Toggle => self.toggle(name),
                ValueKind::Text => json!({ "type": "string" }),
            };
            globals.insert(name.to_string(), property);
        }

        let mut features = Map::new();
        for (name, children, settings) in self.feature_rules() {
            let mut properties = Map::new();
            for child in children {
                properties.insert(child.clone(), self.toggle(child));
            }
            for setting in settings {
                properties.insert(setting.clone(), json!({ "type": "string" }));
            }
            features.insert(
                name.to_string(),
                json!({
                    "default": self.default_of(name).unwrap_or(false),
                    "oneOf": [
                        { "type": "boolean" },
                        {
                            "type": "object",
                            "properties": properties,
                            "additionalProperties": false
                        }
                    ]
                }),
            );
        }
        features.insert(P4_EXAMPLES.to_string(), string_array());

        let architectures: Vec<&str> = self.architecture_names().collect();

        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "Build profile",
            "type": "object",
            "properties": {
                GLOBAL_OPTIONS: {
                    "type": "object",
                    "properties": globals,
                    "additionalProperties": false
                },
                FEATURES: {
                    "type": "object",
                    "properties": features,
                    "additionalProperties": false
                },
                ARCHITECTURES: {
                    "type": "array",
                    "items": { "enum": architectures },
                    "uniqueItems": true
                },
                DEPENDENCIES: {
                    "type": "object",
                    "properties": { SOURCE_PACKAGES: string_array() },
                    "additionalProperties": false
                }
            },
            "additionalProperties": false
        })
    }

    fn toggle(&self, name: &str) -> Value {
        json!({ "type": "boolean", "default": self.default_of(name).unwrap_or(false) })
    }
}

fn string_array() -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OptionCatalog;

    fn rendered() -> Value {
        let catalog = OptionCatalog::builtin().unwrap();
        ProfileSchema::new(&catalog).to_json_schema()
    }

    #[test]
    fn test_top_level_sections() {
        let schema = rendered();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("global-options"));
        assert!(properties.contains_key("features"));
        assert!(properties.contains_key("architectures"));
        assert!(properties.contains_key("dependencies"));
        assert_eq!(schema["additionalProperties"], json!(false));
    }

    #[test]
    fn test_global_types() {
        let schema = rendered();
        let globals = &schema["properties"]["global-options"]["properties"];
        assert_eq!(globals["asan"]["type"], "boolean");
        assert_eq!(globals["kdir"]["type"], "string");
    }

    #[test]
    fn test_feature_properties() {
        let schema = rendered();
        let switch = &schema["properties"]["features"]["properties"]["switch"];
        let object = &switch["oneOf"][1];
        assert_eq!(object["properties"]["thrift-switch"]["type"], "boolean");
        assert_eq!(object["properties"]["profile"]["type"], "string");
    }

    #[test]
    fn test_toggle_defaults() {
        let schema = rendered();
        let globals = &schema["properties"]["global-options"]["properties"];
        assert_eq!(globals["bf-python"]["default"], json!(true));
        assert_eq!(globals["asan"]["default"], json!(false));
        assert!(globals["kdir"].get("default").is_none());

        let features = &schema["properties"]["features"]["properties"];
        assert_eq!(features["thrift-driver"]["default"], json!(true));
        let switch = &features["switch"]["oneOf"][1]["properties"];
        assert_eq!(switch["thrift-switch"]["default"], json!(true));
        assert_eq!(switch["sai"]["default"], json!(false));
    }

    #[test]
    fn test_architecture_enum() {
        let schema = rendered();
        let items = &schema["properties"]["architectures"]["items"]["enum"];
        assert_eq!(items[0], "tofino");
    }
}
