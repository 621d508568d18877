use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use serde_json::Value;

/// Generates a tool input schema from a Rust type.
///
/// Sub-schemas are inlined and optional fields are emitted as their inner
/// type (not `T | null`), which keeps the shape flat for function-calling
/// models: a field is optional exactly when it is missing from `required`.
pub fn generate_schema<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.option_add_null_type = false;
        s.option_nullable = false;
        s.meta_schema = None;
    });
    let schema = settings.into_generator().into_root_schema_for::<T>();
    serde_json::to_value(schema).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    #[serde(rename_all = "lowercase")]
    #[allow(dead_code)]
    enum Flavor {
        Sweet,
        Sour,
    }

    #[derive(Debug, Deserialize, JsonSchema)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct TestParams {
        /// The name to look up
        name: String,
        /// How it should taste
        flavor: Option<Flavor>,
        limit: Option<u32>,
    }

    #[test]
    fn test_generate_schema() {
        let schema = generate_schema::<TestParams>();

        assert_eq!(schema["type"], "object");
        assert!(schema.get("$schema").is_none());
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(
            schema["properties"]["name"]["description"],
            "The name to look up"
        );
        assert_eq!(schema["additionalProperties"], false);

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required, &vec![Value::String("name".to_string())]);
    }

    #[test]
    fn test_enum_fields_are_inlined_literal_sets() {
        let schema = generate_schema::<TestParams>();
        let flavor = &schema["properties"]["flavor"];

        assert!(schema.get("definitions").is_none());
        assert_eq!(flavor["type"], "string");
        assert_eq!(flavor["enum"], serde_json::json!(["sweet", "sour"]));
        assert_eq!(flavor["description"], "How it should taste");
    }
}
