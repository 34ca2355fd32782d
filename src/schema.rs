//! Declarative input schemas checked by a single generic validator.
//!
//! Each capability declares its input shape as an ordered list of
//! [`FieldSpec`]s. The validator walks the declaration order, substitutes
//! defaults for absent optional fields, and fails fast on the first
//! violation with a field-specific message. The same declaration renders to
//! the JSON Schema advertised over `tools/list`.

use serde_json::{json, Map, Value};

use crate::error::{JesterError, Result};

/// Validated, defaulted argument map handed to handlers.
pub type JsonMap = Map<String, Value>;

/// Primitive field types understood by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    /// String restricted to a fixed set of literals.
    Enum(&'static [&'static str]),
}

impl FieldType {
    fn type_word(&self) -> &'static str {
        match self {
            FieldType::String | FieldType::Enum(_) => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }
}

/// Declaration of a single input field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub field_type: FieldType,
    pub required: bool,
    /// Reject empty strings as if the field were absent.
    pub non_empty: bool,
    pub default: Option<Value>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
    pub pattern: Option<&'static str>,
}

impl FieldSpec {
    fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            description: None,
            field_type,
            required: true,
            non_empty: false,
            default: None,
            minimum: None,
            maximum: None,
            pattern: None,
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    pub fn enumeration(name: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(name, FieldType::Enum(options))
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Optional field that takes `default` when absent.
    pub fn default_value(mut self, default: Value) -> Self {
        self.required = false;
        self.default = Some(default);
        self
    }

    pub fn non_empty(mut self) -> Self {
        self.non_empty = true;
        self
    }

    pub fn range(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    pub fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// "Query parameter is required and must be a string"
    fn requirement_message(&self) -> String {
        let mut name = self.name.to_string();
        if let Some(first) = name.get(..1) {
            let upper = first.to_uppercase();
            name.replace_range(..1, &upper);
        }
        format!(
            "{} parameter is required and must be a {}",
            name,
            self.field_type.type_word()
        )
    }

    fn check(&self, value: &Value) -> Result<()> {
        let fail = || JesterError::InvalidArgument(self.requirement_message());
        match self.field_type {
            FieldType::String => {
                let text = value.as_str().ok_or_else(fail)?;
                if self.non_empty && text.is_empty() {
                    return Err(fail());
                }
                if let Some(pattern) = self.pattern {
                    let re = regex::Regex::new(pattern)
                        .map_err(|e| JesterError::Internal(e.to_string()))?;
                    if !re.is_match(text) {
                        return Err(JesterError::InvalidArgument(format!(
                            "{} must match pattern {}",
                            self.name, pattern
                        )));
                    }
                }
            }
            FieldType::Enum(options) => {
                let text = value.as_str().ok_or_else(fail)?;
                if !options.contains(&text) {
                    return Err(JesterError::InvalidArgument(format!(
                        "{} must be one of: {}",
                        self.name,
                        options.join(", ")
                    )));
                }
            }
            FieldType::Integer => {
                let n = value.as_i64().ok_or_else(fail)?;
                self.check_bounds(n)?;
            }
            FieldType::Number => {
                let n = value.as_f64().ok_or_else(fail)?;
                if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
                    if n < min as f64 || n > max as f64 {
                        return Err(self.bounds_error(min, max));
                    }
                }
            }
            FieldType::Boolean => {
                value.as_bool().ok_or_else(fail)?;
            }
        }
        Ok(())
    }

    fn check_bounds(&self, n: i64) -> Result<()> {
        if let Some(min) = self.minimum {
            if n < min {
                return Err(self.bounds_error(min, self.maximum.unwrap_or(i64::MAX)));
            }
        }
        if let Some(max) = self.maximum {
            if n > max {
                return Err(self.bounds_error(self.minimum.unwrap_or(i64::MIN), max));
            }
        }
        Ok(())
    }

    fn bounds_error(&self, min: i64, max: i64) -> JesterError {
        JesterError::InvalidArgument(format!("{} must be between {} and {}", self.name, min, max))
    }
}

/// Ordered input-shape declaration for one capability.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    fields: Vec<FieldSpec>,
}

impl InputSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Schema of a capability that takes no arguments.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validate raw arguments, substituting declared defaults.
    ///
    /// Fails on the first violation in declaration order; `null` and empty
    /// values count as absent.
    pub fn validate(&self, raw: &Value) -> Result<JsonMap> {
        let empty = Map::new();
        let args = match raw {
            Value::Null => &empty,
            Value::Object(map) => map,
            _ => {
                return Err(JesterError::InvalidArgument(
                    "arguments must be an object".to_string(),
                ))
            }
        };

        let mut validated = Map::new();
        for field in &self.fields {
            let value = args.get(field.name).filter(|v| !v.is_null());
            match value {
                Some(value) => {
                    field.check(value)?;
                    validated.insert(field.name.to_string(), value.clone());
                }
                None => {
                    if let Some(default) = &field.default {
                        validated.insert(field.name.to_string(), default.clone());
                    } else if field.required {
                        return Err(JesterError::InvalidArgument(field.requirement_message()));
                    }
                }
            }
        }
        Ok(validated)
    }

    /// Render the declaration as a JSON Schema object.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(field.field_type.type_word()));
            if let FieldType::Enum(options) = field.field_type {
                prop.insert("enum".to_string(), json!(options));
            }
            if let Some(description) = field.description {
                prop.insert("description".to_string(), json!(description));
            }
            if let Some(default) = &field.default {
                prop.insert("default".to_string(), default.clone());
            }
            if let Some(min) = field.minimum {
                prop.insert("minimum".to_string(), json!(min));
            }
            if let Some(max) = field.maximum {
                prop.insert("maximum".to_string(), json!(max));
            }
            if let Some(pattern) = field.pattern {
                prop.insert("pattern".to_string(), json!(pattern));
            }
            properties.insert(field.name.to_string(), Value::Object(prop));

            if field.required {
                required.push(field.name);
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        Value::Object(schema)
    }
}
