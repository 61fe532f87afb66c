//! # Action Schemas
//!
//! The backend configuration declares every action the server accepts,
//! together with its parameters and their types:
//!
//! ```yaml
//! actions:
//!   movePlayer:
//!     changeX: float64
//!     player: player        # reference to a state type, sent as an ID
//!   spawnZoneItems:
//!     items: "[]item"
//! ```
//!
//! This module turns those type strings into [`ParamType`] values and derives
//! the initial form state for an action (see [`ActionSchema::default_value`]).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Current field values of one action form, keyed by param name.
pub type FormState = Map<String, Value>;

/// The declared type of a single action parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParamType {
    String,
    Bool,
    Int,
    Float,
    /// Reference to a state type (e.g. `player`). Sent as a numeric ID.
    Id(String),
    List(Box<ParamType>),
}

/// A type string that doesn't name anything the backend understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTypeError(pub String);

impl fmt::Display for ParamTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported parameter type: {:?}", self.0)
    }
}

impl std::error::Error for ParamTypeError {}

impl FromStr for ParamType {
    type Err = ParamTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_prefix("[]") {
            return inner
                .parse::<ParamType>()
                .map(|t| ParamType::List(Box::new(t)))
                .map_err(|_| ParamTypeError(s.to_string()));
        }

        match s {
            "string" => Ok(ParamType::String),
            "bool" => Ok(ParamType::Bool),
            "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16"
            | "uint32" | "uint64" | "byte" | "rune" => Ok(ParamType::Int),
            "float32" | "float64" => Ok(ParamType::Float),
            _ if is_identifier(s) => Ok(ParamType::Id(s.to_string())),
            _ => Err(ParamTypeError(s.to_string())),
        }
    }
}

/// Letters first, then letters or digits. Mirrors what the backend accepts as a type name.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

impl TryFrom<String> for ParamType {
    type Error = ParamTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ParamType> for String {
    fn from(value: ParamType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::String => write!(f, "string"),
            ParamType::Bool => write!(f, "bool"),
            ParamType::Int => write!(f, "int"),
            ParamType::Float => write!(f, "float64"),
            ParamType::Id(name) => write!(f, "{name}"),
            ParamType::List(inner) => write!(f, "[]{inner}"),
        }
    }
}

impl ParamType {
    /// Initial value for a freshly created form.
    pub fn default_value(&self) -> Value {
        match self {
            ParamType::String => Value::String(String::new()),
            ParamType::Bool => Value::Bool(false),
            ParamType::Int | ParamType::Id(_) => Value::from(0),
            ParamType::Float => Value::from(0.0),
            ParamType::List(_) => Value::Array(Vec::new()),
        }
    }

    /// Parse text typed by the user into a value of this type.
    ///
    /// Lists are comma separated; blank elements are skipped, so an empty
    /// draft is an empty list.
    pub fn parse_input(&self, text: &str) -> Result<Value, String> {
        match self {
            ParamType::String => Ok(Value::String(text.to_string())),
            ParamType::Bool => match text.trim() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                other => Err(format!("expected true or false, got {other:?}")),
            },
            ParamType::Int => {
                let text = text.trim();
                // uint64 values past i64::MAX still fit in a JSON number
                text.parse::<i64>()
                    .map(Value::from)
                    .or_else(|_| text.parse::<u64>().map(Value::from))
                    .map_err(|e| format!("invalid integer: {e}"))
            }
            ParamType::Id(name) => text
                .trim()
                .parse::<u64>()
                .map(Value::from)
                .map_err(|e| format!("invalid {name} id: {e}")),
            ParamType::Float => {
                let parsed = text
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| format!("invalid number: {e}"))?;
                serde_json::Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(|| "number must be finite".to_string())
            }
            ParamType::List(inner) => text
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| inner.parse_input(part))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }

    /// Render a value back into editable text. Inverse of `parse_input` for well-typed values.
    pub fn format_value(&self, value: &Value) -> String {
        match (self, value) {
            (ParamType::List(inner), Value::Array(items)) => items
                .iter()
                .map(|item| inner.format_value(item))
                .collect::<Vec<_>>()
                .join(", "),
            (_, Value::String(s)) => s.clone(),
            (_, Value::Null) => String::new(),
            (_, other) => other.to_string(),
        }
    }
}

/// Parameters of one action, in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionSchema {
    pub params: BTreeMap<String, ParamType>,
}

impl<'de> Deserialize<'de> for ActionSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `ping:` with no body is a parameterless action
        let params = Option::<BTreeMap<String, ParamType>>::deserialize(deserializer)?
            .unwrap_or_default();
        Ok(Self { params })
    }
}

impl ActionSchema {
    pub fn new(params: impl IntoIterator<Item = (String, ParamType)>) -> Self {
        Self {
            params: params.into_iter().collect(),
        }
    }

    /// Derive the initial form state: one default per declared param.
    pub fn default_value(&self) -> FormState {
        self.params
            .iter()
            .map(|(name, ty)| (name.clone(), ty.default_value()))
            .collect()
    }

    pub fn param(&self, name: &str) -> Option<&ParamType> {
        self.params.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// The part of the backend configuration the inspector cares about.
///
/// Everything except `actions` (e.g. the `state` section) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsConfig {
    #[serde(default)]
    pub actions: BTreeMap<String, ActionSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_builtin_types() {
        assert_eq!("string".parse(), Ok(ParamType::String));
        assert_eq!("bool".parse(), Ok(ParamType::Bool));
        assert_eq!("int64".parse(), Ok(ParamType::Int));
        assert_eq!("uint8".parse(), Ok(ParamType::Int));
        assert_eq!("float64".parse(), Ok(ParamType::Float));
    }

    #[test]
    fn test_parse_state_reference_as_id() {
        assert_eq!("player".parse(), Ok(ParamType::Id("player".into())));
        assert_eq!("zone2".parse(), Ok(ParamType::Id("zone2".into())));
    }

    #[test]
    fn test_parse_slices() {
        assert_eq!(
            "[]item".parse(),
            Ok(ParamType::List(Box::new(ParamType::Id("item".into()))))
        );
        assert_eq!(
            "[]string".parse(),
            Ok(ParamType::List(Box::new(ParamType::String)))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ParamType>().is_err());
        assert!("[]".parse::<ParamType>().is_err());
        assert!("map[string]int".parse::<ParamType>().is_err());
        assert!("9lives".parse::<ParamType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for s in ["string", "bool", "int", "float64", "player", "[]item", "[][]int"] {
            let ty: ParamType = s.parse().unwrap();
            assert_eq!(ty.to_string(), s);
        }
    }

    #[test]
    fn test_default_value_per_type() {
        let schema = ActionSchema::new([
            ("name".to_string(), ParamType::String),
            ("active".to_string(), ParamType::Bool),
            ("count".to_string(), ParamType::Int),
            ("speed".to_string(), ParamType::Float),
            ("player".to_string(), ParamType::Id("player".into())),
            ("items".to_string(), ParamType::List(Box::new(ParamType::Int))),
        ]);
        let state = schema.default_value();
        assert_eq!(
            Value::Object(state),
            json!({
                "name": "",
                "active": false,
                "count": 0,
                "speed": 0.0,
                "player": 0,
                "items": []
            })
        );
    }

    #[test]
    fn test_default_value_of_empty_schema_is_empty_object() {
        let state = ActionSchema::default().default_value();
        assert!(state.is_empty());
        assert_eq!(serde_json::to_string(&state).unwrap(), "{}");
    }

    #[test]
    fn test_parse_input_numbers() {
        assert_eq!(ParamType::Int.parse_input("42"), Ok(json!(42)));
        assert_eq!(ParamType::Int.parse_input(" -7 "), Ok(json!(-7)));
        assert!(ParamType::Int.parse_input("").is_err());
        assert!(ParamType::Int.parse_input("4.5").is_err());
        let uint64: ParamType = "uint64".parse().unwrap();
        assert_eq!(
            uint64.parse_input("18446744073709551615"),
            Ok(json!(u64::MAX))
        );
        assert!(uint64.parse_input("18446744073709551616").is_err());
        assert_eq!(ParamType::Float.parse_input("1.5"), Ok(json!(1.5)));
        assert!(ParamType::Float.parse_input("NaN").is_err());
        assert!(ParamType::Id("player".into()).parse_input("-1").is_err());
    }

    #[test]
    fn test_parse_input_list() {
        let ty = ParamType::List(Box::new(ParamType::Int));
        assert_eq!(ty.parse_input("1, 2,3"), Ok(json!([1, 2, 3])));
        assert_eq!(ty.parse_input(""), Ok(json!([])));
        assert_eq!(ty.parse_input("1,,2,"), Ok(json!([1, 2])));
        assert!(ty.parse_input("1, x").is_err());
    }

    #[test]
    fn test_format_value_is_editable_text() {
        assert_eq!(ParamType::String.format_value(&json!("hi")), "hi");
        assert_eq!(ParamType::Int.format_value(&json!(42)), "42");
        let list = ParamType::List(Box::new(ParamType::String));
        assert_eq!(list.format_value(&json!(["a", "b"])), "a, b");
    }

    #[test]
    fn test_actions_config_from_yaml() {
        let yaml = r#"
state:
  player:
    items: "[]item"
actions:
  movePlayer:
    changeX: float64
    player: player
  ping:
"#;
        let config: ActionsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.actions.len(), 2);
        assert!(config.actions["ping"].is_empty());
        assert_eq!(
            config.actions["movePlayer"].param("player"),
            Some(&ParamType::Id("player".into()))
        );
    }

    #[test]
    fn test_actions_config_rejects_bad_type() {
        let json = r#"{"actions": {"broken": {"x": "map[int]int"}}}"#;
        assert!(serde_json::from_str::<ActionsConfig>(json).is_err());
    }
}
