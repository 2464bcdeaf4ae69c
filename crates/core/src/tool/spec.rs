use std::fmt::{self, Display};

use schemars::schema_for;
use serde_json::{Map, Value};

use super::{Error, Payload, Tool};

/// The semantic type of a parameter or a result field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticType {
    /// A string.
    String,
    /// Any number, integral or not.
    Number,
    /// An integral number, optionally bounded (inclusive).
    Integer {
        /// The smallest accepted value, if any.
        minimum: Option<i128>,
        /// The largest accepted value, if any.
        maximum: Option<i128>,
    },
    /// A boolean.
    Boolean,
    /// A string restricted to the listed values.
    Enum(Vec<String>),
    /// A sequence whose elements all have the given type.
    Array(Box<SemanticType>),
    /// A nested object. Its fields are not checked.
    Object,
    /// Anything, including `null`.
    Any,
}

impl SemanticType {
    /// Derives the semantic type from a JSON schema produced by `schemars`.
    ///
    /// `defs` is the `$defs` table of the root schema, used to resolve
    /// references. Schemas that can't be mapped become [`SemanticType::Any`].
    fn from_schema(schema: &Value, defs: Option<&Map<String, Value>>) -> Self {
        let Some(schema) = schema.as_object() else {
            return Self::Any;
        };

        if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
            let resolved = reference
                .strip_prefix("#/$defs/")
                .and_then(|name| defs?.get(name));
            return match resolved {
                Some(resolved) => Self::from_schema(resolved, defs),
                None => Self::Any,
            };
        }

        if let Some(values) = schema.get("enum").and_then(Value::as_array) {
            return Self::Enum(
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect(),
            );
        }

        // Documented unit variants come out as a `oneOf` of consts,
        // and `Option<T>` of a referenced type as `anyOf` with `null`.
        if let Some(variants) = schema.get("oneOf").and_then(Value::as_array) {
            let consts: Option<Vec<String>> = variants
                .iter()
                .map(|v| {
                    let single = match v.get("enum").and_then(Value::as_array) {
                        Some(values) if values.len() == 1 => values.first(),
                        _ => None,
                    };
                    v.get("const").or(single)?.as_str().map(ToOwned::to_owned)
                })
                .collect();
            return consts.map(Self::Enum).unwrap_or(Self::Any);
        }
        for key in ["anyOf", "allOf"] {
            if let Some(variants) = schema.get(key).and_then(Value::as_array) {
                let mut non_null = variants.iter().filter(|v| !is_null_schema(v));
                return match (non_null.next(), non_null.next()) {
                    (Some(only), None) => Self::from_schema(only, defs),
                    _ => Self::Any,
                };
            }
        }

        let ty = match schema.get("type") {
            Some(Value::String(ty)) => Some(ty.as_str()),
            Some(Value::Array(types)) => types
                .iter()
                .filter_map(Value::as_str)
                .find(|ty| *ty != "null"),
            _ => None,
        };
        match ty {
            Some("string") => Self::String,
            Some("number") => Self::Number,
            Some("integer") => {
                let (format_min, format_max) = schema
                    .get("format")
                    .and_then(Value::as_str)
                    .map(integer_format_bounds)
                    .unwrap_or_default();
                Self::Integer {
                    minimum: schema
                        .get("minimum")
                        .and_then(as_integer_bound)
                        .or(format_min),
                    maximum: schema
                        .get("maximum")
                        .and_then(as_integer_bound)
                        .or(format_max),
                }
            }
            Some("boolean") => Self::Boolean,
            Some("object") => Self::Object,
            Some("array") => {
                let item = schema
                    .get("items")
                    .map(|item| Self::from_schema(item, defs))
                    .unwrap_or(Self::Any);
                Self::Array(Box::new(item))
            }
            _ => Self::Any,
        }
    }

    /// Checks that `value` is compatible with this type.
    ///
    /// On mismatch, returns a message naming `path` (or the element of it
    /// that failed, for arrays).
    pub fn check(&self, value: &Value, path: &str) -> Result<(), String> {
        let compatible = match (self, value) {
            (Self::Any, _) => true,
            (Self::String, Value::String(_)) => true,
            (Self::Number, Value::Number(_)) => true,
            (Self::Integer { minimum, maximum }, Value::Number(n)) => {
                let value = n
                    .as_i64()
                    .map(i128::from)
                    .or_else(|| n.as_u64().map(i128::from));
                value.is_some_and(|value| {
                    minimum.is_none_or(|min| value >= min)
                        && maximum.is_none_or(|max| value <= max)
                })
            }
            (Self::Boolean, Value::Bool(_)) => true,
            (Self::Object, Value::Object(_)) => true,
            (Self::Enum(allowed), Value::String(s)) => {
                allowed.iter().any(|a| a == s)
            }
            (Self::Array(item), Value::Array(values)) => {
                for (index, value) in values.iter().enumerate() {
                    item.check(value, &format!("{path}[{index}]"))?;
                }
                true
            }
            _ => false,
        };
        if compatible {
            Ok(())
        } else {
            Err(format!(
                "`{path}` expects {self}, got {}",
                describe_value(value)
            ))
        }
    }
}

impl Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Integer { minimum, maximum } => match (minimum, maximum) {
                (Some(min), Some(max)) => write!(f, "integer in [{min}, {max}]"),
                (Some(min), None) => write!(f, "integer >= {min}"),
                (None, Some(max)) => write!(f, "integer <= {max}"),
                (None, None) => write!(f, "integer"),
            },
            Self::Boolean => write!(f, "boolean"),
            Self::Enum(allowed) => write!(f, "one of [{}]", allowed.join(", ")),
            Self::Array(item) => write!(f, "array of {item}"),
            Self::Object => write!(f, "object"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// Bounds implied by the `format` schemars gives to fixed-width integers.
fn integer_format_bounds(format: &str) -> (Option<i128>, Option<i128>) {
    match format {
        "uint8" => (Some(0), Some(u8::MAX.into())),
        "uint16" => (Some(0), Some(u16::MAX.into())),
        "uint32" => (Some(0), Some(u32::MAX.into())),
        "uint64" | "uint" => (Some(0), Some(u64::MAX.into())),
        "int8" => (Some(i8::MIN.into()), Some(i8::MAX.into())),
        "int16" => (Some(i16::MIN.into()), Some(i16::MAX.into())),
        "int32" => (Some(i32::MIN.into()), Some(i32::MAX.into())),
        "int64" | "int" => (Some(i64::MIN.into()), Some(i64::MAX.into())),
        _ => (None, None),
    }
}

fn as_integer_bound(bound: &Value) -> Option<i128> {
    match bound {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .or_else(|| n.as_f64().map(|f| f as i128)),
        _ => None,
    }
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(_) => "boolean".to_owned(),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_owned(),
        Value::Object(_) => "object".to_owned(),
    }
}

/// Declaration of one input parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpec {
    /// Name of the parameter.
    pub name: String,
    /// Declared type.
    pub ty: SemanticType,
    /// Whether callers must supply the parameter.
    pub required: bool,
    /// Human-readable description, if any.
    pub description: Option<String>,
    /// Value used when the parameter is omitted, if any.
    pub default: Option<Value>,
}

/// Declaration of one result field.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputField {
    /// Name of the field.
    pub name: String,
    /// Declared type.
    pub ty: SemanticType,
    /// Whether the field is always present in the payload.
    pub required: bool,
}

/// The declared shape of a tool: its name, description, input and output
/// schemas.
///
/// A spec is derived once from the tool's input and output types and
/// never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolSpec {
    name: String,
    description: String,
    parameters: Vec<ParameterSpec>,
    outputs: Vec<OutputField>,
    parameters_schema: Value,
}

impl ToolSpec {
    /// Derives the spec of a tool from its input and output types.
    pub fn of<T: Tool>(tool: &T) -> Self {
        Self::from_schemas(
            tool.name(),
            tool.description(),
            schema_for!(T::Input).to_value(),
            schema_for!(T::Output).to_value(),
        )
    }

    /// Builds a spec from raw input and output JSON schemas.
    ///
    /// Both schemas are expected to describe objects. Property order is
    /// kept as the parameter order.
    pub fn from_schemas<N: Into<String>, D: Into<String>>(
        name: N,
        description: D,
        input_schema: Value,
        output_schema: Value,
    ) -> Self {
        let parameters = object_fields(&input_schema)
            .map(|field| ParameterSpec {
                name: field.name.to_owned(),
                ty: field.ty,
                required: field.required,
                description: field
                    .schema
                    .get("description")
                    .and_then(Value::as_str)
                    .map(ToOwned::to_owned),
                default: field.schema.get("default").cloned(),
            })
            .collect();
        let outputs = object_fields(&output_schema)
            .map(|field| OutputField {
                name: field.name.to_owned(),
                ty: field.ty,
                required: field.required,
            })
            .collect();

        Self {
            name: name.into(),
            description: description.into().trim().to_owned(),
            parameters,
            outputs,
            parameters_schema: input_schema,
        }
    }

    /// Returns the name of the tool.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the natural-language description of the tool.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the input parameters in declaration order.
    #[inline]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Returns the result fields in declaration order.
    #[inline]
    pub fn outputs(&self) -> &[OutputField] {
        &self.outputs
    }

    /// Returns the input schema as a JSON schema object, suitable for
    /// advertising the tool to a model.
    #[inline]
    pub fn parameters_json_schema(&self) -> &Value {
        &self.parameters_schema
    }

    /// Validates caller-supplied arguments against the input schema.
    pub fn validate_arguments(&self, arguments: &Payload) -> Result<(), Error> {
        for name in arguments.keys() {
            if !self.parameters.iter().any(|p| &p.name == name) {
                return Err(Error::invalid_input()
                    .with_reason(format!("unknown parameter `{name}`")));
            }
        }
        for param in &self.parameters {
            match arguments.get(&param.name) {
                None | Some(Value::Null) if param.required => {
                    return Err(Error::invalid_input().with_reason(format!(
                        "missing required parameter `{}`",
                        param.name
                    )));
                }
                None | Some(Value::Null) => {}
                Some(value) => param
                    .ty
                    .check(value, &param.name)
                    .map_err(|reason| Error::invalid_input().with_reason(reason))?,
            }
        }
        Ok(())
    }

    /// Validates caller-supplied arguments and returns them ready to be
    /// decoded.
    ///
    /// Optional parameters given as `null` are dropped, so they take their
    /// default value like omitted ones.
    pub fn prepare_arguments(&self, arguments: &Payload) -> Result<Payload, Error> {
        self.validate_arguments(arguments)?;
        Ok(arguments
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect())
    }

    /// Validates a tool's payload against the output schema.
    pub fn validate_output(&self, payload: &Payload) -> Result<(), Error> {
        for name in payload.keys() {
            if !self.outputs.iter().any(|f| &f.name == name) {
                return Err(Error::execution_failed().with_reason(format!(
                    "`{}` returned undeclared field `{name}`",
                    self.name
                )));
            }
        }
        for field in &self.outputs {
            match payload.get(&field.name) {
                None if field.required => {
                    return Err(Error::execution_failed().with_reason(format!(
                        "`{}` did not return field `{}`",
                        self.name, field.name
                    )));
                }
                None => {}
                Some(value) => field.ty.check(value, &field.name).map_err(|reason| {
                    Error::execution_failed()
                        .with_reason(format!("`{}` returned {reason}", self.name))
                })?,
            }
        }
        Ok(())
    }
}

struct ObjectField<'a> {
    name: &'a str,
    schema: &'a Value,
    ty: SemanticType,
    required: bool,
}

fn object_fields(schema: &Value) -> impl Iterator<Item = ObjectField<'_>> {
    let defs = schema.get("$defs").and_then(Value::as_object);
    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    schema
        .get("properties")
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
        .map(move |(name, field_schema)| ObjectField {
            name: name.as_str(),
            schema: field_schema,
            ty: SemanticType::from_schema(field_schema, defs),
            required: required
                .iter()
                .any(|r| r.as_str() == Some(name.as_str())),
        })
}
