//! Result value data structures.
//!
//! - [`ResultValue`] - A computed formula value (scalar, composite, or error)
//! - [`Property`] - A named entry of a record
//! - [`ResultKind`] - The variant tag of a value, for inspection

use std::fmt;

/// A computed formula value.
///
/// Composite variants own their children outright, so every value is a tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultValue {
    None,
    Boolean(bool),
    Number(f64),
    String(String),
    /// An unevaluated function, carrying the identifiers it captures.
    Lambda { free_variables: Vec<String> },
    List(Vec<ResultValue>),
    /// Properties in insertion order. Names may repeat.
    Record(Vec<Property>),
    /// A failed evaluation. Rendered like any other value.
    Error { message: String },
}

/// A named entry of a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: ResultValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: ResultValue) -> Property {
        Property {
            name: name.into(),
            value,
        }
    }
}

/// The variant tag of a [`ResultValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    None,
    Boolean,
    Number,
    String,
    Lambda,
    List,
    Record,
    Error,
}

impl ResultKind {
    pub const ALL: [ResultKind; 8] = [
        ResultKind::None,
        ResultKind::Boolean,
        ResultKind::Number,
        ResultKind::String,
        ResultKind::Lambda,
        ResultKind::List,
        ResultKind::Record,
        ResultKind::Error,
    ];

    /// The class name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            ResultKind::None => "none",
            ResultKind::Boolean => "boolean",
            ResultKind::Number => "number",
            ResultKind::String => "string",
            ResultKind::Lambda => "lambda",
            ResultKind::List => "list",
            ResultKind::Record => "record",
            ResultKind::Error => "error",
        }
    }

    /// Look up a kind by its wire class name (exact match).
    pub fn from_name(name: &str) -> Option<ResultKind> {
        ResultKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn is_composite(self) -> bool {
        matches!(self, ResultKind::List | ResultKind::Record)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ResultValue {
    pub fn none() -> ResultValue {
        ResultValue::None
    }

    pub fn boolean(value: bool) -> ResultValue {
        ResultValue::Boolean(value)
    }

    pub fn number(value: f64) -> ResultValue {
        ResultValue::Number(value)
    }

    pub fn string(value: impl Into<String>) -> ResultValue {
        ResultValue::String(value.into())
    }

    pub fn lambda<I, S>(free_variables: I) -> ResultValue
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResultValue::Lambda {
            free_variables: free_variables.into_iter().map(Into::into).collect(),
        }
    }

    pub fn list(elements: impl IntoIterator<Item = ResultValue>) -> ResultValue {
        ResultValue::List(elements.into_iter().collect())
    }

    /// Build a record from `(name, value)` pairs, keeping their order.
    pub fn record<I, S>(properties: I) -> ResultValue
    where
        I: IntoIterator<Item = (S, ResultValue)>,
        S: Into<String>,
    {
        ResultValue::Record(
            properties
                .into_iter()
                .map(|(name, value)| Property::new(name, value))
                .collect(),
        )
    }

    pub fn error(message: impl Into<String>) -> ResultValue {
        ResultValue::Error {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            ResultValue::None => ResultKind::None,
            ResultValue::Boolean(_) => ResultKind::Boolean,
            ResultValue::Number(_) => ResultKind::Number,
            ResultValue::String(_) => ResultKind::String,
            ResultValue::Lambda { .. } => ResultKind::Lambda,
            ResultValue::List(_) => ResultKind::List,
            ResultValue::Record(_) => ResultKind::Record,
            ResultValue::Error { .. } => ResultKind::Error,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ResultValue::None)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultValue::Error { .. })
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ResultValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ResultValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResultValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn free_variables(&self) -> Option<&[String]> {
        match self {
            ResultValue::Lambda { free_variables } => Some(free_variables),
            _ => None,
        }
    }

    pub fn elements(&self) -> Option<&[ResultValue]> {
        match self {
            ResultValue::List(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn properties(&self) -> Option<&[Property]> {
        match self {
            ResultValue::Record(properties) => Some(properties),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResultValue::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Count the non-composite values in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            ResultValue::List(elements) => elements.iter().map(ResultValue::leaf_count).sum(),
            ResultValue::Record(properties) => {
                properties.iter().map(|p| p.value.leaf_count()).sum()
            }
            _ => 1,
        }
    }
}

impl From<bool> for ResultValue {
    fn from(value: bool) -> Self {
        ResultValue::Boolean(value)
    }
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        ResultValue::Number(value)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        ResultValue::String(value.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(value: String) -> Self {
        ResultValue::String(value)
    }
}

impl From<Vec<ResultValue>> for ResultValue {
    fn from(value: Vec<ResultValue>) -> Self {
        ResultValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ResultKind::ALL {
            assert_eq!(ResultKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ResultKind::from_name("Number"), None);
        assert_eq!(ResultKind::from_name("application"), None);
    }

    #[test]
    fn test_accessors_match_variant() {
        let v = ResultValue::lambda(["x", "y"]);
        assert_eq!(v.kind(), ResultKind::Lambda);
        assert_eq!(
            v.free_variables(),
            Some(&["x".to_string(), "y".to_string()][..])
        );
        assert_eq!(v.as_number(), None);
        assert_eq!(v.elements(), None);

        assert_eq!(ResultValue::number(2.5).as_number(), Some(2.5));
        assert_eq!(ResultValue::string("hi").as_str(), Some("hi"));
        assert_eq!(ResultValue::boolean(true).as_bool(), Some(true));
        assert_eq!(ResultValue::error("boom").error_message(), Some("boom"));
        assert!(ResultValue::error("boom").is_error());
        assert!(ResultValue::none().is_none());
    }

    #[test]
    fn test_record_keeps_order_and_duplicates() {
        let v = ResultValue::record([
            ("b", ResultValue::number(1.0)),
            ("a", ResultValue::number(2.0)),
            ("b", ResultValue::number(3.0)),
        ]);
        let names: Vec<&str> = v
            .properties()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(ResultValue::none().leaf_count(), 1);
        assert_eq!(ResultValue::list([]).leaf_count(), 0);
        let v = ResultValue::record([
            ("a", ResultValue::number(1.0)),
            (
                "b",
                ResultValue::list([ResultValue::string("x"), ResultValue::error("e")]),
            ),
        ]);
        assert_eq!(v.leaf_count(), 3);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(ResultValue::from(true), ResultValue::Boolean(true));
        assert_eq!(ResultValue::from(1.5), ResultValue::Number(1.5));
        assert_eq!(ResultValue::from("s"), ResultValue::String("s".into()));
        assert_eq!(
            ResultValue::from(vec![ResultValue::None]),
            ResultValue::List(vec![ResultValue::None])
        );
    }
}
