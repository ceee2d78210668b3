//! Character records as they appear in the dataset.
//!
//! The dataset is loosely shaped: an entry is usually an object, sometimes a bare
//! name, and older exports contain stray nulls or numbers. [`Character`] keeps all
//! three shapes and resolves labels and identities with a fixed precedence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Keys tried, in order, when resolving the display label of an object record.
const LABEL_KEYS: [&str; 3] = ["name", "title", "label"];

/// Shown on the detail page when a record has no (or an empty) description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// One dataset entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Character {
    /// A bare display name.
    Name(String),
    /// An object record (`id`, `name`, `modified`, `capacities`, ...).
    Entry(Map<String, Value>),
    /// Anything else found in the dataset (null, numbers, booleans, arrays).
    Other(Value),
}

/// Identifier used to look a record up. Numbers and strings that stringify the
/// same denote the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterId {
    Number(i64),
    Text(String),
}

impl CharacterId {
    /// String form used for every comparison.
    pub fn as_key(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CharacterId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CharacterId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Renders a JSON value the way it reads in text: strings unquoted, everything else as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `Some(text)` for values that count as set: non-empty strings, non-zero numbers, `true`,
/// objects and arrays.
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(value_text(other)),
    }
}

impl Character {
    /// Wraps a JSON value in the matching variant.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Name(s),
            Value::Object(map) => Self::Entry(map),
            other => Self::Other(other),
        }
    }

    /// Display label: `name`, else `title`, else `label`, else a JSON dump of the object.
    /// A bare string is its own label; non-record values have an empty label.
    pub fn label(&self) -> String {
        match self {
            Self::Name(s) => s.clone(),
            Self::Entry(map) => LABEL_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(present_text))
                .unwrap_or_else(|| Value::Object(map.clone()).to_string()),
            Self::Other(_) => String::new(),
        }
    }

    /// Text shown for the record in lists. Same as [`label`](Self::label), except that
    /// non-record values show their JSON text (`null`, `42`) instead of nothing.
    pub fn display_label(&self) -> String {
        match self {
            Self::Other(value) => value.to_string(),
            _ => self.label(),
        }
    }

    /// Link target id for list rendering: the `id` field, when set. Only ids that
    /// [`matches`](Self::matches) resolves are linked.
    pub fn link_id(&self) -> Option<String> {
        self.field("id").and_then(present_text)
    }

    /// True when this record answers to `id`.
    ///
    /// Strings match by equality. Objects match on `id` when the field exists, else on
    /// `name`. Records with neither never match.
    pub fn matches(&self, id: &CharacterId) -> bool {
        let key = id.as_key();
        match self {
            Self::Name(s) => *s == key,
            Self::Entry(map) => match (map.get("id"), map.get("name")) {
                (Some(own), _) => value_text(own) == key,
                (None, Some(name)) => value_text(name) == key,
                (None, None) => false,
            },
            Self::Other(_) => false,
        }
    }

    fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Entry(map) => map.get(key),
            _ => None,
        }
    }

    /// The `id` field as text, if the record has one.
    pub fn id(&self) -> Option<String> {
        self.field("id").filter(|v| !v.is_null()).map(value_text)
    }

    /// Last-modified timestamp, kept as the dataset wrote it.
    pub fn modified(&self) -> Option<String> {
        self.field("modified").and_then(present_text)
    }

    /// Description, or [`NO_DESCRIPTION`] when missing or empty.
    pub fn description(&self) -> String {
        self.field("description")
            .and_then(present_text)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }

    /// `{path}.{extension}` from the `thumbnail` object, when both parts are set.
    pub fn thumbnail_url(&self) -> Option<String> {
        let thumb = self.field("thumbnail")?.as_object()?;
        let path = thumb.get("path").and_then(present_text)?;
        let extension = thumb.get("extension").and_then(present_text)?;
        Some(format!("{}.{}", path, extension))
    }

    /// Attribute scores, when the record carries a `capacities` object.
    pub fn capacities(&self) -> Option<Capacities> {
        self.field("capacities").and_then(Capacities::from_value)
    }
}

/// Trait vocabulary for attribute scores, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Force = 0,
    Intelligence = 1,
    Energy = 2,
    Speed = 3,
    Durability = 4,
    Fighting = 5,
}

impl Attribute {
    /// Key used in the dataset's `capacities` object.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Force => "force",
            Self::Intelligence => "intelligence",
            Self::Energy => "energy",
            Self::Speed => "speed",
            Self::Durability => "durability",
            Self::Fighting => "fighting",
        }
    }

    /// Human-readable name used in chart legends.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Force => "Force",
            Self::Intelligence => "Intelligence",
            Self::Energy => "Energy",
            Self::Speed => "Speed",
            Self::Durability => "Durability",
            Self::Fighting => "Fighting",
        }
    }

    /// All attributes in display order.
    pub fn all() -> [Self; 6] {
        [
            Self::Force,
            Self::Intelligence,
            Self::Energy,
            Self::Speed,
            Self::Durability,
            Self::Fighting,
        ]
    }
}

/// Per-character attribute scores. Unset attributes stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Capacities {
    scores: [Option<f64>; 6],
}

impl Capacities {
    /// Reads numeric scores from a `capacities` object. Non-objects yield `None`;
    /// non-numeric scores are treated as unset.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let mut caps = Self::default();
        for attr in Attribute::all() {
            caps.scores[attr as usize] = map.get(attr.key()).and_then(Value::as_f64);
        }
        Some(caps)
    }

    pub fn get(&self, attr: Attribute) -> Option<f64> {
        self.scores[attr as usize]
    }

    /// Set scores in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        Attribute::all()
            .into_iter()
            .filter_map(|attr| self.get(attr).map(|v| (attr, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_follows_name_title_label_precedence() {
        let c = Character::from_value(json!({ "name": "Thor", "title": "God", "label": "x" }));
        assert_eq!(c.label(), "Thor");
        let c = Character::from_value(json!({ "title": "TitleValue", "label": "x" }));
        assert_eq!(c.label(), "TitleValue");
        let c = Character::from_value(json!({ "label": "LabelValue" }));
        assert_eq!(c.label(), "LabelValue");
        let c = Character::from_value(json!({ "name": "", "title": "Fallback" }));
        assert_eq!(c.label(), "Fallback");
    }

    #[test]
    fn label_falls_back_to_json_dump_and_raw_string() {
        let c = Character::from_value(json!({ "modified": "2023-01-01" }));
        assert_eq!(c.label(), r#"{"modified":"2023-01-01"}"#);
        assert_eq!(Character::Name("StringHero".into()).label(), "StringHero");
        assert_eq!(Character::Other(Value::Null).label(), "");
    }

    #[test]
    fn numeric_and_string_ids_are_equivalent() {
        let alpha = Character::from_value(json!({ "id": 1, "name": "Alpha" }));
        assert!(alpha.matches(&CharacterId::from(1)));
        assert!(alpha.matches(&CharacterId::from("1")));
        assert!(!alpha.matches(&CharacterId::from("Alpha")));

        let charlie = Character::from_value(json!({ "id": "3", "name": "Charlie" }));
        assert!(charlie.matches(&CharacterId::from(3)));
    }

    #[test]
    fn name_is_used_only_without_id() {
        let named = Character::from_value(json!({ "name": "NameOnly" }));
        assert!(named.matches(&CharacterId::from("NameOnly")));
        assert!(Character::Name("StringHero".into()).matches(&CharacterId::from("StringHero")));
        assert!(!Character::from_value(json!({})).matches(&CharacterId::from("{}")));
        assert!(!Character::Other(json!(42)).matches(&CharacterId::from(42)));
    }

    #[test]
    fn link_id_only_uses_resolvable_ids() {
        let mongo = Character::from_value(json!({ "_id": "abc", "name": "Mongo" }));
        assert_eq!(mongo.link_id(), None);
        assert!(!mongo.matches(&CharacterId::from("abc")));

        let thor = Character::from_value(json!({ "id": 7, "name": "Thor" }));
        let id = thor.link_id().unwrap();
        assert!(thor.matches(&CharacterId::from(id)));

        assert_eq!(Character::from_value(json!({ "name": "NoId" })).link_id(), None);
        assert_eq!(Character::Name("Bare".into()).link_id(), None);
    }

    #[test]
    fn display_label_shows_non_record_values() {
        assert_eq!(Character::Other(Value::Null).display_label(), "null");
        assert_eq!(Character::Other(json!(42)).display_label(), "42");
        assert_eq!(Character::Other(json!(42)).label(), "");
        let thor = Character::from_value(json!({ "name": "Thor" }));
        assert_eq!(thor.display_label(), "Thor");
    }

    #[test]
    fn detail_fields() {
        let c = Character::from_value(json!({
            "id": 1,
            "name": "Thor",
            "description": "",
            "thumbnail": { "path": "http://img/thor", "extension": "jpg" },
        }));
        assert_eq!(c.description(), NO_DESCRIPTION);
        assert_eq!(c.thumbnail_url().as_deref(), Some("http://img/thor.jpg"));
        assert_eq!(c.modified(), None);
        assert_eq!(c.id().as_deref(), Some("1"));
    }

    #[test]
    fn capacities_keep_fixed_order_and_skip_unset() {
        let caps = Capacities::from_value(&json!({
            "fighting": 4, "force": 7, "speed": "fast", "energy": 6
        }))
        .unwrap();
        let got: Vec<_> = caps.iter().collect();
        assert_eq!(
            got,
            vec![(Attribute::Force, 7.0), (Attribute::Energy, 6.0), (Attribute::Fighting, 4.0)]
        );
        assert!(Capacities::from_value(&json!("none")).is_none());
    }

    #[test]
    fn deserializes_every_dataset_shape() {
        let records: Vec<Character> =
            serde_json::from_value(json!([null, "StringHero", { "name": "A" }, 42])).unwrap();
        assert!(matches!(records[0], Character::Other(Value::Null)));
        assert!(matches!(records[1], Character::Name(_)));
        assert!(matches!(records[2], Character::Entry(_)));
        assert!(matches!(records[3], Character::Other(_)));
    }
}
