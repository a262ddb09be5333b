use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Prefix that marked output ports in documents written before directions were tagged.
pub const LEGACY_OUTPUT_PREFIX: &str = "output";

/// Which side of a node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
}

impl PortDirection {
    /// Direction implied by a bare property name: `output*` is an output port, anything
    /// else is an input. Only used when migrating untagged properties.
    pub fn from_legacy_name(name: &str) -> Self {
        if name.starts_with(LEGACY_OUTPUT_PREFIX) {
            PortDirection::Output
        } else {
            PortDirection::Input
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::Input => write!(f, "input"),
            PortDirection::Output => write!(f, "output"),
        }
    }
}

/// A named node property. Every property is also a port in its `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: Value,
    pub direction: PortDirection,
}

impl Property {
    pub fn input(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            direction: PortDirection::Input,
        }
    }

    pub fn output(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            direction: PortDirection::Output,
        }
    }

    /// Builds a property from an untagged value, deriving the direction from the name.
    pub fn migrated(name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        let direction = PortDirection::from_legacy_name(&name);
        Self {
            name,
            value,
            direction,
        }
    }

    fn from_document_entry(name: String, entry: Value) -> Self {
        match TaggedEntry::parse(&entry) {
            Some((direction, value)) => Self {
                name,
                value,
                direction,
            },
            None => Self::migrated(name, entry),
        }
    }
}

/// The on-disk shape of a tagged property: `{ "direction": "output", "value": ... }`.
#[derive(Serialize)]
struct TaggedEntry<'a> {
    direction: PortDirection,
    value: &'a Value,
}

impl TaggedEntry<'_> {
    fn parse(entry: &Value) -> Option<(PortDirection, Value)> {
        let obj = entry.as_object()?;
        if obj.len() != 2 {
            return None;
        }
        let direction = match obj.get("direction")?.as_str()? {
            "input" => PortDirection::Input,
            "output" => PortDirection::Output,
            _ => return None,
        };
        Some((direction, obj.get("value")?.clone()))
    }
}

/// Ordered property collection of a node. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    entries: Vec<Property>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries.iter().find(|p| p.name == name)
    }

    /// Position of `name` in display order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|p| p.name == name)
    }

    /// Inserts a property, replacing an existing one of the same name in place.
    pub fn insert(&mut self, property: Property) {
        match self.entries.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.entries.push(property),
        }
    }

    /// Inserts an untagged value; the direction comes from the legacy name rule.
    pub fn insert_value(&mut self, name: impl Into<String>, value: Value) {
        self.insert(Property::migrated(name, value));
    }

    pub fn remove(&mut self, name: &str) -> Option<Property> {
        let idx = self.index_of(name)?;
        Some(self.entries.remove(idx))
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Property> {
        self.entries
            .iter()
            .filter(|p| p.direction == PortDirection::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Property> {
        self.entries
            .iter()
            .filter(|p| p.direction == PortDirection::Output)
    }
}

impl FromIterator<Property> for Properties {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut props = Properties::new();
        for p in iter {
            props.insert(p);
        }
        props
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for p in &self.entries {
            map.serialize_entry(
                &p.name,
                &TaggedEntry {
                    direction: p.direction,
                    value: &p.value,
                },
            )?;
        }
        map.end()
    }
}

struct PropertiesVisitor;

impl<'de> Visitor<'de> for PropertiesVisitor {
    type Value = Properties;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of property names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Properties, A::Error> {
        let mut props = Properties::new();
        while let Some((name, entry)) = access.next_entry::<String, Value>()? {
            props.insert(Property::from_document_entry(name, entry));
        }
        Ok(props)
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PropertiesVisitor)
    }
}
