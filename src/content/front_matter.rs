use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// The metadata keys a post cares about. Anything else in the front-matter
/// is ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    Date,
}

impl Field {
    /// Keys are matched case-sensitively.
    pub fn from_key(key: &str) -> Option<Field> {
        match key {
            "id" => Some(Field::Id),
            "title" => Some(Field::Title),
            "date" => Some(Field::Date),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Captured front-matter values. The first value seen for a field wins and
/// later ones are refused.
#[derive(Debug, Default)]
pub struct FrontMatter {
    fields: HashMap<Field, String>,
}

impl FrontMatter {
    /// Returns `false` when `field` already holds a value.
    pub fn capture(&mut self, field: Field, value: &str) -> bool {
        match self.fields.entry(field) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                true
            }
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn take(&mut self, field: Field) -> Option<String> {
        self.fields.remove(&field)
    }
}
