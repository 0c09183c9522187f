// ============================================================================
// Validation Errors
// Field-keyed error map returned by order validation
// ============================================================================

use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeMap, Serializer};

/// User-facing messages, one per rule.
pub mod messages {
    pub const MISSING_AMOUNT: &str = "Please enter amount";
    pub const MISSING_PRICE: &str = "Please enter price";
    pub const MISSING_EXPIRATION: &str = "Please enter expire date";
    pub const ONLY_NUMBERS: &str = "Please only numbers";
    pub const NOT_POSITIVE: &str = "Must be greater than zero";
    pub const OUT_OF_RANGE: &str = "Number is out of range";
    pub const ORDER_TOO_SMALL: &str = "Order is too small :(";
    pub const ORDER_TOO_BIG: &str = "Order is too big, we can't process it :(";
    pub const INSUFFICIENT_BALANCE: &str = "You don't have the required amount";
}

/// Order form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Price,
    Amount,
    Expiration,
}

impl Field {
    /// Form field name as used by the order entry form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Amount => "amount",
            Field::Expiration => "exp",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from form field to a single error message.
///
/// An empty map means the input is valid. Inserting for a field that already
/// has a message replaces it, so the last rule to fire wins.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    entries: SmallVec<[(Field, &'static str); 3]>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field, message)),
        }
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in field order (price, amount, expiration).
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        let mut sorted: SmallVec<[(Field, &'static str); 3]> = self.entries.clone();
        sorted.sort_by_key(|(field, _)| *field);
        sorted.into_iter()
    }
}

impl PartialEq for ValidationErrors {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(field, message)| other.get(*field) == Some(*message))
    }
}

impl Eq for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(feature = "serde")]
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, message) in self.iter() {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}
