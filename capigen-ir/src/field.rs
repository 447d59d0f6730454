//! Field definitions shared by structures, unions and parameter lists.

use crate::name::Name;

/// Element count qualifier of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Count {
    /// Fixed-size inline array.
    Fixed(u32),
    /// Length given at runtime by the named sibling field.
    Dynamic(String),
}

/// Member of a structure, union, function or callback parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, never prefixed.
    pub name: Name,
    /// Id of the referenced type entry.
    pub type_id: String,
    /// Passed by shared reference.
    pub by_ref: bool,
    /// Passed by mutable reference.
    pub by_mut: bool,
    /// Element count, if any.
    pub count: Option<Count>,
}

impl Field {
    /// Creates a plain by-value field.
    #[must_use]
    pub fn new(name: &str, type_id: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            type_id: type_id.into(),
            by_ref: false,
            by_mut: false,
            count: None,
        }
    }

    /// Marks the field as passed by shared reference.
    #[must_use]
    pub fn by_ref(mut self) -> Self {
        self.by_ref = true;
        self
    }

    /// Marks the field as passed by mutable reference.
    #[must_use]
    pub fn by_mut(mut self) -> Self {
        self.by_mut = true;
        self
    }

    /// Sets the element count.
    #[must_use]
    pub fn with_count(mut self, count: Count) -> Self {
        self.count = Some(count);
        self
    }

    /// Returns true if the length is carried by another field.
    #[must_use]
    pub fn is_dyn_array(&self) -> bool {
        matches!(self.count, Some(Count::Dynamic(_)))
    }

    /// Returns true if the field is projected as a raw pointer.
    #[must_use]
    pub fn is_ptr(&self) -> bool {
        self.by_ref || self.by_mut || self.is_dyn_array()
    }

    /// Returns the fixed element count, if any.
    #[must_use]
    pub fn fixed_count(&self) -> Option<u32> {
        match self.count {
            Some(Count::Fixed(n)) => Some(n),
            _ => None,
        }
    }
}
