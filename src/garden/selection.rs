//! Ordered, duplicate-free list of chosen plant names

/// The plants a user has picked, in order of first addition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    /// Create an empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Append `name` unless it is already present
    ///
    /// Returns `true` if the name was added.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove every entry equal to `name`
    ///
    /// Returns `true` if anything was removed. Removing an absent name
    /// leaves the selection unchanged.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        self.names.len() != before
    }

    /// Whether `name` is selected
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Selected names in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Iterate selected names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Name at position `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of selected plants
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
