use indexmap::IndexMap;

/// Name to address mapping, kept in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    labels: IndexMap<String, u16>,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            labels: IndexMap::new(),
        }
    }

    /// Inserts or overwrites, returning the previous address.
    pub fn add(&mut self, key: String, value: u16) -> Option<u16> {
        self.labels.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<u16> {
        self.labels.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

impl Extend<(String, u16)> for Labels {
    fn extend<T: IntoIterator<Item = (String, u16)>>(&mut self, iter: T) {
        self.labels.extend(iter);
    }
}

impl IntoIterator for Labels {
    type Item = (String, u16);
    type IntoIter = indexmap::map::IntoIter<String, u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}
