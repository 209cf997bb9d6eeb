use std::hash::Hash;

use hashbrown::{Equivalent, HashMap};

/// Named collection of interchangeable items, generators or solvers, with an
/// optional fallback.
pub struct Registry<T, K = String> {
    items: HashMap<K, T>,
    default: Option<T>,
}

impl<T, K> Registry<T, K> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            default: None,
        }
    }

    pub fn with_default(default: T) -> Self {
        Self {
            items: HashMap::new(),
            default: Some(default),
        }
    }

    pub fn get_default(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T, K> Default for Registry<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Registry<T, K>
where
    K: Hash + Eq,
{
    pub fn register(&mut self, key: K, item: T) {
        self.items.insert(key, item);
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&T>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.items.get(k)
    }

    /// Looks up `k`, falling back to the default item.
    pub fn get_or_default<Q>(&self, k: &Q) -> Option<&T>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.get(k).or(self.default.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }
}
