use std::str::FromStr;

use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// String parameters for generators and solvers.
///
/// Values are parsed lazily by the algorithm that reads them, so unknown keys
/// are simply ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.map.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(|s| s.parse())
    }

    pub fn parsed_or<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.parsed(key) {
            None | Some(Err(_)) => default,
            Some(Ok(v)) => v,
        }
    }

    pub fn parsed_or_warn<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.parsed(key) {
            None => default,
            Some(Ok(v)) => v,
            Some(Err(_)) => {
                log::warn!("Invalid value for parameter '{}', using default value", key);
                default
            }
        }
    }

    /// Like [`parsed_or_warn`](Self::parsed_or_warn), but a missing or invalid
    /// value yields `None`.
    pub fn optional<T: FromStr>(&self, key: &str) -> Option<T> {
        match self.parsed(key)? {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("Invalid value for parameter '{}', ignoring it", key);
                None
            }
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::Params;

    #[test]
    fn parsing() {
        let params: Params = [("max_steps", "100"), ("seed", "abc")].into_iter().collect();

        assert_eq!(params.parsed_or("max_steps", 5usize), 100);
        assert_eq!(params.parsed_or("seed", 7u64), 7);
        assert_eq!(params.parsed_or_warn("missing", 3u8), 3);
        assert_eq!(params.optional::<usize>("max_steps"), Some(100));
        assert_eq!(params.optional::<u64>("seed"), None);
        assert_eq!(params.optional::<u64>("missing"), None);
    }

    #[test]
    fn builder() {
        let params = Params::new().with("seed", 42).with("max_steps", 10);
        assert_eq!(params.get("seed"), Some("42"));
        assert_eq!(params.parsed_or("max_steps", 0usize), 10);
    }
}
