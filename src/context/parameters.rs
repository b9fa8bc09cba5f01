//! Multi-valued context parameters.

use std::collections::HashMap;

/// Mapping from parameter name to the ordered list of values the caller
/// supplies for it. Insertion order of names is irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters {
    values: HashMap<String, Vec<String>>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values of a parameter, replacing any previous ones.
    pub fn insert<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    /// Append one value to a parameter, creating it if needed.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K, I, V> FromIterator<(K, I)> for Parameters
where
    K: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut params = Parameters::new();
        for (name, values) in iter {
            params.insert(name, values);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_and_push_appends() {
        let mut params = Parameters::new();
        params.insert("Orgao", ["1"]);
        params.insert("Orgao", ["2"]);
        assert_eq!(params.get("Orgao"), Some(&["2".to_string()][..]));

        params.push("Orgao", "3");
        assert_eq!(params.get("Orgao").map(<[String]>::len), Some(2));
    }

    #[test]
    fn missing_parameter_is_none() {
        let params = Parameters::new();
        assert!(params.get("Finalidade").is_none());
        assert!(!params.contains("Finalidade"));
        assert!(params.is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let params: Parameters = [("Finalidade", vec!["3"]), ("Orgao", vec!["1", "2"])]
            .into_iter()
            .collect();
        assert_eq!(params.len(), 2);

        let mut keys: Vec<&str> = params.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["Finalidade", "Orgao"]);
    }
}
