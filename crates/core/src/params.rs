//! Parameter Set storage and serialization
//!
//! A `ParameterSet` is the only state a query builder carries besides its
//! transport handle. Keys keep their insertion order so the query string a
//! set renders to is stable across runs.

/// A scalar filter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{s}"),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::UInt(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $wide:ty => $($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

impl_from_int!(Int: i64 => i32, i64);
impl_from_int!(UInt: u64 => u32, u64);

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        ParamValue::UInt(value as u64)
    }
}

/// Ordered mapping of filter key to scalar value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    ///
    /// An existing key is overwritten in place and keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render every value as a string, in insertion order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }

    /// Serialize as a URL query string (`key=value&...`), percent-encoding both sides
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(&v.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterSet::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_appends_new_keys_in_order() {
        let mut params = ParameterSet::new();
        params.set("name", "Escher");
        params.set("country", "US");
        params.set("count", 50);

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "country", "count"]);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut params = ParameterSet::new();
        params.set("count", 10);
        params.set("city", "Chicago");
        params.set("count", 25);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("count"), Some(&ParamValue::Int(25)));
        assert_eq!(params.to_query_string(), "count=25&city=Chicago");
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut original = ParameterSet::new();
        original.set("country", "US");

        let mut copy = original.clone();
        copy.set("country", "CA");
        copy.set("city", "Toronto");

        assert_eq!(original.len(), 1);
        assert_eq!(original.get("country"), Some(&ParamValue::Str("US".into())));
    }

    #[test]
    fn test_query_string_encoding() {
        let params: ParameterSet = [("name", "Zach & Co"), ("city", "São Paulo")]
            .into_iter()
            .collect();

        assert_eq!(
            params.to_query_string(),
            "name=Zach%20%26%20Co&city=S%C3%A3o%20Paulo"
        );
    }

    #[test]
    fn test_scalar_rendering() {
        let mut params = ParameterSet::new();
        params.set("start_pos", 51usize);
        params.set("women_only", true);

        assert_eq!(
            params.to_pairs(),
            vec![
                ("start_pos".to_string(), "51".to_string()),
                ("women_only".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_set() {
        let params = ParameterSet::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
    }

    #[test]
    fn test_unsigned_values_do_not_wrap() {
        let mut params = ParameterSet::new();
        params.set("count", usize::MAX);
        params.set("start_pos", u64::MAX);
        params.set("year", -1i32);

        assert_eq!(params.get("count"), Some(&ParamValue::UInt(usize::MAX as u64)));
        assert_eq!(
            params.to_query_string(),
            format!("count={}&start_pos={}&year=-1", usize::MAX, u64::MAX)
        );
    }
}
