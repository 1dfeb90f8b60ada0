//! Query-string decoding into an ordered multimap.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Query parameters as an ordered key -> values multimap.
///
/// Distinct keys keep first-occurrence order; each key's values keep their
/// occurrence order. Lookups walk the pair list, which is fine at query-string
/// sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    /// Decoded values recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterates `(key, values)` in first-occurrence key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.pairs
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn append(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.pairs.push((key, vec![value])),
        }
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, values) in &self.pairs {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

/// Decodes a raw query string into [`QueryParams`].
///
/// Pairs are separated by `&` or `;`. A pair with no `=` or with an empty
/// raw value contributes nothing. Keys and values are percent-decoded, with
/// `+` decoding to a space. Commas are ordinary value text.
pub fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::default();

    for piece in query.split(['&', ';']) {
        if piece.is_empty() {
            continue;
        }
        match piece.split_once('=') {
            Some((_, raw_value)) if !raw_value.is_empty() => {}
            _ => continue,
        }
        if let Some((key, value)) = form_urlencoded::parse(piece.as_bytes()).next() {
            params.append(key.into_owned(), value.into_owned());
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(params: &QueryParams, key: &str) -> Vec<String> {
        params.get(key).unwrap_or_default().to_vec()
    }

    #[test]
    fn single_pairs() {
        let params = parse_query("name=Alice&id=123");
        assert_eq!(values(&params, "name"), ["Alice"]);
        assert_eq!(values(&params, "id"), ["123"]);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn repeated_key_collects_values_in_order() {
        let params = parse_query("tags=a&tags=b");
        assert_eq!(values(&params, "tags"), ["a", "b"]);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn comma_is_not_a_separator() {
        let params = parse_query("tags=tech,dev");
        assert_eq!(values(&params, "tags"), ["tech,dev"]);
    }

    #[test]
    fn semicolon_separates_pairs() {
        let params = parse_query("a=1;b=2");
        assert_eq!(values(&params, "a"), ["1"]);
        assert_eq!(values(&params, "b"), ["2"]);
    }

    #[test]
    fn percent_and_plus_decoding() {
        let params = parse_query("q=hello+world&city=S%C3%A3o+Paulo");
        assert_eq!(values(&params, "q"), ["hello world"]);
        assert_eq!(values(&params, "city"), ["São Paulo"]);
    }

    #[test]
    fn blank_values_and_bare_keys_are_dropped() {
        let params = parse_query("a=&b&c=3");
        assert!(params.get("a").is_none());
        assert!(params.get("b").is_none());
        assert_eq!(values(&params, "c"), ["3"]);
    }

    #[test]
    fn key_order_is_first_occurrence() {
        let params = parse_query("z=1&a=2&z=3");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["z", "a"]);
        assert_eq!(values(&params, "z"), ["1", "3"]);
    }

    #[test]
    fn empty_query() {
        assert!(parse_query("").is_empty());
    }
}
