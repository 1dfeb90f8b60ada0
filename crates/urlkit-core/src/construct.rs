//! URL reassembly from individual components.

/// Components fed to [`UrlComponents::build`]. All fields default to empty,
/// and an empty field drops its separator from the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    /// Legacy `;` parameters appended to the path.
    pub params: String,
    /// Query pairs, serialized in iteration order.
    pub query: Vec<(String, String)>,
    pub fragment: String,
}

impl UrlComponents {
    /// Reassembles `scheme://netloc/path;params?query#fragment`.
    ///
    /// Each separator (`:`, `//`, `;`, `?`, `#`) appears only when its
    /// component is non-empty. A non-empty authority forces a `/` before a
    /// relative path. Query pairs are form-encoded (space becomes `+`,
    /// reserved characters percent-escaped). Pure function of its inputs.
    pub fn build(&self) -> String {
        let mut url = self.path.clone();

        if !self.params.is_empty() {
            url = format!("{url};{}", self.params);
        }

        if !self.netloc.is_empty() || url.starts_with("//") {
            if !url.is_empty() && !url.starts_with('/') {
                url.insert(0, '/');
            }
            url = format!("//{}{url}", self.netloc);
        }

        if !self.scheme.is_empty() {
            url = format!("{}:{url}", self.scheme);
        }

        let query = encode_query(&self.query);
        if !query.is_empty() {
            url = format!("{url}?{query}");
        }

        if !self.fragment.is_empty() {
            url = format!("{url}#{}", self.fragment);
        }

        url
    }
}

/// Form-encodes query pairs into `key=value&...`, preserving order.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
