//! Request URL construction.

use std::collections::BTreeMap;

use reqwest::Url;

/// Query parameters, kept sorted by key.
pub type Query = BTreeMap<String, String>;

/// Join `api_path` onto the base URL and attach `query`.
///
/// The base URL's own path is kept as a prefix. The joined path is cleaned
/// of `.`/`..` segments and duplicate slashes, and keeps a trailing slash when
/// `api_path` had one. Query pairs with a blank key or empty value are dropped.
pub fn build_url(base: &Url, api_path: &str, query: &Query) -> Url {
    let mut url = base.clone();

    let joined = if api_path.starts_with('/') {
        api_path.to_string()
    } else {
        format!("/{}", api_path)
    };
    let had_trailing_slash = joined != "/" && joined.ends_with('/');

    let mut cleaned = clean_path(&format!(
        "{}{}",
        base.path().trim_end_matches('/'),
        joined
    ));
    if had_trailing_slash && !cleaned.ends_with('/') {
        cleaned.push('/');
    }
    url.set_path(&cleaned);

    let mut pairs: Query = base
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    for (key, value) in query {
        if key.trim().is_empty() || value.is_empty() {
            continue;
        }
        pairs.insert(key.clone(), value.clone());
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs.iter());
    }
    url
}

/// Lexically normalize an absolute path.
///
/// The result always starts with `/` and never ends with one unless it is
/// the root.
pub fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Percent-escape one path segment (IDs may contain `/` or spaces).
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
