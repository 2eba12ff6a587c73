// src/link/location.rs
//
// An in-app URL: a path plus ordered query parameters.

use std::fmt;

use url::{form_urlencoded, Url};

use crate::config::consts::LINK_ORIGIN;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), params: Vec::new() }
    }

    /// Resolve `href` against `base_path`. Accepts "/staff?q=a", "?q=a"
    /// (keeps the base path) and absolute URLs (origin is discarded).
    pub fn parse(href: &str, base_path: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(&join!(LINK_ORIGIN, base_path))?;
        let url = base.join(href.trim())?;
        let params = url.query_pairs().into_owned().collect();
        Ok(Self { path: s!(url.path()), params })
    }

    pub fn path(&self) -> &str { &self.path }
    pub fn params(&self) -> &[(String, String)] { &self.params }
    pub fn has_params(&self) -> bool { !self.params.is_empty() }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Set or remove `key` in place. An existing key keeps its position and
    /// loses any duplicates; a new key goes to the end.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            None => self.params.retain(|(k, _)| k != key),
            Some(v) => {
                if let Some(pos) = self.params.iter().position(|(k, _)| k == key) {
                    self.params[pos].1 = s!(v);
                    let mut seen = false;
                    self.params.retain(|(k, _)| {
                        if k != key { return true; }
                        let keep = !seen;
                        seen = true;
                        keep
                    });
                } else {
                    self.params.push((s!(key), s!(v)));
                }
            }
        }
    }

    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(s!())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Bare path when nothing is left in the query.
    pub fn href(&self) -> String {
        if self.params.is_empty() {
            self.path.clone()
        } else {
            join!(&self.path, "?", &self.query_string())
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
