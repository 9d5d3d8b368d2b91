//! Header lookup boundary for web integration.
//!
//! This module defines the single abstraction the decoder reads from. Web
//! frameworks hand over their request headers through [`HeaderSource`];
//! nothing else about the request is needed.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use http::HeaderMap;

/// Read-only access to a request's header values by name.
///
/// Implementations return the single value stored under `name`, or `None`
/// if the header is absent. Map implementations look names up exactly as
/// given; [`HeaderMap`] is case-insensitive on its own terms.
///
/// # Examples
///
/// ```
/// use igb_headers::HeaderSource;
///
/// // Example framework-specific implementation
/// struct MyFrameworkRequest {
///     headers: Vec<(String, String)>,
/// }
///
/// impl HeaderSource for MyFrameworkRequest {
///     fn header(&self, name: &str) -> Option<&str> {
///         self.headers
///             .iter()
///             .find(|(k, _)| k == name)
///             .map(|(_, v)| v.as_str())
///     }
/// }
///
/// let req = MyFrameworkRequest {
///     headers: vec![("EVE-TRUSTED".to_string(), "Yes".to_string())],
/// };
/// assert_eq!(req.header("EVE-TRUSTED"), Some("Yes"));
/// ```
pub trait HeaderSource {
    /// Returns the value of header `name`, if present.
    fn header(&self, name: &str) -> Option<&str>;
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

impl<K, V, S> HeaderSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> HeaderSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

/// Values that are not visible ASCII are reported as absent.
impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        let value = self.get(name)?;
        match value.to_str() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(header = name, "ignoring non-ASCII header value");
                None
            }
        }
    }
}

/// Adapter that reads headers from CGI/WSGI-style meta variables.
///
/// Gateways that follow the CGI convention expose `EVE-CHARID` as
/// `HTTP_EVE_CHARID` and `User-Agent` as `HTTP_USER_AGENT`. Wrapping such a
/// variable map in `CgiMeta` lets the decoder keep using header names.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use igb_headers::{CgiMeta, HeaderSource};
///
/// let mut meta = HashMap::new();
/// meta.insert("HTTP_EVE_CHARNAME", "Pilot1");
///
/// let source = CgiMeta::new(&meta);
/// assert_eq!(source.header("EVE-CHARNAME"), Some("Pilot1"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CgiMeta<'a, S: ?Sized> {
    vars: &'a S,
}

impl<'a, S: HeaderSource + ?Sized> CgiMeta<'a, S> {
    /// Wraps a meta-variable map.
    pub fn new(vars: &'a S) -> Self {
        Self { vars }
    }
}

impl<S: HeaderSource + ?Sized> HeaderSource for CgiMeta<'_, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.vars.header(&meta_variable(name))
    }
}

/// Returns the CGI meta-variable name for header `name`.
///
/// ```
/// assert_eq!(igb_headers::meta_variable("EVE-SHIPTYPEID"), "HTTP_EVE_SHIPTYPEID");
/// assert_eq!(igb_headers::meta_variable("User-Agent"), "HTTP_USER_AGENT");
/// ```
pub fn meta_variable(name: &str) -> String {
    let mut var = String::with_capacity(name.len() + 5);
    var.push_str("HTTP_");
    var.extend(name.chars().map(|c| match c {
        '-' => '_',
        c => c.to_ascii_uppercase(),
    }));
    var
}
