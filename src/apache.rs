//! Apache 2.4 configuration for forwarding IGB headers.
//!
//! Apache 2.4 does not pass request headers whose names contain underscores
//! on to the application, so an `EVE_CHARID` header never arrives as
//! `EVE-CHARID`. The directives generated here copy each underscore
//! variant into an environment variable with `mod_setenvif`, then set the
//! hyphenated header from it with `mod_headers`, so the application always
//! sees `EVE-*` names.

use crate::headers;

/// Returns the two directives that re-expose `EVE_<word>` as `EVE-<word>`.
///
/// ```
/// let lines = igb_headers::apache::directives("CHARID");
/// assert_eq!(
///     lines,
///     "SetEnvIfNoCase ^EVE_CHARID$ ^(.*)$ fix_eve_charid=$1\n\
///      RequestHeader set EVE-CHARID %{fix_eve_charid}e env=fix_eve_charid\n\n"
/// );
/// ```
pub fn directives(word: &str) -> String {
    let mut out = String::new();
    write_directives(&mut out, word);
    out
}

/// Returns the directives for every IGB header, in header order.
pub fn render() -> String {
    render_words(headers::ALL.into_iter().filter_map(headers::word))
}

/// Returns the directives for `words`, in the order given.
pub fn render_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for word in words {
        write_directives(&mut out, word);
    }
    out
}

fn write_directives(out: &mut String, word: &str) {
    let var = format!("fix_eve_{}", word.to_ascii_lowercase());
    out.push_str(&format!(
        "SetEnvIfNoCase ^EVE_{word}$ ^(.*)$ {var}=$1\n\
         RequestHeader set EVE-{word} %{{{var}}}e env={var}\n\n",
    ));
}
