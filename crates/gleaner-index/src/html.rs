//! Simple-index page parsing
//!
//! The index serves plain HTML pages whose `<a>` tags carry everything we
//! need: the root listing's hrefs name every package, and a per-package
//! listing's hrefs point at release files with the content digest in the
//! URL fragment.

use tl::ParserOptions;

/// Collect every non-empty `<a href>` value from an index page, in page
/// order, with HTML entities decoded.
pub fn anchor_hrefs(body: &str) -> Result<Vec<String>, tl::ParseError> {
    let dom = tl::parse(body, ParserOptions::default())?;

    Ok(dom
        .nodes()
        .iter()
        .filter_map(|node| node.as_tag())
        .filter(|tag| tag.name().as_bytes() == b"a")
        .filter_map(|tag| tag.attributes().get("href").flatten())
        .filter(|href| !href.as_bytes().is_empty())
        .map(|href| html_escape::decode_html_entities(&href.as_utf8_str()).into_owned())
        .collect())
}

/// Derive a package name from a root-listing href.
///
/// Listing hrefs end in `<name>/`, so the name is the second-to-last
/// slash-delimited segment.
pub fn package_name(href: &str) -> Option<String> {
    let name = href.rsplit('/').nth(1)?;
    (!name.is_empty()).then(|| name.to_string())
}

/// Split a release href on its rightmost `#` into the download URL and the
/// trailing `<algorithm>=<hex>` digest string. Hrefs without a fragment
/// yield no digest.
pub fn split_digest(href: &str) -> (String, Option<String>) {
    match href.rsplit_once('#') {
        Some((link, fragment)) if !fragment.is_empty() => {
            (link.to_string(), Some(fragment.to_string()))
        }
        _ => (href.to_string(), None),
    }
}
