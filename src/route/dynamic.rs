use once_cell::sync::Lazy;
use regex::Regex;

// the segment boundary (/|$) is consumed rather than asserted, which only
// the boolean is_match use can afford
static DYNAMIC_TEMPLATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/[^/]*?\[[^/]+?\](/|$)").unwrap());

static DYNAMIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^/]*?)\[([^/]+?)\]$").unwrap());

pub fn is_dynamic_route(template: &str) -> bool {
    DYNAMIC_TEMPLATE.is_match(template)
}

pub(crate) fn split_dynamic_segment(segment: &str) -> Option<(&str, &str)> {
    let caps = DYNAMIC_SEGMENT.captures(segment)?;
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let name = caps.get(2).map_or("", |m| m.as_str());
    Some((prefix, name))
}

#[test]
fn test_dynamic_route() {
    assert!(!is_dynamic_route("/"));
    assert!(!is_dynamic_route("/blog"));
    assert!(is_dynamic_route("/blog/[post]"));
    assert!(is_dynamic_route("/blog/[post]/comment"));
    assert!(is_dynamic_route("/post-[id]"));
    assert!(is_dynamic_route("/[...slug]"));
    assert!(!is_dynamic_route("/a[b"));
    assert!(!is_dynamic_route("/a[b]c"));
}
