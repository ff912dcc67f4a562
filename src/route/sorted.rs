use super::dynamic::split_dynamic_segment;
use super::error::SortError;

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

pub fn sort_routes<S: AsRef<str>>(templates: &[S]) -> Result<Vec<String>, SortError> {
    let mut root = UrlNode::new();
    for template in templates {
        root.insert(template.as_ref())?;
    }
    root.emit("/")
}

#[derive(Debug)]
struct UrlNode {
    terminal: bool,
    children: Vec<(SegmentKey, UrlNode)>,
}

#[derive(Debug)]
enum SegmentKey {
    Static(String),
    Dynamic { prefix: String, name: String },
    CatchAll { name: String },
    OptionalCatchAll { name: String },
}

impl UrlNode {
    fn new() -> Self {
        Self {
            terminal: false,
            children: Vec::new(),
        }
    }

    fn insert(&mut self, template: &str) -> Result<(), SortError> {
        let segments: SmallVec<[&str; 8]> =
            template.split('/').filter(|s| !s.is_empty()).collect();
        let mut slug_names: SmallVec<[&str; 4]> = SmallVec::new();
        self.insert_segments(&segments, &mut slug_names, false)
    }

    fn insert_segments<'t>(
        &mut self,
        segments: &[&'t str],
        slug_names: &mut SmallVec<[&'t str; 4]>,
        after_catch_all: bool,
    ) -> Result<(), SortError> {
        let (&raw, rest) = match segments.split_first() {
            Some(parts) => parts,
            None => {
                self.terminal = true;
                return Ok(());
            }
        };

        if after_catch_all {
            return Err(SortError::CatchAllNotLast);
        }

        let key = self.segment_key(raw, slug_names)?;
        let catch_all = matches!(
            key,
            SegmentKey::CatchAll { .. } | SegmentKey::OptionalCatchAll { .. }
        );
        self.child_entry(key).insert_segments(rest, slug_names, catch_all)
    }

    fn segment_key<'t>(
        &self,
        raw: &'t str,
        slug_names: &mut SmallVec<[&'t str; 4]>,
    ) -> Result<SegmentKey, SortError> {
        if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            let (optional, inner) = match inner.strip_prefix('[').and_then(|s| s.strip_suffix(']'))
            {
                Some(inner) => (true, inner),
                None => (false, inner),
            };
            let (catch_all, name) = match inner.strip_prefix("...") {
                Some(name) => (true, name),
                None => (false, inner),
            };
            check_name(name)?;

            if catch_all {
                return if optional {
                    if let Some(required) = self.catch_all_name() {
                        return Err(SortError::RequiredAndOptionalCatchAll(
                            required.to_string(),
                            raw.to_string(),
                        ));
                    }
                    check_slug(self.optional_catch_all_name(), name, slug_names)?;
                    Ok(SegmentKey::OptionalCatchAll {
                        name: name.to_string(),
                    })
                } else {
                    if let Some(optional_name) = self.optional_catch_all_name() {
                        return Err(SortError::OptionalAndRequiredCatchAll(
                            optional_name.to_string(),
                            raw.to_string(),
                        ));
                    }
                    check_slug(self.catch_all_name(), name, slug_names)?;
                    Ok(SegmentKey::CatchAll {
                        name: name.to_string(),
                    })
                };
            }

            if optional {
                return Err(SortError::OptionalParametersNotSupported(raw.to_string()));
            }

            check_slug(self.dynamic_name(""), name, slug_names)?;
            return Ok(SegmentKey::Dynamic {
                prefix: String::new(),
                name: name.to_string(),
            });
        }

        if let Some((prefix, name)) = split_dynamic_segment(raw) {
            check_name(name)?;
            check_slug(self.dynamic_name(prefix), name, slug_names)?;
            return Ok(SegmentKey::Dynamic {
                prefix: prefix.to_string(),
                name: name.to_string(),
            });
        }

        Ok(SegmentKey::Static(raw.to_string()))
    }

    fn dynamic_name(&self, prefix: &str) -> Option<&str> {
        self.children.iter().find_map(|(key, _)| match key {
            SegmentKey::Dynamic { prefix: p, name } if p == prefix => Some(name.as_str()),
            _ => None,
        })
    }

    fn catch_all_name(&self) -> Option<&str> {
        self.children.iter().find_map(|(key, _)| match key {
            SegmentKey::CatchAll { name } => Some(name.as_str()),
            _ => None,
        })
    }

    fn optional_catch_all_name(&self) -> Option<&str> {
        self.children.iter().find_map(|(key, _)| match key {
            SegmentKey::OptionalCatchAll { name } => Some(name.as_str()),
            _ => None,
        })
    }

    fn child_entry(&mut self, key: SegmentKey) -> &mut UrlNode {
        let slot = match self.children.iter().position(|(k, _)| k.same_slot(&key)) {
            Some(i) => i,
            None => {
                self.children.push((key, UrlNode::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[slot].1
    }

    fn emit(&self, prefix: &str) -> Result<Vec<String>, SortError> {
        let mut ordinary: Vec<&(SegmentKey, UrlNode)> = self
            .children
            .iter()
            .filter(|(key, _)| matches!(key, SegmentKey::Static(_) | SegmentKey::Dynamic { .. }))
            .collect();
        ordinary.sort_by(|a, b| cmp_siblings(&a.0, &b.0));

        let mut routes = Vec::new();

        // a terminal node outranks everything nested under it
        if self.terminal {
            let own = if prefix == "/" {
                "/".to_string()
            } else {
                prefix[..prefix.len() - 1].to_string()
            };
            if let Some(name) = self.optional_catch_all_name() {
                return Err(SortError::SameSpecificityAsOptionalCatchAll(
                    own,
                    prefix.to_string(),
                    name.to_string(),
                ));
            }
            routes.push(own);
        }

        for (key, child) in ordinary {
            routes.extend(child.emit(&format!("{prefix}{key}/"))?);
        }

        if let Some((key, child)) = self
            .children
            .iter()
            .find(|(key, _)| matches!(key, SegmentKey::CatchAll { .. }))
        {
            routes.extend(child.emit(&format!("{prefix}{key}/"))?);
        }
        if let Some((key, child)) = self
            .children
            .iter()
            .find(|(key, _)| matches!(key, SegmentKey::OptionalCatchAll { .. }))
        {
            routes.extend(child.emit(&format!("{prefix}{key}/"))?);
        }

        Ok(routes)
    }
}

impl SegmentKey {
    fn same_slot(&self, other: &SegmentKey) -> bool {
        match (self, other) {
            (SegmentKey::Static(a), SegmentKey::Static(b)) => a == b,
            (SegmentKey::Dynamic { prefix: a, .. }, SegmentKey::Dynamic { prefix: b, .. }) => {
                a == b
            }
            (SegmentKey::CatchAll { .. }, SegmentKey::CatchAll { .. }) => true,
            (SegmentKey::OptionalCatchAll { .. }, SegmentKey::OptionalCatchAll { .. }) => true,
            _ => false,
        }
    }

    fn sort_text(&self) -> (&str, bool) {
        match self {
            SegmentKey::Static(text) => (text, false),
            SegmentKey::Dynamic { prefix, .. } => (prefix, true),
            SegmentKey::CatchAll { .. } | SegmentKey::OptionalCatchAll { .. } => ("", true),
        }
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKey::Static(text) => f.write_str(text),
            SegmentKey::Dynamic { prefix, name } => write!(f, "{prefix}[{name}]"),
            SegmentKey::CatchAll { name } => write!(f, "[...{name}]"),
            SegmentKey::OptionalCatchAll { name } => write!(f, "[[...{name}]]"),
        }
    }
}

// a dynamic marker sorts above every literal byte at its position, so static
// siblings come first and prefixed dynamic segments interleave by prefix
fn cmp_siblings(a: &SegmentKey, b: &SegmentKey) -> Ordering {
    let (text_a, dyn_a) = a.sort_text();
    let (text_b, dyn_b) = b.sort_text();

    for (x, y) in text_a.bytes().zip(text_b.bytes()) {
        match x.cmp(&y) {
            Ordering::Equal => {}
            diff => return diff,
        }
    }

    match text_a.len().cmp(&text_b.len()) {
        Ordering::Equal => dyn_a.cmp(&dyn_b),
        Ordering::Less if dyn_a => Ordering::Greater,
        Ordering::Greater if dyn_b => Ordering::Less,
        diff => diff,
    }
}

fn check_name(name: &str) -> Result<(), SortError> {
    if name.starts_with('[') || name.ends_with(']') {
        return Err(SortError::ExtraBrackets(name.to_string()));
    }
    if name.starts_with('.') {
        return Err(SortError::ErroneousPeriod(name.to_string()));
    }
    Ok(())
}

fn check_slug<'t>(
    previous: Option<&str>,
    next: &'t str,
    slug_names: &mut SmallVec<[&'t str; 4]>,
) -> Result<(), SortError> {
    if let Some(previous) = previous {
        if previous != next {
            return Err(SortError::DifferentSlugNames(
                previous.to_string(),
                next.to_string(),
            ));
        }
    }

    for slug in slug_names.iter() {
        if *slug == next {
            return Err(SortError::RepeatingSlugName(next.to_string()));
        }
        if word_chars(slug).eq(word_chars(next)) {
            return Err(SortError::DifferingNonWordSymbols(
                (*slug).to_string(),
                next.to_string(),
            ));
        }
    }

    slug_names.push(next);
    Ok(())
}

fn word_chars(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().filter(|c| *c == '_' || c.is_alphanumeric())
}
