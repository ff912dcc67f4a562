use super::dynamic::split_dynamic_segment;
use super::error::CompileError;
use super::{Group, RouteRegex};

use regex::RegexBuilder;

pub fn compile_route(template: &str) -> Result<RouteRegex, CompileError> {
    let mut route = template.strip_suffix('/').unwrap_or(template);
    if route.is_empty() {
        route = "/";
    }

    let mut pattern = String::with_capacity(route.len() + 16);
    let mut groups: Vec<(Box<str>, Group)> = Vec::new();

    for segment in route.strip_prefix('/').unwrap_or(route).split('/') {
        let (prefix, inner) = match split_dynamic_segment(segment) {
            Some(parts) => parts,
            None => {
                pattern.push('/');
                push_escaped(&mut pattern, segment);
                continue;
            }
        };

        let (optional, inner) = match inner.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            Some(inner) => (true, inner),
            None => (false, inner),
        };
        let (repeat, name) = match inner.strip_prefix("...") {
            Some(name) => (true, name),
            None => (false, inner),
        };

        if groups.iter().any(|(n, _)| name == n.as_ref()) {
            return Err(CompileError::DuplicateParam(
                name.to_string(),
                template.to_string(),
            ));
        }

        let pos = groups.len() + 1;
        groups.push((name.into(), Group { pos, repeat, optional }));

        if !prefix.is_empty() {
            pattern.push('/');
            push_escaped(&mut pattern, prefix);
            pattern.push_str(if repeat { "(.+?)" } else { "([^/]+?)" });
        } else if repeat && optional {
            pattern.push_str("(?:/(.+?))?");
        } else if repeat {
            pattern.push_str("/(.+?)");
        } else {
            pattern.push_str("/([^/]+?)");
        }
    }

    let re = RegexBuilder::new(&format!("^{pattern}(?:/)?$"))
        .case_insensitive(true)
        .build()?;

    Ok(RouteRegex { re, groups })
}

#[inline]
fn push_escaped(out: &mut String, literal: &str) {
    for c in literal.chars() {
        if matches!(
            c,
            '|' | '\\' | '{' | '}' | '(' | ')' | '[' | ']' | '^' | '$' | '+' | '*' | '?' | '.' | '-'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
}
