mod compile;
mod dynamic;
mod error;
mod matcher;
mod sorted;

pub use self::compile::compile_route;
pub use self::dynamic::is_dynamic_route;
pub use self::error::{CompileError, DecodeError, SortError};
pub use self::matcher::Params;
pub use self::sorted::sort_routes;

use regex::Regex;

#[derive(Debug, Clone)]
pub struct RouteRegex {
    re: Regex,
    groups: Vec<(Box<str>, Group)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub pos: usize,
    pub repeat: bool,
    pub optional: bool,
}

impl RouteRegex {
    pub fn regex(&self) -> &Regex {
        &self.re
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, Group)> + '_ {
        self.groups.iter().map(|(name, group)| (name.as_ref(), *group))
    }

    pub fn group(&self, name: &str) -> Option<Group> {
        self.groups
            .iter()
            .find_map(|(k, g)| if name == k.as_ref() { Some(*g) } else { None })
    }
}
