use crate::route::{
    compile_route, sort_routes, CompileError, DecodeError, Params, RouteRegex, SortError,
};

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

#[derive(Debug)]
pub struct RouteTable<T> {
    routes: Vec<TableRoute<T>>,
}

#[derive(Debug)]
struct TableRoute<T> {
    template: Box<str>,
    regex: RouteRegex,
    data: T,
}

#[derive(Debug)]
pub struct RouteMatch<'s, 'p, T> {
    pub template: &'s str,
    pub data: &'s T,
    pub params: Params<'s, 'p>,
}

impl<T> RouteTable<T> {
    pub fn new(routes: Vec<(String, T)>) -> Result<Self, TableError> {
        let templates: Vec<&str> = routes.iter().map(|(t, _)| t.as_str()).collect();
        let sorted = sort_routes(&templates)?;
        let rank: HashMap<&str, usize> = sorted
            .iter()
            .enumerate()
            .map(|(i, template)| (template.as_str(), i))
            .collect();

        let mut table = Vec::with_capacity(routes.len());
        for (template, data) in routes {
            let regex = compile_route(&template)?;
            table.push(TableRoute {
                template: template.into_boxed_str(),
                regex,
                data,
            });
        }
        table.sort_by_key(|route| {
            rank.get(normalized(&route.template).as_str())
                .copied()
                .unwrap_or(usize::MAX)
        });

        Ok(Self { routes: table })
    }

    pub fn find<'s, 'p>(
        &'s self,
        path: &'p str,
    ) -> Result<Option<RouteMatch<'s, 'p, T>>, DecodeError> {
        for route in &self.routes {
            if let Some(params) = route.regex.find(path)? {
                return Ok(Some(RouteMatch {
                    template: &route.template,
                    data: &route.data,
                    params,
                }));
            }
        }
        Ok(None)
    }

    pub fn templates(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.iter().map(|route| route.template.as_ref())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// the sorter reconstructs templates from parsed segments, so rank lookups
// must go through the same normalization
fn normalized(template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 1);
    for segment in template.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
