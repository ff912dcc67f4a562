use super::error::DecodeError;
use super::RouteRegex;

use std::borrow::Cow;
use std::ops::Deref;
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use smallvec::SmallVec;

impl RouteRegex {
    pub fn find<'r, 'p>(&'r self, path: &'p str) -> Result<Option<Params<'r, 'p>>, DecodeError> {
        let caps = match self.re.captures(path) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        let mut params = Params::new();
        for (name, group) in &self.groups {
            let m = match caps.get(group.pos) {
                Some(m) => m,
                None => continue,
            };
            let value = percent_decode_str(m.as_str())
                .decode_utf8()
                .map_err(|_| DecodeError { name: name.clone() })?;
            params.buf.push((name.as_ref(), value));
        }
        Ok(Some(params))
    }
}

#[derive(Debug)]
pub struct Params<'r, 'p> {
    buf: SmallVec<[(&'r str, Cow<'p, str>); 4]>,
}

impl Params<'_, '_> {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if name == *k { Some(v.as_ref()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl<'r, 'p> Deref for Params<'r, 'p> {
    type Target = [(&'r str, Cow<'p, str>)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl Params<'_, '_> {
    fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }
}
