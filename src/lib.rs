#![forbid(unsafe_code)]

mod route;
mod table;

#[cfg(feature = "shared-table")]
mod shared;

pub use self::route::{compile_route, is_dynamic_route, sort_routes};
pub use self::route::{CompileError, DecodeError, Group, Params, RouteRegex, SortError};
pub use self::table::{RouteMatch, RouteTable, TableError};

#[cfg(feature = "shared-table")]
pub use self::shared::SharedRouteTable;
