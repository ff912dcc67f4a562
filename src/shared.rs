use crate::table::RouteTable;

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};

pub struct SharedRouteTable<T> {
    table: ArcSwap<RouteTable<T>>,
}

impl<T> SharedRouteTable<T> {
    pub fn new(table: RouteTable<T>) -> Self {
        Self {
            table: ArcSwap::from_pointee(table),
        }
    }

    pub fn load(&self) -> Guard<Arc<RouteTable<T>>> {
        self.table.load()
    }

    pub fn snapshot(&self) -> Arc<RouteTable<T>> {
        self.table.load_full()
    }

    pub fn store(&self, table: RouteTable<T>) {
        tracing::debug!(routes = table.len(), "replacing route table");
        self.table.store(Arc::new(table));
    }
}
