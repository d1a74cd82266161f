//! Persistence layer: sea-orm entities and the services that own writes to them.

pub mod db;
pub mod entities;
pub mod error;
pub mod services;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
