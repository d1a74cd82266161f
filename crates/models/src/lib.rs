//! Plain data types shared by the database and server crates: request bodies
//! and their validation, list-query parsing, and the pagination helper.

pub mod course;
pub mod course_query;
pub mod pagination;
pub mod validation;
