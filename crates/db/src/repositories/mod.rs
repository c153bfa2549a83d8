//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod swift_code_repo;

pub use swift_code_repo::SwiftCodeRepo;
