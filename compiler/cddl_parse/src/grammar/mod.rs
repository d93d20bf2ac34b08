//! Grammar productions, one file per construct. Each file extends
//! [`Parser`](crate::Parser) with the methods for its production.

mod assignment;
mod occurrence;
mod property;
mod property_type;
mod segment;
