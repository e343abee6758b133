pub mod error;
pub mod fingerprint;
pub mod platform;
pub mod ports;
pub mod raw_table;
pub mod report;
pub mod summary;
pub mod value_objects;
