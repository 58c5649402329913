pub mod fmt;
pub mod ops;
pub mod poly;
