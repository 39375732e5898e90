pub mod macros;
pub mod query;
pub mod schema;
pub mod sort;
pub mod storage;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod types;
