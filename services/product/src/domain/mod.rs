//! 领域层
//!
//! 商品目录及其品类记录

pub mod catalog;

pub use catalog::*;
