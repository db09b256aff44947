//! 哈希模块 - 统一管理哈希相关功能

pub mod polynomial;
pub mod strategy;

pub use polynomial::PolynomialHash;
pub use strategy::{FnHashStrategy, HashStrategy, HashStrategyType, HasherFunction};

/// 默认哈希策略
pub fn default_hash_strategy() -> Box<dyn HashStrategy> {
    Box::new(PolynomialHash::new())
}

/// 哈希工具函数
///
/// 哈希可能为负，这里取数学意义上的模，结果落在 `[0, size)` 内。
pub fn bucket_index(hash: i32, size: usize) -> usize {
    debug_assert!(size > 0, "桶数量必须大于 0");
    (i64::from(hash).rem_euclid(size as i64)) as usize
}
