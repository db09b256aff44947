//! 多项式滚动哈希 - `hash = hash * 31 + code`，按 32 位有符号整数回绕

use crate::{
    hash::strategy::{HashStrategy, HashStrategyType},
    types::Key,
};

/// 基数 31 的多项式哈希策略
///
/// 对文本的每个 UTF-16 码元执行 `hash = (hash << 5) - hash + code`，
/// 溢出时回绕。无种子，无末尾混淆，同一进程内结果确定。
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialHash;

impl PolynomialHash {
    pub const fn new() -> Self {
        Self
    }

    /// 对文本计算哈希
    pub fn hash_text(text: &str) -> i32 {
        let hash = text.encode_utf16().fold(0i32, |hash, code| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(code))
        });
        log_debug!("hash({:?}) = {}", text, hash);
        hash
    }
}

impl HashStrategy for PolynomialHash {
    fn hash(&self, key: &Key) -> i32 {
        Self::hash_text(&key.as_text())
    }

    fn strategy_type(&self) -> HashStrategyType {
        HashStrategyType::Polynomial
    }
}
