//! 哈希策略模块 - 定义键到桶下标的映射方式

use crate::types::Key;

/// 哈希策略类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategyType {
    /// 基数 31 的多项式滚动哈希
    Polynomial,
    /// 外部提供的文本哈希函数
    Custom,
}

/// 哈希策略特征
pub trait HashStrategy: Send + Sync {
    /// 计算键的有符号 32 位哈希
    fn hash(&self, key: &Key) -> i32;

    /// 获取策略类型
    fn strategy_type(&self) -> HashStrategyType;

    /// 计算键在给定桶数量下的下标，结果总在 `[0, size)` 内
    fn index(&self, key: &Key, size: usize) -> usize {
        super::bucket_index(self.hash(key), size)
    }

    /// 批量定位桶下标
    fn locate_batch(&self, keys: &[&Key], size: usize) -> Vec<usize> {
        keys.iter().map(|key| self.index(key, size)).collect()
    }
}

/// 哈希函数特征 - 作用于文本
pub trait HasherFunction: Send + Sync {
    fn hash_text(&self, text: &str) -> i32;
}

impl<T> HasherFunction for T
where
    T: Fn(&str) -> i32 + Send + Sync,
{
    fn hash_text(&self, text: &str) -> i32 {
        self(text)
    }
}

/// 由任意文本哈希函数构造的策略，便于测试中替换哈希
pub struct FnHashStrategy<F: HasherFunction> {
    hasher: F,
}

impl<F: HasherFunction> FnHashStrategy<F> {
    pub fn new(hasher: F) -> Self {
        Self { hasher }
    }
}

impl<F: HasherFunction> HashStrategy for FnHashStrategy<F> {
    fn hash(&self, key: &Key) -> i32 {
        self.hasher.hash_text(&key.as_text())
    }

    fn strategy_type(&self) -> HashStrategyType {
        HashStrategyType::Custom
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_strategy_index_is_non_negative() {
        let strategy = FnHashStrategy::new(|_: &str| -3);
        assert_eq!(strategy.hash(&Key::from("x")), -3);
        assert_eq!(strategy.index(&Key::from("x"), 4), 1);
        assert_eq!(strategy.strategy_type(), HashStrategyType::Custom);
    }

    #[test]
    fn test_locate_batch() {
        let strategy = FnHashStrategy::new(|text: &str| text.len() as i32);
        let a = Key::from("a");
        let bb = Key::from("bb");
        let n = Key::from(12345);
        assert_eq!(strategy.locate_batch(&[&a, &bb, &n], 4), vec![1, 2, 1]);
    }
}
