//! 链式哈希表与基础数据结构库
//!
//! 以基数 31 多项式哈希和单向链表桶实现的哈希表，按过载桶比例自动扩容；
//! 同时提供单向、双向、循环链表，栈与队列，以及归并、纸牌、冒泡三种排序。
//!
//! ## 主要特性
//! - 固定、可复现的字符串哈希，整数键按十进制文本参与哈希
//! - 桶内条目数超过阈值视为过载，过载桶占比超限时桶数翻倍
//! - 可插拔统计记录器，支持Prometheus格式导出
//! - `logging` 特性控制日志输出
//!
//! ## 快速开始
//!
//! ```rust
//! use chained_collections::*;
//!
//! fn main() {
//!     // 创建并初始化4个桶的哈希表
//!     let mut table = HashTable::with_size(4).expect("初始化失败");
//!
//!     // 插入键值对
//!     table.add("apple", 3).expect("插入失败");
//!     table.add(42, "answer").expect("插入失败");
//!
//!     // 获取值
//!     if let Some(value) = table.get("apple") {
//!         println!("apple: {}", value);
//!     }
//!
//!     // 更新与删除
//!     table.update("apple", 5);
//!     table.remove(42);
//!
//!     // 打印统计信息
//!     println!("{:?}", table.stats());
//!
//!     let sorted = merge_sort(&[3, 1, 2]);
//!     assert_eq!(sorted, vec![1, 2, 3]);
//! }
//! ```

#![warn(clippy::all)]
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}
// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod map;
pub mod list;
pub mod stack;
pub mod queue;
pub mod sort;
pub mod stats;

// 公共接口导出
pub use crate::{
    error::TableError,
    hash::{default_hash_strategy, FnHashStrategy, HashStrategy, PolynomialHash},
    list::{CircularList, DoublyLinkedList, SinglyLinkedList},
    map::{
        Bucket,
        HashTable,
        SyncHashTable,
        TableConfig,
        TableStats,
        DEFAULT_CONFIG,
        DEFAULT_TABLE_SIZE,
        STRESS_RATIO_PERCENT,
        STRESS_THRESHOLD,
    },
    queue::Queue,
    sort::{bubble_sort, merge_sort, solitaire_sort},
    stack::Stack,
    stats::{
        export_prometheus,
        operation_snapshot,
        record_operation,
        reset_stats,
        StatsRecorder,
    },
    types::{Entry, Key, OperationType, TableState, Value},
};

// 便捷功能函数

/// 批量插入
///
/// 返回成功插入的条目数，遇到错误即停止。
pub fn batch_insert<K, V>(table: &mut HashTable, items: impl IntoIterator<Item = (K, V)>) -> usize
where
    K: Into<Key>,
    V: Into<Value>,
{
    let mut count = 0;
    for (k, v) in items {
        if let Err(_err) = table.add(k, v) {
            log_warn!("batch insert stopped after {} entries: {}", count, _err);
            break;
        }
        count += 1;
    }
    count
}

/// 批量查询，返回值的副本
pub fn batch_get<K: Into<Key>>(table: &HashTable, keys: impl IntoIterator<Item = K>) -> Vec<Option<Value>> {
    keys.into_iter().map(|k| table.get(k).cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_helpers() {
        let mut table = HashTable::with_size(8).unwrap();
        let inserted = batch_insert(&mut table, (0..50).map(|i| (i, i * 2)));
        assert_eq!(inserted, 50);
        assert_eq!(table.len(), 50);

        let values = batch_get(&table, [0, 49, 100]);
        assert_eq!(values, vec![Some(Value::from(0)), Some(Value::from(98)), None]);
    }

    #[test]
    fn test_batch_insert_uninitialized() {
        let mut table = HashTable::new(8);
        assert_eq!(batch_insert(&mut table, [("a", 1), ("b", 2)]), 0);
    }
}
