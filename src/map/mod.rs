//! 哈希表核心模块 - 链式哈希表及其组件

pub mod bucket;
pub mod sync;
pub mod table;

pub use bucket::Bucket;
pub use sync::SyncHashTable;
pub use table::{HashTable, TableConfig, TableStats};

use once_cell::sync::Lazy;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<TableConfig> = Lazy::new(TableConfig::default);

// 预定义常量
pub const DEFAULT_TABLE_SIZE: usize = 16;
/// 桶内条目数超过该值即为过载桶
pub const STRESS_THRESHOLD: usize = 30;
/// 过载桶占比超过该百分比时扩容
pub const STRESS_RATIO_PERCENT: usize = 70;
