//! 链式哈希表核心实现

use crate::{
    error::TableError,
    hash::{default_hash_strategy, HashStrategy},
    map::{bucket::Bucket, DEFAULT_CONFIG},
    stats::{global_recorder, StatsRecorder},
    types::{Entry, Key, OperationType, TableState, Value},
};
use std::{
    fmt,
    sync::Arc,
    time::Instant,
};

/// 哈希表配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// 初始桶数量
    pub initial_size: usize,
    /// 桶内条目数超过该值即为过载桶
    pub stress_threshold: usize,
    /// 过载桶占比（百分比）超过该值时扩容
    pub stress_ratio_percent: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_size: super::DEFAULT_TABLE_SIZE,
            stress_threshold: super::STRESS_THRESHOLD,
            stress_ratio_percent: super::STRESS_RATIO_PERCENT,
        }
    }
}

impl TableConfig {
    /// 仅修改初始桶数量，其余取默认值
    pub fn with_size(initial_size: usize) -> Self {
        Self {
            initial_size,
            ..DEFAULT_CONFIG.clone()
        }
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_size == 0 {
            return Err(TableError::InvalidConfig {
                reason: "initial_size 必须大于 0".into(),
            });
        }
        if self.stress_ratio_percent >= 100 {
            return Err(TableError::InvalidConfig {
                reason: format!(
                    "stress_ratio_percent 必须小于 100 (当前: {})",
                    self.stress_ratio_percent
                ),
            });
        }
        Ok(())
    }
}

/// 哈希表统计信息
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableStats {
    /// 条目总数
    pub entries: usize,
    /// 桶数量
    pub buckets: usize,
    pub load_factor: f64,
    pub stressed_buckets: usize,
    pub stress_ratio: f64,
    pub longest_chain: usize,
    pub insert_count: u64,
    pub update_count: u64,
    pub remove_count: u64,
    pub rehash_count: u64,
}

/// 链式哈希表
///
/// 固定的基数 31 多项式哈希，桶为单向链表。每次插入后检查过载桶占比，
/// 超过阈值则桶数量翻倍并把全部条目重新分布。
pub struct HashTable {
    buckets: Vec<Bucket>,

    // 当前桶数量，初始化前也有值
    size: usize,

    // 全表条目数
    count: usize,

    state: TableState,

    config: TableConfig,

    hasher: Box<dyn HashStrategy>,

    stats_recorder: Arc<dyn StatsRecorder>,
}

impl HashTable {
    /// 创建未初始化的哈希表，统计写入全局记录器
    pub fn new(size: usize) -> Self {
        Self::with_config(TableConfig::with_size(size), global_recorder())
    }

    pub fn with_config(config: TableConfig, stats_recorder: Arc<dyn StatsRecorder>) -> Self {
        Self {
            buckets: Vec::new(),
            size: config.initial_size,
            count: 0,
            state: TableState::Stable,
            config,
            hasher: default_hash_strategy(),
            stats_recorder,
        }
    }

    /// 创建并立即初始化
    pub fn with_size(size: usize) -> Result<Self, TableError> {
        let mut table = Self::new(size);
        table.initialize()?;
        Ok(table)
    }

    /// 替换哈希策略
    ///
    /// 已有条目会按新策略重新放置，桶数量不变。
    pub fn with_hasher(mut self, hasher: Box<dyn HashStrategy>) -> Self {
        self.hasher = hasher;
        if self.is_initialized() {
            log_info!("hash strategy replaced, relocating {} entries", self.count);
            self.redistribute(self.size);
        }
        self
    }

    /// 分配全部空桶
    pub fn initialize(&mut self) -> Result<(), TableError> {
        if self.is_initialized() {
            return Err(TableError::AlreadyInitialized { size: self.size });
        }
        self.config.validate()?;

        self.buckets = Self::allocate(self.size);
        log_info!("hash table initialized with {} buckets", self.size);
        Ok(())
    }

    fn allocate(size: usize) -> Vec<Bucket> {
        (0..size).map(|_| Bucket::new()).collect()
    }

    pub fn is_initialized(&self) -> bool {
        !self.buckets.is_empty()
    }

    /// 插入键值对
    ///
    /// 重复的键不会覆盖旧条目，而是追加到同一个桶的链尾。
    /// 插入后可能触发一次扩容重哈希，此时本次调用为 O(n)。
    pub fn add(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<(), TableError> {
        let start = Instant::now();
        if !self.is_initialized() {
            log_error!("add called on uninitialized table");
            self.stats_recorder
                .record_operation(OperationType::Insert, start.elapsed(), false);
            return Err(TableError::Uninitialized);
        }

        self.raw_insert(Entry::new(key, value));
        self.count += 1;

        let result = if self.should_rehash() {
            self.rehash()
        } else {
            Ok(())
        };
        self.stats_recorder
            .record_operation(OperationType::Insert, start.elapsed(), result.is_ok());
        result
    }

    /// 更新第一个匹配条目的值；键不存在时返回 false，不创建条目
    pub fn update(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> bool {
        let start = Instant::now();
        let key = key.into();
        let updated = match self.bucket_for_mut(&key) {
            Some(bucket) => bucket.update(&key, value.into()),
            None => false,
        };
        self.stats_recorder
            .record_operation(OperationType::Update, start.elapsed(), updated);
        updated
    }

    /// 删除第一个匹配条目；键不存在时返回 false
    pub fn remove(&mut self, key: impl Into<Key>) -> bool {
        let start = Instant::now();
        let key = key.into();
        let removed = self
            .bucket_for_mut(&key)
            .and_then(|bucket| bucket.remove(&key))
            .is_some();
        if removed {
            self.count -= 1;
        }
        self.stats_recorder
            .record_operation(OperationType::Remove, start.elapsed(), removed);
        removed
    }

    /// 与 `update` 相同，但以错误形式报告未初始化和键不存在
    pub fn update_or_err(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<(), TableError> {
        if !self.is_initialized() {
            return Err(TableError::Uninitialized);
        }
        let key = key.into();
        let missing = key.to_string();
        if self.update(key, value) {
            Ok(())
        } else {
            Err(TableError::KeyNotFound { key: missing })
        }
    }

    /// 与 `remove` 相同，但以错误形式报告未初始化和键不存在
    pub fn remove_or_err(&mut self, key: impl Into<Key>) -> Result<(), TableError> {
        if !self.is_initialized() {
            return Err(TableError::Uninitialized);
        }
        let key = key.into();
        let missing = key.to_string();
        if self.remove(key) {
            Ok(())
        } else {
            Err(TableError::KeyNotFound { key: missing })
        }
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let start = Instant::now();
        let key = key.into();
        let value = self
            .index_of(&key)
            .and_then(|index| self.buckets.get(index))
            .and_then(|bucket| bucket.get(&key));
        self.stats_recorder
            .record_operation(OperationType::Get, start.elapsed(), value.is_some());
        value
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some()
    }

    /// 键当前所在（或将要落入）的桶下标；未初始化时为 None
    pub fn index_of(&self, key: &Key) -> Option<usize> {
        if !self.is_initialized() {
            return None;
        }
        Some(self.hasher.index(key, self.size))
    }

    fn bucket_for_mut(&mut self, key: &Key) -> Option<&mut Bucket> {
        match self.index_of(key) {
            Some(index) => self.buckets.get_mut(index),
            None => {
                log_warn!("lookup of {} on uninitialized table", key);
                None
            }
        }
    }

    /// 直接放入对应的桶，不计数也不检查扩容
    fn raw_insert(&mut self, entry: Entry) {
        let index = self.hasher.index(&entry.key, self.size);
        self.buckets[index].add(entry);
    }

    fn stressed_buckets(&self) -> usize {
        let threshold = self.config.stress_threshold;
        self.buckets
            .iter()
            .filter(|bucket| bucket.is_stressed(threshold))
            .count()
    }

    /// 过载桶占全部桶的百分比
    pub fn stress_ratio(&self) -> f64 {
        if self.buckets.is_empty() {
            return 0.0;
        }
        100.0 * self.stressed_buckets() as f64 / self.size as f64
    }

    // 100 * stressed / size > percent，改写为整数比较避免取整误差
    fn should_rehash(&self) -> bool {
        let stressed = self.stressed_buckets() as u128;
        stressed * 100 > self.config.stress_ratio_percent as u128 * self.size as u128
    }

    /// 桶数量翻倍并按"旧桶顺序、链内顺序"重新分布全部条目
    fn rehash(&mut self) -> Result<(), TableError> {
        let start = Instant::now();
        let old_size = self.size;
        let new_size = old_size
            .checked_mul(2)
            .ok_or(TableError::CapacityOverflow { size: old_size })?;

        self.state = TableState::Rehashing;
        log_info!(
            "rehash start: {} -> {} buckets, {} entries, stress ratio {:.1}%",
            old_size,
            new_size,
            self.count,
            self.stress_ratio()
        );

        self.redistribute(new_size);

        self.state = TableState::Stable;
        log_info!("rehash completed in {:?}", start.elapsed());
        self.stats_recorder
            .record_operation(OperationType::Rehash, start.elapsed(), true);
        Ok(())
    }

    // 换上 new_size 个空桶，按旧桶顺序、链内顺序逐个 raw_insert
    fn redistribute(&mut self, new_size: usize) {
        let old_buckets = std::mem::replace(&mut self.buckets, Self::allocate(new_size));
        self.size = new_size;
        for bucket in old_buckets {
            for entry in bucket.into_entries() {
                self.raw_insert(entry);
            }
        }
    }

    /// 条目总数
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 当前桶数量
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn state(&self) -> TableState {
        self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.bucket(index).map(Bucket::len)
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// 按桶顺序、链内顺序遍历全部条目
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.buckets.iter().flat_map(Bucket::iter)
    }

    pub fn stats(&self) -> TableStats {
        let op_stats = self.stats_recorder.snapshot();
        let load_factor = if self.size > 0 {
            self.count as f64 / self.size as f64
        } else {
            0.0
        };

        TableStats {
            entries: self.count,
            buckets: self.size,
            load_factor,
            stressed_buckets: self.stressed_buckets(),
            stress_ratio: self.stress_ratio(),
            longest_chain: self.buckets.iter().map(Bucket::len).max().unwrap_or(0),
            insert_count: op_stats.insert_count,
            update_count: op_stats.update_count,
            remove_count: op_stats.remove_count,
            rehash_count: op_stats.rehash_count,
        }
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("size", &self.size)
            .field("count", &self.count)
            .field("state", &self.state)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "{:>4}: {}", index, bucket)?;
        }
        Ok(())
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AtomicStatsRecorder;

    fn table_with_recorder(size: usize) -> (HashTable, Arc<AtomicStatsRecorder>) {
        let recorder = Arc::new(AtomicStatsRecorder::new());
        let mut table = HashTable::with_config(TableConfig::with_size(size), recorder.clone());
        table.initialize().unwrap();
        (table, recorder)
    }

    #[test]
    fn test_uninitialized_add_fails_fast() {
        let mut table = HashTable::new(4);
        assert!(!table.is_initialized());
        assert_eq!(table.add("a", 1), Err(TableError::Uninitialized));
        assert!(!table.update("a", 2));
        assert!(!table.remove("a"));
        assert_eq!(table.get("a"), None);
        assert_eq!(table.index_of(&Key::from("a")), None);
        assert_eq!(table.update_or_err("a", 2), Err(TableError::Uninitialized));
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_initialize_rules() {
        let mut table = HashTable::new(0);
        assert!(matches!(table.initialize(), Err(TableError::InvalidConfig { .. })));

        let mut table = HashTable::with_size(4).unwrap();
        assert_eq!(table.initialize(), Err(TableError::AlreadyInitialized { size: 4 }));
        assert_eq!(table.buckets().len(), 4);
        assert!(table.buckets().iter().all(Bucket::is_empty));
    }

    #[test]
    fn test_invalid_ratio() {
        let config = TableConfig {
            stress_ratio_percent: 100,
            ..TableConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(TableConfig::default().validate().is_ok());
        assert_eq!(TableConfig::default().stress_threshold, 30);
        assert_eq!(TableConfig::default().stress_ratio_percent, 70);
    }

    #[test]
    fn test_scenario_size_four() {
        let (mut table, _) = table_with_recorder(4);
        table.add("a", 1).unwrap();
        table.add("b", 2).unwrap();
        table.add("f", 6).unwrap();

        // 'a' = 97 -> 1, 'b' = 98 -> 2, 'f' = 102 -> 2
        assert_eq!(table.index_of(&Key::from("a")), Some(1));
        assert_eq!(table.index_of(&Key::from("b")), Some(2));
        assert_eq!(table.index_of(&Key::from("f")), Some(2));
        assert_eq!(table.bucket_len(2), Some(2));

        assert!(table.update("b", 20));
        assert_eq!(table.get("b"), Some(&Value::from(20)));
        assert_eq!(table.get("f"), Some(&Value::from(6)));

        assert!(table.remove("a"));
        assert!(!table.bucket(1).unwrap().contains(&Key::from("a")));
        assert_eq!(table.len(), 2);
        assert!(!table.remove("a"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_negative_hash_lands_in_range() {
        let (mut table, _) = table_with_recorder(4);
        table.add("rehash", "negative").unwrap();
        assert_eq!(table.index_of(&Key::from("rehash")), Some(1));
        assert_eq!(table.bucket_len(1), Some(1));
        assert_eq!(table.get("rehash"), Some(&Value::from("negative")));
    }

    #[test]
    fn test_duplicate_key_appends() {
        let (mut table, _) = table_with_recorder(4);
        table.add("a", 1).unwrap();
        table.add("a", 2).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.bucket_len(1), Some(2));
        assert_eq!(table.get("a"), Some(&Value::from(1)));

        assert!(table.remove("a"));
        assert_eq!(table.get("a"), Some(&Value::from(2)));
    }

    #[test]
    fn test_numeric_keys_hash_as_decimal() {
        let (mut table, _) = table_with_recorder(8);
        table.add(42, "int").unwrap();
        table.add("42", "str").unwrap();
        assert_eq!(table.index_of(&Key::from(42)), table.index_of(&Key::from("42")));
        assert_eq!(table.get(42), Some(&Value::from("int")));
        assert_eq!(table.get("42"), Some(&Value::from("str")));
    }

    #[test]
    fn test_rehash_doubles_once() {
        let (mut table, recorder) = table_with_recorder(1);
        for i in 0..30 {
            table.add(i, i).unwrap();
        }
        assert_eq!(table.size(), 1);
        assert_eq!(table.stress_ratio(), 0.0);

        table.add(30, 30).unwrap();
        assert_eq!(table.size(), 2);
        assert_eq!(table.len(), 31);
        assert_eq!(table.state(), TableState::Stable);
        assert_eq!(recorder.snapshot().rehash_count, 1);

        for i in 0..31 {
            let key = Key::from(i);
            let index = table.index_of(&key).unwrap();
            assert!(table.bucket(index).unwrap().contains(&key));
            assert_eq!(table.get(i), Some(&Value::from(i)));
        }
        assert_eq!(table.iter().count(), 31);
    }

    #[test]
    fn test_rehash_keeps_chain_order() {
        let (mut table, _) = table_with_recorder(1);
        // 全部使用同一个键，重哈希后仍在同一条链上且顺序不变
        for i in 0..31 {
            table.add("same", i).unwrap();
        }
        assert_eq!(table.size(), 2);
        let index = table.index_of(&Key::from("same")).unwrap();
        let values: Vec<i64> = table
            .bucket(index)
            .unwrap()
            .iter()
            .filter_map(|entry| entry.value.as_int())
            .collect();
        assert_eq!(values, (0..31).collect::<Vec<_>>());
    }

    #[test]
    fn test_no_rehash_below_ratio() {
        let (mut table, _) = table_with_recorder(4);
        // 同一个桶塞满 40 个条目，只有 25% 的桶过载
        for i in 0..40 {
            table.add("Aa", i).unwrap();
        }
        assert_eq!(table.size(), 4);
        assert_eq!(table.stress_ratio(), 25.0);
    }

    #[test]
    fn test_stats_and_recorder() {
        let (mut table, recorder) = table_with_recorder(4);
        table.add("a", 1).unwrap();
        table.add("b", 2).unwrap();
        table.update("a", 3);
        table.update("zz", 3);
        table.remove("b");

        let stats = table.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.buckets, 4);
        assert_eq!(stats.insert_count, 2);
        assert_eq!(stats.update_count, 2);
        assert_eq!(stats.remove_count, 1);
        assert_eq!(stats.longest_chain, 1);
        assert_eq!(recorder.snapshot().miss_count, 1);
    }

    #[test]
    fn test_or_err_variants() {
        let (mut table, _) = table_with_recorder(4);
        table.add("a", 1).unwrap();
        assert_eq!(table.update_or_err("a", 5), Ok(()));
        assert_eq!(
            table.update_or_err("b", 5),
            Err(TableError::KeyNotFound { key: "\"b\"".into() })
        );
        assert_eq!(table.remove_or_err("a"), Ok(()));
        assert!(matches!(table.remove_or_err("a"), Err(TableError::KeyNotFound { .. })));
    }

    #[test]
    fn test_custom_hasher_collides_everything() {
        use crate::hash::FnHashStrategy;

        let mut table = HashTable::with_config(TableConfig::with_size(4), Arc::new(AtomicStatsRecorder::new()))
            .with_hasher(Box::new(FnHashStrategy::new(|_: &str| 3)));
        table.initialize().unwrap();
        for i in 0..10 {
            table.add(i, i).unwrap();
        }
        assert_eq!(table.bucket_len(3), Some(10));
        assert_eq!(table.stats().longest_chain, 10);
        assert_eq!(table.get(7), Some(&Value::from(7)));
    }

    #[test]
    fn test_replacing_hasher_relocates_entries() {
        use crate::hash::FnHashStrategy;

        let (mut table, _) = table_with_recorder(4);
        for key in ["a", "b", "f", "hello"] {
            table.add(key, 1).unwrap();
        }
        let mut table = table.with_hasher(Box::new(FnHashStrategy::new(|_: &str| 0)));
        assert_eq!(table.size(), 4);
        assert_eq!(table.len(), 4);
        assert_eq!(table.bucket_len(0), Some(4));
        for key in ["a", "b", "f", "hello"] {
            let index = table.index_of(&Key::from(key)).unwrap();
            assert!(table.bucket(index).unwrap().contains(&Key::from(key)));
            assert_eq!(table.get(key), Some(&Value::from(1)));
        }
        assert!(table.remove("f"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_failed_add_is_recorded() {
        let recorder = Arc::new(AtomicStatsRecorder::new());
        let mut table = HashTable::with_config(TableConfig::with_size(4), recorder.clone());
        assert_eq!(table.add("a", 1), Err(TableError::Uninitialized));

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.insert_count, 1);
        assert_eq!(snapshot.miss_count, 1);
    }

    #[test]
    fn test_display_lists_buckets() {
        let (mut table, _) = table_with_recorder(2);
        table.add("a", 1).unwrap();
        let dump = table.to_string();
        assert_eq!(dump.lines().count(), 2);
        assert!(dump.contains("\"a\": 1"));
    }
}
