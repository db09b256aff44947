// src/map/sync.rs
//! 线程安全包装 - 以互斥锁串行化全部表操作

use parking_lot::Mutex;

use crate::{
    error::TableError,
    map::table::HashTable,
    types::{Key, Value},
};

/// 可跨线程共享的哈希表
///
/// 内部只有一把锁，扩容在持锁期间完成。
#[derive(Debug)]
pub struct SyncHashTable {
    inner: Mutex<HashTable>,
}

impl SyncHashTable {
    pub fn new(table: HashTable) -> Self {
        Self {
            inner: Mutex::new(table),
        }
    }

    /// 创建并初始化指定桶数量的表
    pub fn with_size(size: usize) -> Result<Self, TableError> {
        HashTable::with_size(size).map(Self::new)
    }

    pub fn add(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<(), TableError> {
        self.inner.lock().add(key, value)
    }

    pub fn update(&self, key: impl Into<Key>, value: impl Into<Value>) -> bool {
        self.inner.lock().update(key, value)
    }

    pub fn remove(&self, key: impl Into<Key>) -> bool {
        self.inner.lock().remove(key)
    }

    /// 读取值的副本，锁不会泄露给调用方
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        self.inner.lock().get(key).cloned()
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.inner.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    /// 在持锁状态下执行只读闭包
    pub fn with_table<R>(&self, f: impl FnOnce(&HashTable) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn with_table_mut<R>(&self, f: impl FnOnce(&mut HashTable) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_inner(self) -> HashTable {
        self.inner.into_inner()
    }
}

impl From<HashTable> for SyncHashTable {
    fn from(table: HashTable) -> Self {
        Self::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    #[test]
    fn test_concurrent_adds() {
        let table = Arc::new(SyncHashTable::with_size(4).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let table = Arc::clone(&table);
                thread::spawn(move || {
                    for i in 0..100 {
                        table.add(format!("t{}-{}", t, i), i).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(table.len(), 400);
        assert_eq!(table.get("t3-99"), Some(Value::from(99)));
        let total = table.with_table(|inner| inner.iter().count());
        assert_eq!(total, 400);
    }

    #[test]
    fn test_update_remove_through_lock() {
        let table = SyncHashTable::with_size(2).unwrap();
        table.add("k", 1).unwrap();
        assert!(table.update("k", 2));
        assert_eq!(table.get("k"), Some(Value::from(2)));
        assert!(table.remove("k"));
        assert!(table.is_empty());
        assert!(!table.contains_key("k"));

        let inner = table.into_inner();
        assert_eq!(inner.size(), 2);
    }
}
