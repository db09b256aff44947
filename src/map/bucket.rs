// src/map/bucket.rs
//! 桶实现 - 由单向链表串起的同下标条目

use std::fmt;

use crate::{
    list::{singly, SinglyLinkedList},
    types::{Entry, Key, Value},
};

/// 哈希桶
///
/// 条目按插入顺序挂在链尾，查找、更新、删除都从链头开始扫描，
/// 命中第一个相同的键即停止。
#[derive(Default, Clone)]
pub struct Bucket {
    entries: SinglyLinkedList<Entry>,
}

impl Bucket {
    pub fn new() -> Self {
        Self {
            entries: SinglyLinkedList::new(),
        }
    }

    /// 追加条目到链尾，不检查键是否已存在
    pub fn add(&mut self, entry: Entry) {
        log_debug!("bucket add {}", entry);
        self.entries.push_back(entry);
    }

    /// 原地覆盖第一个匹配条目的值
    pub fn update(&mut self, key: &Key, value: Value) -> bool {
        match self.entries.find_mut(|entry| entry.key == *key) {
            Some(entry) => {
                log_debug!("bucket update {}: {} -> {}", key, entry.value, value);
                entry.value = value;
                true
            }
            None => false,
        }
    }

    /// 摘除第一个匹配条目，桶本身保留
    pub fn remove(&mut self, key: &Key) -> Option<Entry> {
        let removed = self.entries.remove_first(|entry| entry.key == *key);
        if let Some(_entry) = &removed {
            log_debug!("bucket remove {}", _entry);
        }
        removed
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    /// 桶内条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 条目数超过阈值即视为"过载"
    pub fn is_stressed(&self, threshold: usize) -> bool {
        self.len() > threshold
    }

    pub fn iter(&self) -> singly::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// 按链顺序交出全部条目
    pub(crate) fn into_entries(self) -> singly::IntoIter<Entry> {
        self.entries.into_iter()
    }
}

impl fmt::Debug for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bucket(entries: {})", self.len())
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries)
    }
}
