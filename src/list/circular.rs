//! 环形双向链表 - 尾节点的后继是头节点，头节点的前驱是尾节点

use std::fmt;

use super::arena::{ArenaIter, NodeArena};

/// 环形双向链表
pub struct CircularList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
    len: usize,
}

impl<T> CircularList<T> {
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn tail(&self) -> Option<usize> {
        self.arena.prev_of(self.head?)
    }

    /// 插入到尾部（头节点之前）
    pub fn push_back(&mut self, data: T) {
        let idx = self.arena.insert(data);
        match (self.head, self.tail()) {
            (Some(head), Some(tail)) => {
                self.arena.set_next(tail, Some(idx));
                self.arena.set_prev(idx, Some(tail));
                self.arena.set_next(idx, Some(head));
                self.arena.set_prev(head, Some(idx));
            }
            _ => {
                self.arena.set_next(idx, Some(idx));
                self.arena.set_prev(idx, Some(idx));
                self.head = Some(idx);
            }
        }
        self.len += 1;
    }

    pub fn front(&self) -> Option<&T> {
        self.arena.get(self.head?).map(|node| &node.data)
    }

    pub fn back(&self) -> Option<&T> {
        self.arena.get(self.tail()?).map(|node| &node.data)
    }

    /// 头指针沿环前进一步
    pub fn rotate(&mut self) {
        if let Some(head) = self.head {
            self.head = self.arena.next_of(head);
        }
    }

    /// 头指针沿环后退一步
    pub fn rotate_back(&mut self) {
        self.head = self.tail();
    }

    fn unlink(&mut self, idx: usize) -> Option<T> {
        let node = self.arena.take(idx)?;
        if self.len == 1 {
            self.head = None;
        } else if let (Some(prev), Some(next)) = (node.prev, node.next) {
            self.arena.set_next(prev, Some(next));
            self.arena.set_prev(next, Some(prev));
            if self.head == Some(idx) {
                self.head = Some(next);
            }
        }
        self.len -= 1;
        Some(node.data)
    }

    pub fn remove_first<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let idx = self.arena.position(self.head, self.len, pred)?;
        self.unlink(idx)
    }

    pub fn find_mut<F>(&mut self, pred: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let idx = self.arena.position(self.head, self.len, pred)?;
        self.arena.get_mut(idx).map(|node| &mut node.data)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.len = 0;
    }

    /// 从头节点出发绕环一周
    pub fn iter(&self) -> ArenaIter<'_, T> {
        self.arena.walk(self.head, self.len, true)
    }

    /// 无限绕环遍历，空表立即结束
    pub fn iter_cycle(&self) -> ArenaIter<'_, T> {
        let remaining = if self.is_empty() { 0 } else { usize::MAX };
        self.arena.walk(self.head, remaining, true)
    }
}

impl<T: PartialEq> CircularList<T> {
    /// 追加元素（`push_back` 的别名）
    pub fn add(&mut self, data: T) {
        self.push_back(data);
    }

    pub fn update(&mut self, data: &T, replacement: T) -> bool {
        match self.find_mut(|item| item == data) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, data: &T) -> bool {
        self.remove_first(|item| item == data).is_some()
    }

    pub fn contains(&self, data: &T) -> bool {
        self.iter().any(|item| item == data)
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for item in self.iter() {
            write!(f, "{} -> ", item)?;
        }
        write!(f, "...)")
    }
}
