//! 双向链表 - 每个节点同时链接前驱和后继
//!
//! 两端插入/删除为 O(1)，可以从任意一端遍历。

use std::fmt;

use super::arena::{ArenaIter, NodeArena};

/// 双向链表
pub struct DoublyLinkedList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_back(&mut self, data: T) {
        let idx = self.arena.insert(data);
        self.arena.set_prev(idx, self.tail);
        match self.tail {
            Some(tail) => self.arena.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    pub fn push_front(&mut self, data: T) {
        let idx = self.arena.insert(data);
        self.arena.set_next(idx, self.head);
        match self.head {
            Some(head) => self.arena.set_prev(head, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    pub fn front(&self) -> Option<&T> {
        self.arena.get(self.head?).map(|node| &node.data)
    }

    pub fn back(&self) -> Option<&T> {
        self.arena.get(self.tail?).map(|node| &node.data)
    }

    /// 摘除节点：前驱与后继互相重新链接，缺失的一侧由 head/tail 接管
    fn unlink(&mut self, idx: usize) -> Option<T> {
        let node = self.arena.take(idx)?;
        match node.prev {
            Some(prev) => self.arena.set_next(prev, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.arena.set_prev(next, node.prev),
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Some(node.data)
    }

    /// 删除从头部开始第一个满足条件的元素
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
        self.tail = None;
        self.len = 0;
    }

    /// 从头到尾遍历
    pub fn iter(&self) -> ArenaIter<'_, T> {
        self.arena.walk(self.head, self.len, true)
    }

    /// 从尾到头遍历
    pub fn iter_rev(&self) -> ArenaIter<'_, T> {
        self.arena.walk(self.tail, self.len, false)
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
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

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
