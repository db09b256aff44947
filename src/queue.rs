//! 队列 - 先进先出 (FIFO)，尾部入队、头部出队

use std::fmt;

use crate::list::{ArenaIter, DoublyLinkedList};

/// 先进先出队列
pub struct Queue<T> {
    items: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
        }
    }

    /// 入队
    pub fn enqueue(&mut self, data: T) {
        self.items.push_back(data);
    }

    /// 出队，空队列返回 None
    pub fn dequeue(&mut self) -> Option<T> {
        let front = self.items.pop_front();
        if front.is_some() {
            log_debug!("queue dequeue, {} left", self.items.len());
        }
        front
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 从队头到队尾遍历
    pub fn iter(&self) -> ArenaIter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("front_first", &self.items).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");
        assert_eq!(queue.peek(), Some(&"a"));
        assert_eq!(queue.dequeue(), Some("a"));
        queue.enqueue("d");
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c", "d"]);
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), Some("d"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_clear() {
        let mut queue: Queue<i32> = (0..5).collect();
        assert_eq!(queue.len(), 5);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        queue.enqueue(1);
        assert_eq!(queue.peek(), Some(&1));
    }
}
