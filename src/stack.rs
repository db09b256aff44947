//! 栈 - 后进先出 (LIFO)，新元素压在链头

use std::fmt;

use crate::list::{singly, SinglyLinkedList};

/// 后进先出栈
#[derive(Clone)]
pub struct Stack<T> {
    items: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self {
            items: SinglyLinkedList::new(),
        }
    }

    /// 压栈
    pub fn push(&mut self, data: T) {
        self.items.push_front(data);
    }

    /// 弹出栈顶，空栈返回 None
    pub fn pop(&mut self) -> Option<T> {
        let top = self.items.pop_front();
        if top.is_some() {
            log_debug!("stack pop, {} left", self.items.len());
        }
        top
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

    /// 从栈顶到栈底遍历
    pub fn iter(&self) -> singly::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("top_first", &self.items).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_clear_and_iter() {
        let mut stack: Stack<&str> = vec!["a", "b", "c"].into_iter().collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec!["c", "b", "a"]);
        assert_eq!(stack.len(), 3);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }
}
