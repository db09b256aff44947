//! 单向链表 - 每个节点持有数据和指向下一个节点的链接
//!
//! 头部插入/删除为 O(1)，尾部追加和查找为 O(n)。

use std::fmt;

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// 单向链表
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 追加到链尾，保持插入顺序
    pub fn push_back(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
        self.len += 1;
    }

    /// 插入到链头
    pub fn push_front(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data, next }));
        self.len += 1;
    }

    /// 取出链头
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.data
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// 从链头开始查找第一个满足条件的元素
    pub fn find<F>(&self, mut pred: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|data| pred(data))
    }

    pub fn find_mut<F>(&mut self, mut pred: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter_mut().find(|data| pred(data))
    }

    /// 摘除从链头开始第一个满足条件的节点
    ///
    /// 链头与链中/链尾是两种摘除情形：前者移动 head，后者把前驱的
    /// next 接到被摘除节点的后继上。
    pub fn remove_first<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        if pred(&self.head.as_ref()?.data) {
            return self.pop_front();
        }

        let mut prev = self.head.as_mut()?;
        loop {
            let matched = match prev.next.as_ref() {
                Some(next) => pred(&next.data),
                None => return None,
            };
            if matched {
                let mut removed = prev.next.take()?;
                prev.next = removed.next.take();
                self.len -= 1;
                return Some(removed.data);
            }
            prev = prev.next.as_mut()?;
        }
    }

    pub fn clear(&mut self) {
        // 逐个释放，避免长链递归析构
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// 追加元素（`push_back` 的别名）
    pub fn add(&mut self, data: T) {
        self.push_back(data);
    }

    /// 把第一个等于 `data` 的元素替换为 `replacement`
    pub fn update(&mut self, data: &T, replacement: T) -> bool {
        match self.find_mut(|item| item == data) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    /// 删除第一个等于 `data` 的元素
    pub fn remove(&mut self, data: &T) -> bool {
        self.remove_first(|item| item == data).is_some()
    }

    pub fn contains(&self, data: &T) -> bool {
        self.iter().any(|item| item == data)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // 先反向压栈再整体翻转，保持 O(n)
        let mut reversed = SinglyLinkedList::new();
        for item in iter {
            reversed.push_front(item);
        }
        let mut list = SinglyLinkedList::new();
        while let Some(item) = reversed.pop_front() {
            list.push_front(item);
        }
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.data
        })
    }
}

pub struct IntoIter<T>(SinglyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
