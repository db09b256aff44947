//! 节点池 - 双向链表与环形链表的节点存储
//!
//! 节点之间用槽位下标代替指针互相引用，释放的槽位进入空闲表复用。

/// 池内节点
#[derive(Debug)]
pub(crate) struct ArenaNode<T> {
    pub(crate) data: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Option<ArenaNode<T>>>,
    free: Vec<usize>,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// 放入一个未链接的节点，返回槽位下标
    pub(crate) fn insert(&mut self, data: T) -> usize {
        let node = ArenaNode {
            data,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// 取出节点并释放槽位
    pub(crate) fn take(&mut self, idx: usize) -> Option<ArenaNode<T>> {
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    pub(crate) fn get(&self, idx: usize) -> Option<&ArenaNode<T>> {
        self.slots.get(idx)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut ArenaNode<T>> {
        self.slots.get_mut(idx)?.as_mut()
    }

    pub(crate) fn next_of(&self, idx: usize) -> Option<usize> {
        self.get(idx)?.next
    }

    pub(crate) fn prev_of(&self, idx: usize) -> Option<usize> {
        self.get(idx)?.prev
    }

    pub(crate) fn set_next(&mut self, idx: usize, next: Option<usize>) {
        if let Some(node) = self.get_mut(idx) {
            node.next = next;
        }
    }

    pub(crate) fn set_prev(&mut self, idx: usize, prev: Option<usize>) {
        if let Some(node) = self.get_mut(idx) {
            node.prev = prev;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// 当前占用的节点数
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// 从 `start` 出发沿链接走最多 `remaining` 步
    pub(crate) fn walk(&self, start: Option<usize>, remaining: usize, forward: bool) -> ArenaIter<'_, T> {
        ArenaIter {
            arena: self,
            cursor: start,
            remaining,
            forward,
        }
    }

    /// 从 `start` 出发找到第一个满足条件的节点下标
    pub(crate) fn position<F>(&self, start: Option<usize>, remaining: usize, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = start;
        for _ in 0..remaining {
            let idx = cursor?;
            let node = self.get(idx)?;
            if pred(&node.data) {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }
}

/// 按链接顺序遍历节点数据的迭代器
pub struct ArenaIter<'a, T> {
    arena: &'a NodeArena<T>,
    cursor: Option<usize>,
    remaining: usize,
    forward: bool,
}

impl<'a, T> Iterator for ArenaIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.cursor?)?;
        self.cursor = if self.forward { node.next } else { node.prev };
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
