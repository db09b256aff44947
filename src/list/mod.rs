//! 链表模块 - 单向、双向与环形双向链表

mod arena;
pub mod circular;
pub mod doubly;
pub mod singly;

pub use arena::ArenaIter;
pub use circular::CircularList;
pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
