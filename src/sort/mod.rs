//! 排序算法 - 归并、"接龙"（选择最大值）与冒泡排序

pub mod bubble;
pub mod merge;
pub mod solitaire;

pub use bubble::bubble_sort;
pub use merge::merge_sort;
pub use solitaire::solitaire_sort;
