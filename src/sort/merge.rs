//! 归并排序 - 对半拆分，分别排序后合并，O(n log n)

/// 稳定的自顶向下归并排序，返回新的有序序列
pub fn merge_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let middle = items.len() / 2;
    let left = merge_sort(&items[..middle]);
    let right = merge_sort(&items[middle..]);
    merge(left, right)
}

/// 合并两个有序序列；相等时先取左侧，保证稳定
fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if r < l { right.next() } else { left.next() };
        result.extend(next);
    }
    result.extend(left);
    result.extend(right);
    result
}
