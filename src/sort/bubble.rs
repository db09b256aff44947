//! 冒泡排序 - 比较相邻元素，前者更大则交换，O(n²)

/// 原地冒泡排序，稳定；某一轮没有交换时提前结束
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
