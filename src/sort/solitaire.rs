//! "接龙"排序 - 反复取出剩余元素中的最大值压入输出，O(n²)

/// 选择最大值依次输出，结果为降序
///
/// 每轮取第一个最大值，因此相等元素保持原有先后顺序。
/// 每个元素恰好输出一次。
pub fn solitaire_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut remaining = items.to_vec();
    let mut output = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        // 严格大于才替换，保留第一个最大值
        let highest = remaining
            .iter()
            .enumerate()
            .skip(1)
            .fold(0, |best, (i, item)| if *item > remaining[best] { i } else { best });
        output.push(remaining.remove(highest));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending() {
        assert_eq!(solitaire_sort(&[5, 3, 8, 1]), vec![8, 5, 3, 1]);
        assert_eq!(solitaire_sort::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_keeps_every_element() {
        let input = [3, 1, 3, 2, 1, 3];
        let output = solitaire_sort(&input);
        assert_eq!(output.len(), input.len());
        assert_eq!(output, vec![3, 3, 3, 2, 1, 1]);
    }

    #[test]
    fn test_equal_maxima_keep_original_order() {
        let input = [(2, 'a'), (1, 'b'), (2, 'c'), (2, 'd')];
        // 只按第一个分量比较
        #[derive(Clone, Debug, PartialEq)]
        struct ByRank(i32, char);
        impl PartialOrd for ByRank {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }
        let items: Vec<ByRank> = input.iter().map(|&(r, c)| ByRank(r, c)).collect();
        let labels: Vec<char> = solitaire_sort(&items).into_iter().map(|item| item.1).collect();
        assert_eq!(labels, vec!['a', 'c', 'd', 'b']);
    }

    #[test]
    fn test_strings() {
        assert_eq!(solitaire_sort(&["b", "c", "a"]), vec!["c", "b", "a"]);
    }
}
