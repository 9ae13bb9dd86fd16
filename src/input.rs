use crate::Integer;
use crate::klink::Klink;

impl<'a, T: 'a> Klink<'a, T> {
    /// 从有限有序序列构建，按顺序逐个产出每个元素一次。
    /// ```
    /// use klink::Klink;
    ///
    /// assert_eq!(Klink::from_vec(vec![1, 2, 3]).map(|i| i * 2).to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn from_vec(values: Vec<T>) -> Self {
        Klink::source("of", values.into_iter())
    }

    /// 惰性包装任意迭代器。
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Klink::source("iter", iter.into_iter())
    }

    /// 空序列。
    pub fn empty() -> Self {
        Klink::source("empty", std::iter::empty())
    }

    /// 重复`value`共`count`次；`count`为`None`时无限重复，只能依靠`take`等提前结束的阶段终止。
    /// ```
    /// use klink::Klink;
    ///
    /// assert_eq!(Klink::repeat("a", Some(2)).to_vec(), vec!["a", "a"]);
    /// assert_eq!(Klink::repeat(7, None).take(3).to_vec(), vec![7, 7, 7]);
    /// ```
    pub fn repeat(value: T, count: Option<usize>) -> Self
    where
        T: Clone,
    {
        match count {
            Some(count) => Klink::source("repeat", std::iter::repeat_n(value, count)),
            None => Klink::source("repeat", std::iter::repeat(value)),
        }
    }
}

impl Klink<'static, Integer> {
    /// 生成`[start, end]`范围内的整数，包含两端。
    ///
    /// `step`为正值时正序生成，为负值时逆序生成（从`end`开始），步长取绝对值；
    /// 范围为空（`start > end`）时无数据。`step`为0时无限重复`start`。
    /// ```
    /// use klink::Klink;
    ///
    /// assert_eq!(Klink::range(0, 10, 2).to_vec(), vec![0, 2, 4, 6, 8, 10]);
    /// assert_eq!(Klink::range(0, 4, -1).to_vec(), vec![4, 3, 2, 1, 0]);
    /// assert!(Klink::range(10, 0, 1).to_vec().is_empty());
    /// ```
    pub fn range(start: Integer, end: Integer, step: Integer) -> Self {
        Klink::source("range", range_to_iter(start, end, step))
    }
}

fn range_to_iter(start: Integer, end: Integer, step: Integer) -> Box<dyn DoubleEndedIterator<Item = Integer>> {
    let iter = RangeIter { start, end, step: step.saturating_abs(), next: start, next_back: end, overflowed: false };
    if step < 0 { Box::new(iter.rev()) } else { Box::new(iter) }
}

#[derive(Debug, Eq, PartialEq)]
struct RangeIter {
    start: Integer,
    end: Integer,
    step: Integer,
    next: Integer,
    next_back: Integer,
    overflowed: bool,
}

impl Iterator for RangeIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.overflowed && self.next >= self.start && self.next <= self.end && self.next <= self.next_back {
            let res = Some(self.next);
            // 越过整数边界后不再产出
            match self.next.checked_add(self.step) {
                Some(next) => self.next = next,
                None => self.overflowed = true,
            }
            res
        } else {
            None
        }
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if !self.overflowed && self.next_back >= self.start && self.next_back <= self.end && self.next_back >= self.next
        {
            let res = Some(self.next_back);
            match self.next_back.checked_sub(self.step) {
                Some(next_back) => self.next_back = next_back,
                None => self.overflowed = true,
            }
            res
        } else {
            None
        }
    }
}
