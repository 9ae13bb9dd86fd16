/// 丢弃前N个元素，之后原样放行。
///
/// 首次拉取时才开始丢弃；若上游在丢弃完成前耗尽，则报告耗尽。
pub struct Skip<I> {
    iter: I,
    remaining: usize,
}

impl<I: Iterator> Skip<I> {
    pub fn new(iter: I, count: usize) -> Self {
        Skip { iter, remaining: count }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.iter.next()?;
            self.remaining -= 1;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.saturating_sub(self.remaining), upper.map(|upper| upper.saturating_sub(self.remaining)))
    }
}

/// 保留前N个元素。已产出N个或上游提前耗尽后，永久报告耗尽且不再拉取上游。
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I: Iterator> Take<I> {
    pub fn new(iter: I, count: usize) -> Self {
        Take { iter, remaining: count }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.iter.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (lower.min(self.remaining), Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip() {
        assert_eq!(Skip::new(0..10, 4).collect::<Vec<_>>(), vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(Skip::new("abcdefghij".chars(), 4).collect::<String>(), "efghij".to_string());
        assert_eq!(Skip::new(0..3, 0).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(Skip::new(0..3, 3).next(), None);
        assert_eq!(Skip::new(0..3, 100).next(), None);
    }

    #[test]
    fn test_skip_is_lazy() {
        let mut pulled = 0;
        let skip = Skip::new((0..10).inspect(|_| pulled += 1), 4);
        drop(skip);
        assert_eq!(pulled, 0);
    }

    #[test]
    fn test_take() {
        assert_eq!(Take::new(0..10, 4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(Take::new("abcdefghij".chars(), 4).collect::<String>(), "abcd".to_string());
        assert_eq!(Take::new(0..3, 100).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(Take::new(0..3, 0).next(), None);
    }

    #[test]
    fn test_take_zero_never_pulls() {
        let mut pulled = 0;
        let mut take = Take::new((0..10).inspect(|_| pulled += 1), 0);
        assert_eq!(take.next(), None);
        drop(take);
        assert_eq!(pulled, 0);
    }

    #[test]
    fn test_take_stops_on_infinite_source() {
        assert_eq!(Take::new(std::iter::repeat(7), 3).collect::<Vec<_>>(), vec![7, 7, 7]);
    }

    #[test]
    fn test_size_hint() {
        assert_eq!(Skip::new(0..10, 4).size_hint(), (6, Some(6)));
        assert_eq!(Skip::new(0..3, 4).size_hint(), (0, Some(0)));
        assert_eq!(Take::new(0..10, 4).size_hint(), (4, Some(4)));
        assert_eq!(Take::new(0..2, 4).size_hint(), (2, Some(2)));
        assert_eq!(Take::new(std::iter::repeat(1), 4).size_hint(), (4, Some(4)));
    }
}
