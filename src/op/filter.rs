/// 过滤：持续拉取上游，直到遇到满足条件的元素或上游耗尽。
pub struct Where<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Where<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Where { iter, predicate }
    }
}

impl<I, P> Iterator for Where<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.iter.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// 持续丢弃满足条件的元素。条件首次不满足后，后续元素全部放行，不再判断条件。
pub struct SkipWhile<I, P> {
    iter: I,
    predicate: P,
    skipped: bool,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> SkipWhile<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        SkipWhile { iter, predicate, skipped: false }
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.skipped {
            loop {
                let item = self.iter.next()?;
                if !(self.predicate)(&item) {
                    self.skipped = true;
                    return Some(item);
                }
            }
        }
        self.iter.next()
    }
}

/// 持续保留满足条件的元素。条件首次不满足或上游耗尽后永久结束，不再拉取上游。
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    taken: bool,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> TakeWhile<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        TakeWhile { iter, predicate, taken: false }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.taken {
            return None;
        }
        match self.iter.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.taken = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.taken { (0, Some(0)) } else { (0, self.iter.size_hint().1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where() {
        assert_eq!(Where::new(0..10, |i| i % 3 == 0).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(Where::new(0..10, |_| false).collect::<Vec<_>>(), Vec::<i32>::new());
        assert_eq!(Where::new(0..0, |_| true).next(), None);
    }

    #[test]
    fn test_skip_while() {
        assert_eq!(SkipWhile::new(0..10, |i| *i < 5).collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
        assert_eq!(
            SkipWhile::new("abcdefghij".chars(), |c| *c != 'c').collect::<String>(),
            "cdefghij".to_string()
        );
        assert_eq!(SkipWhile::new(0..10, |_| true).next(), None);
        assert_eq!(SkipWhile::new(0..3, |_| false).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_skip_while_never_refilters() {
        let input = vec![0, 1, 2, 3, 4, 5, 6, 2, 8];
        assert_eq!(SkipWhile::new(input.into_iter(), |i| *i < 5).collect::<Vec<_>>(), vec![5, 6, 2, 8]);
    }

    #[test]
    fn test_take_while() {
        assert_eq!(TakeWhile::new(0..10, |i| *i < 5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(TakeWhile::new("abcdefghij".chars(), |c| *c != 'c').collect::<String>(), "ab".to_string());
        assert_eq!(TakeWhile::new(0..3, |_| true).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_while_stops_pulling() {
        let mut pulled = 0;
        let source = (0..10).inspect(|_| pulled += 1);
        let mut iter = TakeWhile::new(source, |i| *i < 2);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        drop(iter);
        assert_eq!(pulled, 3);
    }
}
