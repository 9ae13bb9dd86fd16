/// 展开：每个上游元素映射为一组元素，按顺序逐个产出。
///
/// 当前展开结果中尚未产出的部分保存在`pending`中，耗尽后再拉取下一个上游元素，
/// 展开结果为空的上游元素直接跳过。
pub struct SelectMany<I, F, J>
where
    J: IntoIterator,
{
    iter: I,
    f: F,
    pending: Option<J::IntoIter>,
    finished: bool,
}

impl<I, F, J> SelectMany<I, F, J>
where
    I: Iterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    pub fn new(iter: I, f: F) -> Self {
        SelectMany { iter, f, pending: None, finished: false }
    }
}

impl<I, F, J> Iterator for SelectMany<I, F, J>
where
    I: Iterator,
    F: FnMut(I::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(pending) = &mut self.pending
                && let Some(item) = pending.next()
            {
                return Some(item);
            }
            match self.iter.next() {
                Some(outer) => self.pending = Some((self.f)(outer).into_iter()),
                None => {
                    self.pending = None;
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_many() {
        let input = vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7, 8, 9, 10, 11], vec![12]];
        assert_eq!(SelectMany::new(input.into_iter(), |v| v).collect::<Vec<_>>(), (0..=12).collect::<Vec<_>>());
        let input = vec![vec!['a', 'b', 'c', 'd'], vec!['e', 'f'], vec!['g', 'h', 'i', 'j']];
        assert_eq!(SelectMany::new(input.into_iter(), |v| v).collect::<String>(), "abcdefghij".to_string());
    }

    #[test]
    fn test_select_many_skips_empty() {
        let input = vec![vec![], vec![1], vec![], vec![], vec![2, 3], vec![]];
        assert_eq!(SelectMany::new(input.into_iter(), |v| v).collect::<Vec<i32>>(), vec![1, 2, 3]);
        assert_eq!(SelectMany::new(0..5, |_| Vec::<i32>::new()).next(), None);
    }

    #[test]
    fn test_select_many_pulls_outer_on_demand() {
        let mut pulled = 0;
        let source = (1..=3).inspect(|_| pulled += 1);
        let mut iter = SelectMany::new(source, |n| 0..n);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        drop(iter);
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_select_many_stays_finished() {
        let mut iter = SelectMany::new(0..2, |n| vec![n; 2]);
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![0, 0, 1, 1]);
        assert_eq!(iter.next(), None);
    }
}
