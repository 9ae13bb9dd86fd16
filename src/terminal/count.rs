use crate::terminal::Terminal;

/// 统计满足条件的元素数量，空序列为0。
pub struct Count<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Count<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Count { iter, predicate }
    }
}

impl<I, P> Terminal for Count<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = usize;

    fn execute(mut self) -> usize {
        let mut count = 0;
        for item in self.iter {
            if (self.predicate)(&item) {
                count += 1;
            }
        }
        count
    }
}

/// 是否所有元素都满足条件，遇到首个不满足的元素即停止。空序列为`true`。
pub struct All<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> All<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        All { iter, predicate }
    }
}

impl<I, P> Terminal for All<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = bool;

    fn execute(mut self) -> bool {
        for item in self.iter {
            if !(self.predicate)(&item) {
                return false;
            }
        }
        true
    }
}

/// 是否存在满足条件的元素，遇到首个满足的元素即停止。空序列为`false`。
pub struct Any<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Any<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Any { iter, predicate }
    }
}

impl<I, P> Terminal for Any<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = bool;

    fn execute(mut self) -> bool {
        for item in self.iter {
            if (self.predicate)(&item) {
                return true;
            }
        }
        false
    }
}
