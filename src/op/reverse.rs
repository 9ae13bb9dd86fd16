/// 逆序。
///
/// 与其他阶段不同，该阶段不是惰性的：构建时即拉取并缓冲上游全部元素，
/// 内存占用与上游长度成正比。之后每次拉取从缓冲末尾弹出一个元素。
pub struct Reverse<T> {
    buffer: Vec<T>,
}

impl<T> Reverse<T> {
    pub fn new(iter: impl Iterator<Item = T>) -> Self {
        Reverse { buffer: iter.collect() }
    }

    /// 缓冲中剩余的元素数量。
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl<T> Iterator for Reverse<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(Reverse::new(0..5).collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
        assert_eq!(Reverse::new(std::iter::empty::<i32>()).next(), None);
        assert_eq!(Reverse::new(Reverse::new(0..5)).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_drains_on_construction() {
        let mut pulled = 0;
        let reverse = Reverse::new((0..5).inspect(|_| pulled += 1));
        assert_eq!(reverse.buffered(), 5);
        drop(reverse);
        assert_eq!(pulled, 5);
    }

    #[test]
    fn test_reverse_keeps_falsy_values() {
        assert_eq!(Reverse::new(vec![0, 0, 1].into_iter()).collect::<Vec<_>>(), vec![1, 0, 0]);
        assert_eq!(Reverse::new(vec![None, Some(1)].into_iter()).collect::<Vec<_>>(), vec![Some(1), None]);
    }
}
