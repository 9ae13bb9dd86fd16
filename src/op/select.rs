/// 映射：每拉取一次上游，对元素应用映射函数后产出。
pub struct Select<I, F> {
    iter: I,
    f: F,
}

impl<I: Iterator, F> Select<I, F> {
    pub fn new<U>(iter: I, f: F) -> Self
    where
        F: FnMut(I::Item) -> U,
    {
        Select { iter, f }
    }
}

impl<I, F, U> Iterator for Select<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// 观察：对每个元素执行副作用函数，然后原样产出。
pub struct Inspect<I, F> {
    iter: I,
    f: F,
}

impl<I: Iterator, F: FnMut(&I::Item)> Inspect<I, F> {
    pub fn new(iter: I, f: F) -> Self {
        Inspect { iter, f }
    }
}

impl<I, F> Iterator for Inspect<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        (self.f)(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(Select::new(0..5, |i| i * 2).collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
        assert_eq!(Select::new("abc".chars(), |c| c.to_ascii_uppercase()).collect::<String>(), "ABC");
        assert_eq!(Select::new(std::iter::empty::<i32>(), |i| i + 1).next(), None);
    }

    #[test]
    fn test_select_is_lazy() {
        let mut called = 0;
        let mut iter = Select::new(0..10, |i| {
            called += 1;
            i
        });
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        drop(iter);
        assert_eq!(called, 2);
    }

    #[test]
    fn test_inspect() {
        let mut seen = Vec::new();
        let out = Inspect::new(vec!["a", "b", "c"].into_iter(), |s: &&str| seen.push(s.to_string())).collect::<Vec<_>>();
        assert_eq!(out, vec!["a", "b", "c"]);
        assert_eq!(seen, vec!["a", "b", "c"]);
    }
}
