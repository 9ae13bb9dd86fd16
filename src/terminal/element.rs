use crate::KlinkRes;
use crate::err::KlinkErr;
use crate::terminal::Terminal;

/// 唯一元素。最多拉取两个元素：若第二次拉取仍有值则报错，不再继续消耗上游。
fn single_of<I: Iterator>(mut iter: I, op: &'static str) -> KlinkRes<Option<I::Item>> {
    match iter.next() {
        Some(item) => match iter.next() {
            Some(_) => Err(KlinkErr::MultipleElements { op }),
            None => Ok(Some(item)),
        },
        None => Ok(None),
    }
}

/// 首个满足条件的元素，找到即停止。
fn first_of<I: Iterator, P: FnMut(&I::Item) -> bool>(iter: I, mut predicate: P) -> Option<I::Item> {
    for item in iter {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

/// 最后一个满足条件的元素，始终扫描整个序列。
fn last_of<I: Iterator, P: FnMut(&I::Item) -> bool>(iter: I, mut predicate: P) -> Option<I::Item> {
    let mut last = None;
    for item in iter {
        if predicate(&item) {
            last = Some(item);
        }
    }
    last
}

/// 拉取`index + 1`次，返回最后一次拉取的值；上游提前耗尽则为`None`。
fn nth_of<I: Iterator>(mut iter: I, index: usize) -> Option<I::Item> {
    for _ in 0..index {
        iter.next()?;
    }
    iter.next()
}

/// 唯一元素，空序列或存在多个元素时报错。
pub struct Single<I> {
    iter: I,
}

impl<I: Iterator> Single<I> {
    pub fn new(iter: I) -> Self {
        Single { iter }
    }
}

impl<I: Iterator> Terminal for Single<I> {
    type Output = KlinkRes<I::Item>;

    fn execute(self) -> Self::Output {
        single_of(self.iter, "single")?.ok_or(KlinkErr::EmptySequence { op: "single" })
    }
}

/// 唯一元素，空序列时为`None`，存在多个元素时报错。
pub struct SingleOrDefault<I> {
    iter: I,
}

impl<I: Iterator> SingleOrDefault<I> {
    pub fn new(iter: I) -> Self {
        SingleOrDefault { iter }
    }
}

impl<I: Iterator> Terminal for SingleOrDefault<I> {
    type Output = KlinkRes<Option<I::Item>>;

    fn execute(self) -> Self::Output {
        single_of(self.iter, "single_or_default")
    }
}

/// 首个满足条件的元素，不存在时报错。
pub struct First<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> First<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        First { iter, predicate }
    }
}

impl<I, P> Terminal for First<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = KlinkRes<I::Item>;

    fn execute(self) -> Self::Output {
        first_of(self.iter, self.predicate).ok_or(KlinkErr::EmptySequence { op: "first" })
    }
}

/// 首个满足条件的元素，不存在时为`None`。
pub struct FirstOrDefault<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> FirstOrDefault<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        FirstOrDefault { iter, predicate }
    }
}

impl<I, P> Terminal for FirstOrDefault<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = Option<I::Item>;

    fn execute(self) -> Self::Output {
        first_of(self.iter, self.predicate)
    }
}

/// 最后一个满足条件的元素，不存在时报错。
pub struct Last<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> Last<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        Last { iter, predicate }
    }
}

impl<I, P> Terminal for Last<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = KlinkRes<I::Item>;

    fn execute(self) -> Self::Output {
        last_of(self.iter, self.predicate).ok_or(KlinkErr::EmptySequence { op: "last" })
    }
}

/// 最后一个满足条件的元素，不存在时为`None`。
pub struct LastOrDefault<I, P> {
    iter: I,
    predicate: P,
}

impl<I: Iterator, P: FnMut(&I::Item) -> bool> LastOrDefault<I, P> {
    pub fn new(iter: I, predicate: P) -> Self {
        LastOrDefault { iter, predicate }
    }
}

impl<I, P> Terminal for LastOrDefault<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Output = Option<I::Item>;

    fn execute(self) -> Self::Output {
        last_of(self.iter, self.predicate)
    }
}

/// 指定索引（从0开始）处的元素，序列长度不足时报错。
pub struct ElementAt<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> ElementAt<I> {
    pub fn new(iter: I, index: usize) -> Self {
        ElementAt { iter, index }
    }
}

impl<I: Iterator> Terminal for ElementAt<I> {
    type Output = KlinkRes<I::Item>;

    fn execute(self) -> Self::Output {
        nth_of(self.iter, self.index).ok_or(KlinkErr::EmptySequence { op: "element_at" })
    }
}

/// 指定索引（从0开始）处的元素，序列长度不足时为`None`。
pub struct ElementAtOrDefault<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> ElementAtOrDefault<I> {
    pub fn new(iter: I, index: usize) -> Self {
        ElementAtOrDefault { iter, index }
    }
}

impl<I: Iterator> Terminal for ElementAtOrDefault<I> {
    type Output = Option<I::Item>;

    fn execute(self) -> Self::Output {
        nth_of(self.iter, self.index)
    }
}
