use crate::KlinkRes;
use crate::config::{Config, is_stats};
use crate::op::{
    Concat, Inspect, KeyValue, KeyValuePair, Op, Reverse, Select, SelectMany, Skip, SkipWhile, Take, TakeWhile, Where,
};
use crate::terminal::{
    Aggregate, AggregateUnseeded, All, Any, Average, Count, ElementAt, ElementAtOrDefault, First, FirstOrDefault,
    GroupBy, Last, LastOrDefault, Single, SingleOrDefault, Sum, Terminal, ToDictionary, ToVec,
};
use crate::trace::{self, Counted, PullCounter};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::Add;

type Head<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// 流水线句柄，持有当前的流水线头部。
///
/// 链式方法（`map`、`filter`、`skip`……）用新阶段包装当前头部并返回新的句柄，不做任何计算；
/// 终止方法（`count`、`first`、`to_vec`……）构建终止操作并立即执行，返回具体结果。
/// 句柄本身也是迭代器，可以手动拉取或用于`for`循环。
///
/// ```
/// use klink::Klink;
///
/// let evens = Klink::range(1, 100, 1).filter(|i| i % 2 == 0).map(|i| i * i).take(3).to_vec();
/// assert_eq!(evens, vec![4, 16, 36]);
/// ```
pub struct Klink<'a, T> {
    iter: Head<'a, T>,
    stages: Vec<Op>,
    configs: Vec<Config>,
    counter: Option<PullCounter>,
}

impl<'a, T: 'a> Klink<'a, T> {
    pub(crate) fn source<I>(name: &'static str, iter: I) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        Klink { iter: Box::new(iter), stages: vec![Op::Source(name)], configs: Vec::new(), counter: None }
    }

    fn chain<U, I>(self, op: Op, wrap: impl FnOnce(Head<'a, T>) -> I) -> Klink<'a, U>
    where
        I: Iterator<Item = U> + 'a,
    {
        let Klink { iter, mut stages, configs, counter } = self;
        stages.push(op);
        Klink { iter: Box::new(wrap(iter)), stages, configs, counter }
    }

    fn run<R>(self, terminal: &'static str, execute: impl FnOnce(Head<'a, T>) -> R) -> R {
        trace::on_terminal(&self.stages, &self.configs, terminal);
        let res = execute(self.iter);
        trace::on_finished(&self.configs, terminal, self.counter.as_ref());
        res
    }

    /// 开启配置，对之后的所有阶段和终止操作生效。
    ///
    /// 开启[`Config::Stats`]时从当前头部开始统计拉取次数。
    pub fn configure(mut self, config: Config) -> Self {
        if self.configs.contains(&config) {
            return self;
        }
        self.configs.push(config);
        if is_stats(&self.configs) && self.counter.is_none() {
            let counter = PullCounter::default();
            self.iter = Box::new(Counted::new(self.iter, counter.clone()));
            self.counter = Some(counter);
        }
        self
    }

    /// 已从统计点拉取的元素数量，未开启[`Config::Stats`]时为`None`。
    pub fn pulled(&self) -> Option<usize> {
        self.counter.as_ref().map(PullCounter::get)
    }

    /// 流水线描述，例如`of -> where -> take(3)`。
    pub fn plan(&self) -> String {
        trace::plan(&self.stages)
    }

    /* **************************************** 链式方法 **************************************** */

    /// 对每个元素应用`f`。
    pub fn map<U, F>(self, f: F) -> Klink<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.chain(Op::Select, |iter| Select::new(iter, f))
    }

    /// 保留满足`predicate`的元素。
    pub fn filter<P>(self, predicate: P) -> Klink<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(Op::Where, |iter| Where::new(iter, predicate))
    }

    /// 每个元素被拉取时执行`f`，元素原样传递。
    pub fn inspect<F>(self, f: F) -> Klink<'a, T>
    where
        F: FnMut(&T) + 'a,
    {
        self.chain(Op::Inspect, |iter| Inspect::new(iter, f))
    }

    /// 丢弃前`count`个元素。
    pub fn skip(self, count: usize) -> Klink<'a, T> {
        self.chain(Op::Skip(count), |iter| Skip::new(iter, count))
    }

    /// 持续丢弃满足`predicate`的元素，条件首次不满足后不再判断。
    pub fn skip_while<P>(self, predicate: P) -> Klink<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(Op::SkipWhile, |iter| SkipWhile::new(iter, predicate))
    }

    /// 保留前`count`个元素。
    pub fn take(self, count: usize) -> Klink<'a, T> {
        self.chain(Op::Take(count), |iter| Take::new(iter, count))
    }

    /// 持续保留满足`predicate`的元素，条件首次不满足后结束。
    pub fn take_while<P>(self, predicate: P) -> Klink<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(Op::TakeWhile, |iter| TakeWhile::new(iter, predicate))
    }

    /// 在当前序列之后拼接`other`。
    pub fn concat<J>(self, other: J) -> Klink<'a, T>
    where
        J: IntoIterator<Item = T>,
        J::IntoIter: 'a,
    {
        self.chain(Op::Concat, |iter| Concat::new(iter, other.into_iter()))
    }

    /// 将每个元素映射为键值对。
    pub fn key_value<K, V, KF, VF>(self, key_fn: KF, value_fn: VF) -> Klink<'a, KeyValuePair<K, V>>
    where
        K: 'a,
        V: 'a,
        KF: FnMut(&T) -> K + 'a,
        VF: FnMut(T) -> V + 'a,
    {
        self.chain(Op::KeyValue, |iter| KeyValue::new(iter, key_fn, value_fn))
    }

    /// 将每个元素映射为一组元素后按顺序展开。
    pub fn select_many<U, J, F>(self, f: F) -> Klink<'a, U>
    where
        U: 'a,
        J: IntoIterator<Item = U> + 'a,
        J::IntoIter: 'a,
        F: FnMut(T) -> J + 'a,
    {
        self.chain(Op::SelectMany, |iter| SelectMany::new(iter, f))
    }

    /// 逆序。
    ///
    /// 调用时即拉取并缓冲全部上游元素，不是惰性的。
    pub fn reverse(self) -> Klink<'a, T> {
        let Klink { iter, mut stages, configs, counter } = self;
        let reverse = Reverse::new(iter);
        trace::on_buffered(&stages, &configs, Op::Reverse, reverse.buffered());
        stages.push(Op::Reverse);
        Klink { iter: Box::new(reverse), stages, configs, counter }
    }

    /* **************************************** 终止方法 **************************************** */

    /// 元素数量。
    pub fn count(self) -> usize {
        self.run("count", |iter| Count::new(iter, |_| true).execute())
    }

    /// 满足`predicate`的元素数量。
    pub fn count_where(self, predicate: impl FnMut(&T) -> bool) -> usize {
        self.run("count", |iter| Count::new(iter, predicate).execute())
    }

    /// 是否所有元素都满足`predicate`，空序列为`true`。
    pub fn all(self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.run("all", |iter| All::new(iter, predicate).execute())
    }

    /// 序列是否非空。
    pub fn any(self) -> bool {
        self.run("any", |iter| Any::new(iter, |_| true).execute())
    }

    /// 是否存在满足`predicate`的元素。
    pub fn any_where(self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.run("any", |iter| Any::new(iter, predicate).execute())
    }

    /// 唯一元素。
    /// ```
    /// use klink::{ErrKind, Klink};
    ///
    /// assert_eq!(Klink::from_vec(vec![1]).single(), Ok(1));
    /// assert_eq!(Klink::from_vec(vec![1, 2]).single().unwrap_err().kind(), ErrKind::MultipleElements);
    /// assert_eq!(Klink::<i32>::empty().single().unwrap_err().kind(), ErrKind::EmptySequence);
    /// ```
    pub fn single(self) -> KlinkRes<T> {
        self.run("single", |iter| Single::new(iter).execute())
    }

    /// 唯一元素，空序列为`None`。
    pub fn single_or_default(self) -> KlinkRes<Option<T>> {
        self.run("single_or_default", |iter| SingleOrDefault::new(iter).execute())
    }

    /// 首个元素。
    pub fn first(self) -> KlinkRes<T> {
        self.run("first", |iter| First::new(iter, |_| true).execute())
    }

    /// 首个满足`predicate`的元素。
    pub fn first_where(self, predicate: impl FnMut(&T) -> bool) -> KlinkRes<T> {
        self.run("first", |iter| First::new(iter, predicate).execute())
    }

    pub fn first_or_default(self) -> Option<T> {
        self.run("first_or_default", |iter| FirstOrDefault::new(iter, |_| true).execute())
    }

    pub fn first_or_default_where(self, predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.run("first_or_default", |iter| FirstOrDefault::new(iter, predicate).execute())
    }

    /// 最后一个元素，始终扫描整个序列。
    pub fn last(self) -> KlinkRes<T> {
        self.run("last", |iter| Last::new(iter, |_| true).execute())
    }

    /// 最后一个满足`predicate`的元素，始终扫描整个序列。
    pub fn last_where(self, predicate: impl FnMut(&T) -> bool) -> KlinkRes<T> {
        self.run("last", |iter| Last::new(iter, predicate).execute())
    }

    pub fn last_or_default(self) -> Option<T> {
        self.run("last_or_default", |iter| LastOrDefault::new(iter, |_| true).execute())
    }

    pub fn last_or_default_where(self, predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.run("last_or_default", |iter| LastOrDefault::new(iter, predicate).execute())
    }

    /// 索引`index`（从0开始）处的元素。
    pub fn element_at(self, index: usize) -> KlinkRes<T> {
        self.run("element_at", |iter| ElementAt::new(iter, index).execute())
    }

    pub fn element_at_or_default(self, index: usize) -> Option<T> {
        self.run("element_at_or_default", |iter| ElementAtOrDefault::new(iter, index).execute())
    }

    /// 按顺序物化全部元素。
    pub fn to_vec(self) -> Vec<T> {
        self.run("to_vec", |iter| ToVec::new(iter).execute())
    }

    /// 物化为键值映射，重复的键以最后写入的值为准。
    pub fn to_dictionary<K, V>(self, key_fn: impl FnMut(&T) -> K, value_fn: impl FnMut(T) -> V) -> FxHashMap<K, V>
    where
        K: Eq + Hash,
    {
        self.run("to_dictionary", |iter| ToDictionary::new(iter, key_fn, value_fn).execute())
    }

    /// 按键分组，组内保持原始顺序。
    /// ```
    /// use klink::Klink;
    ///
    /// let groups = Klink::range(1, 9, 1).group_by(|k| k % 2);
    /// assert_eq!(groups[&1], vec![1, 3, 5, 7, 9]);
    /// assert_eq!(groups[&0], vec![2, 4, 6, 8]);
    /// ```
    pub fn group_by<K>(self, key_fn: impl FnMut(&T) -> K) -> FxHashMap<K, Vec<T>>
    where
        K: Eq + Hash,
    {
        self.run("group_by", |iter| GroupBy::new(iter, key_fn).execute())
    }

    /// 以`seed`为初始值左折叠。
    /// ```
    /// use klink::Klink;
    ///
    /// assert_eq!(Klink::range(1, 9, 1).aggregate(1, |out, i| out * i), 362880);
    /// ```
    pub fn aggregate<A>(self, seed: A, f: impl FnMut(A, T) -> A) -> A {
        self.run("aggregate", |iter| Aggregate::new(iter, seed, f).execute())
    }

    /// 以首个元素为初始值左折叠，空序列报错。
    pub fn aggregate_unseeded(self, f: impl FnMut(T, T) -> T) -> KlinkRes<T> {
        self.run("aggregate", |iter| AggregateUnseeded::new(iter, f).execute())
    }

    /// 对`f`的结果求和，空序列为`N::default()`。
    pub fn sum<N>(self, f: impl FnMut(T) -> N) -> N
    where
        N: Add<Output = N> + Default,
    {
        self.run("sum", |iter| Sum::new(iter, f).execute())
    }

    /// 对`f`的结果求平均值，空序列报[`crate::KlinkErr::DivisionByZero`]。
    pub fn average(self, f: impl FnMut(T) -> f64) -> KlinkRes<f64> {
        self.run("average", |iter| Average::new(iter, f).execute())
    }
}

impl<T> Iterator for Klink<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// 先收集为`Vec`再包装，因此会立即消耗`iter`。
impl<'a, T: 'a> FromIterator<T> for Klink<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Klink::from_vec(iter.into_iter().collect())
    }
}

impl<T> Debug for Klink<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Klink").field("stages", &self.stages).field("configs", &self.configs).finish_non_exhaustive()
    }
}
