use crate::KlinkRes;
use crate::err::KlinkErr;
use crate::terminal::Terminal;
use std::ops::Add;

/// 左折叠：累加值从`seed`开始，按顺序对每个元素应用`f(累加值, 元素)`。
pub struct Aggregate<I, A, F> {
    iter: I,
    seed: A,
    f: F,
}

impl<I: Iterator, A, F: FnMut(A, I::Item) -> A> Aggregate<I, A, F> {
    pub fn new(iter: I, seed: A, f: F) -> Self {
        Aggregate { iter, seed, f }
    }
}

impl<I, A, F> Terminal for Aggregate<I, A, F>
where
    I: Iterator,
    F: FnMut(A, I::Item) -> A,
{
    type Output = A;

    fn execute(mut self) -> A {
        let mut acc = self.seed;
        for item in self.iter {
            acc = (self.f)(acc, item);
        }
        acc
    }
}

/// 无初始值的左折叠：首个元素作为初始累加值，空序列时报错。
pub struct AggregateUnseeded<I, F> {
    iter: I,
    f: F,
}

impl<I: Iterator, F: FnMut(I::Item, I::Item) -> I::Item> AggregateUnseeded<I, F> {
    pub fn new(iter: I, f: F) -> Self {
        AggregateUnseeded { iter, f }
    }
}

impl<I, F> Terminal for AggregateUnseeded<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Output = KlinkRes<I::Item>;

    fn execute(mut self) -> Self::Output {
        let seed = self.iter.next().ok_or(KlinkErr::EmptySequence { op: "aggregate" })?;
        Ok(Aggregate::new(self.iter, seed, self.f).execute())
    }
}

/// 求和，即以`N::default()`为初始值、以`+`折叠的[`Aggregate`]。
pub struct Sum<I, F> {
    iter: I,
    f: F,
}

impl<I: Iterator, F> Sum<I, F> {
    pub fn new<N>(iter: I, f: F) -> Self
    where
        F: FnMut(I::Item) -> N,
    {
        Sum { iter, f }
    }
}

impl<I, F, N> Terminal for Sum<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> N,
    N: Add<Output = N> + Default,
{
    type Output = N;

    fn execute(self) -> N {
        let mut f = self.f;
        Aggregate::new(self.iter, N::default(), |acc, item| acc + f(item)).execute()
    }
}

/// 平均值：折叠求和的同时计数，最后以和除以数量。空序列报[`KlinkErr::DivisionByZero`]。
pub struct Average<I, F> {
    iter: I,
    f: F,
}

impl<I: Iterator, F: FnMut(I::Item) -> f64> Average<I, F> {
    pub fn new(iter: I, f: F) -> Self {
        Average { iter, f }
    }
}

impl<I, F> Terminal for Average<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> f64,
{
    type Output = KlinkRes<f64>;

    fn execute(self) -> Self::Output {
        let mut f = self.f;
        let mut count = 0usize;
        let total = Aggregate::new(self.iter, 0.0, |acc, item| {
            count += 1;
            acc + f(item)
        })
        .execute();
        if count == 0 { Err(KlinkErr::DivisionByZero { op: "average" }) } else { Ok(total / count as f64) }
    }
}
