use crate::config::{Config, is_stats, is_verbose};
use crate::op::Op;
use crate::{eprintln_info, eprintln_notice};
use itertools::Itertools;
use std::cell::Cell;
use std::rc::Rc;

/// 拉取计数，在流水线各阶段之间共享。
#[derive(Debug, Clone, Default)]
pub(crate) struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    pub(crate) fn get(&self) -> usize {
        self.0.get()
    }

    fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// 统计成功拉取次数的迭代器包装。
pub(crate) struct Counted<I> {
    iter: I,
    counter: PullCounter,
}

impl<I: Iterator> Counted<I> {
    pub(crate) fn new(iter: I, counter: PullCounter) -> Self {
        Counted { iter, counter }
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        self.counter.incr();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// 流水线描述，例如`of -> where -> select`。
pub(crate) fn plan(stages: &[Op]) -> String {
    stages.iter().join(" -> ")
}

/// 终止操作开始前调用。
pub(crate) fn on_terminal(stages: &[Op], configs: &[Config], terminal: &str) {
    if is_verbose(configs) {
        eprintln_info!("[klink] {} => {terminal}", plan(stages));
    }
}

/// 终止操作结束后调用。
pub(crate) fn on_finished(configs: &[Config], terminal: &str, counter: Option<&PullCounter>) {
    if is_stats(configs)
        && let Some(counter) = counter
    {
        eprintln_notice!("[klink] {terminal} pulled {} item(s)", counter.get());
    }
}

/// 缓冲阶段物化后调用。
pub(crate) fn on_buffered(stages: &[Op], configs: &[Config], op: Op, buffered: usize) {
    if is_verbose(configs) && op.is_buffering() {
        eprintln_notice!("[klink] {} -> {op} buffered {buffered} item(s)", plan(stages));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan() {
        assert_eq!(plan(&[]), "");
        assert_eq!(plan(&[Op::Source("of")]), "of");
        assert_eq!(plan(&[Op::Source("range"), Op::Where, Op::Take(3)]), "range -> where -> take(3)");
    }

    #[test]
    fn test_counted() {
        let counter = PullCounter::default();
        let mut iter = Counted::new(0..3, counter.clone());
        assert_eq!(iter.next(), Some(0));
        assert_eq!(counter.get(), 1);
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.next(), None);
        assert_eq!(counter.get(), 3);
    }
}
