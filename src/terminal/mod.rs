//! 终止操作：消耗上游（全部或直到满足停止条件），返回一个具体结果。
//!
//! 终止操作通过[`Terminal::execute`]执行且会消耗自身，结果不再是迭代器，因此无法继续组合。

mod aggregate;
mod collect;
mod count;
mod element;

pub use aggregate::{Aggregate, AggregateUnseeded, Average, Sum};
pub use collect::{GroupBy, ToDictionary, ToVec};
pub use count::{All, Any, Count};
pub use element::{
    ElementAt, ElementAtOrDefault, First, FirstOrDefault, Last, LastOrDefault, Single, SingleOrDefault,
};

/// 终止操作，只执行一次。
pub trait Terminal {
    type Output;

    fn execute(self) -> Self::Output;
}
