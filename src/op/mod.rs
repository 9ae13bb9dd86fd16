//! 惰性阶段：每个阶段持有上游迭代器，只在被拉取时才向上游拉取数据。

mod concat;
mod filter;
mod key_value;
mod reverse;
mod select;
mod select_many;
mod slice;

pub use concat::Concat;
pub use filter::{SkipWhile, TakeWhile, Where};
pub use key_value::{KeyValue, KeyValuePair};
pub use reverse::Reverse;
pub use select::{Inspect, Select};
pub use select_many::SelectMany;
pub use slice::{Skip, Take};

use std::fmt::{Display, Formatter};

/// 流水线阶段描述，用于打印流水线信息。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Op {
    /* **************************************** 输入 **************************************** */
    /// 数据源，例如`of`、`range`、`repeat`、`iter`。
    Source(&'static str),
    /* **************************************** 转换 **************************************** */
    /// 对每个元素做映射。
    Select,
    /// 对每个元素执行副作用，元素原样传递。
    Inspect,
    /// 每个元素映射为一组元素后展开。
    SelectMany,
    /// 每个元素映射为键值对。
    KeyValue,
    /* **************************************** 减少 **************************************** */
    /// 保留满足条件的元素。
    Where,
    /// 丢弃前N个元素。
    Skip(usize),
    /// 持续丢弃元素，直到条件首次不满足。
    SkipWhile,
    /// 保留前N个元素。
    Take(usize),
    /// 持续保留元素，直到条件首次不满足。
    TakeWhile,
    /* **************************************** 增加 **************************************** */
    /// 在当前序列之后拼接另一个序列。
    Concat,
    /* **************************************** 调整位置 **************************************** */
    /// 逆序，构建时即缓冲全部上游元素。
    Reverse,
}

impl Op {
    /// 是否在构建时缓冲全部上游元素。
    pub fn is_buffering(&self) -> bool {
        matches!(self, Op::Reverse)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Source(name) => write!(f, "{name}"),
            Op::Select => write!(f, "select"),
            Op::Inspect => write!(f, "inspect"),
            Op::SelectMany => write!(f, "select_many"),
            Op::KeyValue => write!(f, "key_value"),
            Op::Where => write!(f, "where"),
            Op::Skip(count) => write!(f, "skip({count})"),
            Op::SkipWhile => write!(f, "skip_while"),
            Op::Take(count) => write!(f, "take({count})"),
            Op::TakeWhile => write!(f, "take_while"),
            Op::Concat => write!(f, "concat"),
            Op::Reverse => write!(f, "reverse"),
        }
    }
}
