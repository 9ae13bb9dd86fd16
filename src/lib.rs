//! 惰性的序列查询流水线。
//!
//! 从数据源（[`Klink::from_vec`]、[`Klink::range`]、[`Klink::repeat`]……）开始，链式组合转换和过滤阶段，
//! 最后以终止操作（[`Klink::to_vec`]、[`Klink::first`]、[`Klink::aggregate`]……）求值。
//! 在终止操作被调用之前不会拉取任何数据（[`Klink::reverse`]除外），且只拉取得出结果所需的元素。
//!
//! ```
//! use klink::Klink;
//!
//! let firsts = Klink::from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"])
//!     .key_value(|s| s.chars().next(), |s| s.len())
//!     .filter(|kv| kv.key() != &Some('c'))
//!     .map(|kv| *kv.value())
//!     .to_vec();
//! assert_eq!(firsts, vec![5, 7, 6, 9]);
//! ```

mod config;
mod err;
mod input;
mod klink;
pub mod op;
mod print;
pub mod terminal;
mod trace;

pub use config::{Config, is_stats, is_verbose};
pub use err::{ErrKind, KlinkErr};
pub use klink::Klink;
pub use op::KeyValuePair;

/// 整数类型
pub type Integer = i64;

pub type KlinkRes<T> = Result<T, KlinkErr>;
