use thiserror::Error;

/// 终止操作失败的原因。
///
/// 所有错误都在触发拉取的终止操作处同步返回，构建流水线时不会产生错误。
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum KlinkErr {
    /// 序列为空，或者没有元素满足条件。
    #[error("[{op}] Sequence contains no elements")]
    EmptySequence { op: &'static str },

    /// 要求唯一元素时序列中存在多个元素。
    #[error("[{op}] Sequence contains more than one element")]
    MultipleElements { op: &'static str },

    /// 对空序列求平均值。
    #[error("[{op}] Sequence divided by zero elements")]
    DivisionByZero { op: &'static str },
}

/// 错误类别，不携带上下文，便于匹配。
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrKind {
    EmptySequence,
    MultipleElements,
    DivisionByZero,
}

impl KlinkErr {
    pub fn kind(&self) -> ErrKind {
        match self {
            KlinkErr::EmptySequence { .. } => ErrKind::EmptySequence,
            KlinkErr::MultipleElements { .. } => ErrKind::MultipleElements,
            KlinkErr::DivisionByZero { .. } => ErrKind::DivisionByZero,
        }
    }

    /// 失败的终止操作名称。
    pub fn op(&self) -> &'static str {
        match self {
            KlinkErr::EmptySequence { op } | KlinkErr::MultipleElements { op } | KlinkErr::DivisionByZero { op } => *op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_op() {
        assert_eq!(KlinkErr::EmptySequence { op: "first" }.kind(), ErrKind::EmptySequence);
        assert_eq!(KlinkErr::MultipleElements { op: "single" }.kind(), ErrKind::MultipleElements);
        assert_eq!(KlinkErr::DivisionByZero { op: "average" }.kind(), ErrKind::DivisionByZero);
        assert_eq!(KlinkErr::MultipleElements { op: "single" }.op(), "single");
    }

    #[test]
    fn test_display() {
        assert_eq!(KlinkErr::EmptySequence { op: "first" }.to_string(), "[first] Sequence contains no elements");
        assert_eq!(
            KlinkErr::MultipleElements { op: "single" }.to_string(),
            "[single] Sequence contains more than one element"
        );
        assert_eq!(KlinkErr::DivisionByZero { op: "average" }.to_string(), "[average] Sequence divided by zero elements");
    }
}
