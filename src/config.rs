/// 流水线配置，通过[`crate::Klink::configure`]开启，随后续的每个阶段传递。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Config {
    /// 执行终止操作或缓冲阶段（例如`reverse`）物化时，向标准错误打印流水线信息。
    Verbose,
    /// 统计从当前流水线头部拉取的元素数量，并在终止操作结束后打印。
    Stats,
}

#[inline]
pub fn is_verbose(configs: &[Config]) -> bool {
    configs.contains(&Config::Verbose)
}

#[inline]
pub fn is_stats(configs: &[Config]) -> bool {
    configs.contains(&Config::Stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert!(!is_verbose(&[]));
        assert!(!is_stats(&[]));
        assert!(is_verbose(&[Config::Verbose]));
        assert!(!is_stats(&[Config::Verbose]));
        assert!(is_stats(&[Config::Verbose, Config::Stats]));
    }
}
