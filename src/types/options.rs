//! 探测配置

use std::time::Duration;

/// 可达性检测的固定超时（毫秒）
pub const REACHABILITY_TIMEOUT_MS: u64 = 1000;

/// TCP 探测默认使用的 echo 端口
pub const DEFAULT_TCP_PORT: u16 = 7;

/// 可达性探测策略
///
/// 不同平台、不同权限下 ICMP 的可用性差异很大，所以探测方式做成可选的
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeStrategy {
    /// 只发送 ICMP echo
    Icmp,
    /// 只尝试 TCP 连接
    Tcp,
    /// 先 ICMP；ICMP 不可用时用剩余时间做 TCP 连接
    #[default]
    IcmpThenTcp,
}

/// 探测配置选项
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeOptions {
    /// 探测策略（默认为 `IcmpThenTcp`）
    pub strategy: ProbeStrategy,
    /// TCP 探测的目标端口（默认为 7）
    pub tcp_port: u16,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            strategy: ProbeStrategy::default(),
            tcp_port: DEFAULT_TCP_PORT,
        }
    }
}

impl ProbeOptions {
    /// 使用指定策略，其余保持默认
    pub fn with_strategy(strategy: ProbeStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// 替换 TCP 探测端口
    pub fn tcp_port(mut self, port: u16) -> Self {
        self.tcp_port = port;
        self
    }
}

/// 驱动程序使用的固定超时
pub fn reachability_timeout() -> Duration {
    Duration::from_millis(REACHABILITY_TIMEOUT_MS)
}
