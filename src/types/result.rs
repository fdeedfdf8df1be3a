//! 探测结果与每个主机名的报告

use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

use crate::utils::conversion::join_addresses;

/// 单次探测的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 收到回应
    Reply {
        /// 往返时间
        rtt: Duration,
    },
    /// TCP 连接被拒绝：对端主机在线并给出了回应
    Refused,
    /// 超时
    Timeout,
    /// 无法识别的输出行
    Unknown {
        /// 原始输出
        line: String,
    },
    /// 探测机制本身不可用（ping 进程退出、权限不足等）
    Unavailable {
        /// 不可用的原因
        reason: String,
    },
}

impl ProbeOutcome {
    /// 对端是否有回应
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reply { .. } | Self::Refused)
    }

    /// 探测机制是否不可用，`IcmpThenTcp` 据此决定是否改用 TCP
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// 单个主机名的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOutcome {
    /// 解析失败
    NotFound,
    /// 解析成功
    Resolved {
        /// 解析得到的地址，保持解析器返回的顺序
        addresses: Vec<IpAddr>,
        /// 是否至少有一个地址可达
        reachable: bool,
    },
}

/// 一个主机名在报告中的区块
///
/// `Display` 只输出 `Hostname:` 行之后的内容；`Hostname:` 行由驱动程序在解析前写出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    /// 用户输入的主机名
    pub hostname: String,
    /// 处理结果
    pub outcome: HostOutcome,
}

impl HostReport {
    /// 解析失败的报告
    pub fn not_found(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            outcome: HostOutcome::NotFound,
        }
    }

    /// 解析成功的报告
    pub fn resolved(hostname: &str, addresses: Vec<IpAddr>, reachable: bool) -> Self {
        Self {
            hostname: hostname.to_string(),
            outcome: HostOutcome::Resolved { addresses, reachable },
        }
    }
}

impl fmt::Display for HostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            HostOutcome::NotFound => writeln!(f, "\t'{}' could not be found.", self.hostname),
            HostOutcome::Resolved { addresses, reachable } => {
                writeln!(f, "\t{}", join_addresses(", ", addresses))?;
                writeln!(f, "\tReachable: {reachable}")?;
                writeln!(f)
            }
        }
    }
}
