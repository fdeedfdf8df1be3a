//! 解析与探测的错误类型

use std::io;
use std::time::Duration;

use thiserror::Error;

/// 主机名解析失败
#[derive(Debug, Error)]
pub enum LookupError {
    /// 主机名无法解析为任何地址
    #[error("'{hostname}' could not be found.")]
    NotFound {
        /// 用户输入的主机名
        hostname: String,
        /// 解析器返回的底层错误（解析成功但结果为空时为 None）
        #[source]
        source: Option<io::Error>,
    },
}

impl LookupError {
    /// 构造 `NotFound` 错误
    pub fn not_found(hostname: &str, source: Option<io::Error>) -> Self {
        Self::NotFound {
            hostname: hostname.to_string(),
            source,
        }
    }
}

/// 单次探测内部出现的错误
///
/// 这些错误只在 `protocols` 内部流转，`is_reachable` 会把它们全部折叠成 `false`
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 平台无法执行 ICMP echo（没有 ping 程序、权限不足等）
    #[error("ICMP echo unavailable: {0}")]
    IcmpUnavailable(String),

    /// 超时时间内没有收到回应
    #[error("no response within {0:?}")]
    Timeout(Duration),

    /// 超时时间为零
    #[error("timeout must be greater than zero")]
    InvalidTimeout,

    /// 其他 I/O 错误
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn not_found_renders_driver_message() {
        let err = LookupError::not_found("nowhere.invalid", None);
        assert_eq!(err.to_string(), "'nowhere.invalid' could not be found.");
        assert!(err.source().is_none());
    }

    #[test]
    fn not_found_keeps_resolver_error() {
        let err = LookupError::not_found("x", Some(io::Error::other("boom")));
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("boom"));
    }
}
