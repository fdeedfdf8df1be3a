//! 可达性探测
//!
//! `Probe` 是探测策略的接缝：驱动程序只依赖这个 trait，
//! 实际的 ICMP / TCP 组合由 `Prober` 按 `ProbeOptions` 决定。

pub mod helpers;
pub mod icmp;
pub mod tcp;

use crate::error::ProbeError;
use crate::types::options::{ProbeOptions, ProbeStrategy};
use crate::types::result::ProbeOutcome;
use crate::utils::validation::validate_timeout;
use helpers::remaining_until;
use icmp::{Echo, PlatformEcho};
use log::debug;
use std::future::Future;
use std::net::IpAddr;
use std::time::{Duration, Instant};

/// 单个地址的可达性探测
pub trait Probe {
    /// 在 `timeout` 内判断 `addr` 是否可达
    ///
    /// 实现不得返回错误，也不得 panic：任何失败都视为不可达
    fn is_reachable(&self, addr: IpAddr, timeout: Duration) -> impl Future<Output = bool>;
}

/// 按顺序探测，遇到第一个可达的地址立即返回 `true`
///
/// 所有地址都不可达（包括地址列表为空）时返回 `false`
pub async fn is_any_reachable<P: Probe>(probe: &P, addresses: &[IpAddr], timeout: Duration) -> bool {
    for &addr in addresses {
        if probe.is_reachable(addr, timeout).await {
            return true;
        }
    }
    false
}

/// 按 `ProbeOptions` 组合 ICMP / TCP 的探测器
///
/// ICMP 一步默认走平台机制（`PlatformEcho`），也可以换成任意 `Echo` 实现
#[derive(Clone, Copy, Debug, Default)]
pub struct Prober<E = PlatformEcho> {
    options: ProbeOptions,
    echo: E,
}

impl Prober {
    /// 根据配置创建使用平台 ICMP 的探测器
    pub fn new(options: ProbeOptions) -> Self {
        Self::with_echo(options, PlatformEcho)
    }
}

impl<E: Echo> Prober<E> {
    /// 使用指定的 ICMP 实现
    pub fn with_echo(options: ProbeOptions, echo: E) -> Self {
        Self { options, echo }
    }

    /// 执行一次探测并返回详细结果
    ///
    /// `IcmpThenTcp` 下，ICMP 不可用时才会改用 TCP，且 TCP 只拿到剩余的时间，
    /// 整个探测不会超过 `timeout`
    ///
    /// # Errors
    /// - `ProbeError::InvalidTimeout`: `timeout` 为零
    /// - `ProbeError::Timeout` / `ProbeError::Io`: TCP 探测失败
    /// - `ProbeError::IcmpUnavailable`: 仅 `Icmp` 策略下，平台无法执行 ICMP
    pub async fn probe(&self, addr: IpAddr, timeout: Duration) -> Result<ProbeOutcome, ProbeError> {
        let timeout = validate_timeout(timeout)?;
        let deadline = Instant::now() + timeout;
        let port = self.options.tcp_port;

        match self.options.strategy {
            ProbeStrategy::Icmp => self.echo.echo(addr, timeout).await,
            ProbeStrategy::Tcp => tcp::connect(addr, port, timeout).await,
            ProbeStrategy::IcmpThenTcp => {
                let outcome = self
                    .echo
                    .echo(addr, timeout)
                    .await
                    .unwrap_or_else(|e| ProbeOutcome::Unavailable { reason: e.to_string() });

                if !outcome.is_unavailable() {
                    return Ok(outcome);
                }

                debug!("{addr}: ICMP unavailable ({outcome:?}), falling back to TCP port {port}");
                match remaining_until(deadline) {
                    Some(remaining) => tcp::connect(addr, port, remaining).await,
                    None => Err(ProbeError::Timeout(timeout)),
                }
            }
        }
    }
}

impl<E: Echo> Probe for Prober<E> {
    /// 探测错误在这里被有意丢弃，只留下 `false`
    async fn is_reachable(&self, addr: IpAddr, timeout: Duration) -> bool {
        match self.probe(addr, timeout).await {
            Ok(outcome) => {
                debug!("{addr}: {outcome:?}");
                outcome.is_reachable()
            }
            Err(e) => {
                debug!("{addr}: not reachable: {e}");
                false
            }
        }
    }
}
