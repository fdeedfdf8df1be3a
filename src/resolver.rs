//! 主机名解析
//!
//! 直接交给平台解析器（`getaddrinfo`），一次取回全部 IPv4 / IPv6 地址。

use crate::error::LookupError;
use crate::utils::conversion::{dedup_addresses, parse_ip_literal};
use log::{debug, trace};
use std::net::{IpAddr, Ipv4Addr};

/// 解析主机名对应的全部地址
///
/// - IP 字面量（含 `[::1]` 形式）直接返回，不经过解析器
/// - 空主机名只解析为 IPv4 回环地址 `127.0.0.1`
/// - 平台返回的重复地址会被去掉，其余顺序保持不变
///
/// # Errors
/// - `LookupError::NotFound`: 解析器报错，或没有返回任何地址
pub async fn resolve(hostname: &str) -> Result<Vec<IpAddr>, LookupError> {
    if hostname.is_empty() {
        return Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
    }

    if let Some(ip) = parse_ip_literal(hostname) {
        trace!("{hostname}: IP literal");
        return Ok(vec![ip]);
    }

    // 端口号只是 lookup_host 的格式要求，不参与解析
    let addrs = tokio::net::lookup_host((hostname, 0)).await.map_err(|e| {
        debug!("{hostname}: resolver error: {e}");
        LookupError::not_found(hostname, Some(e))
    })?;

    let addresses = dedup_addresses(addrs.map(|addr| addr.ip()));
    if addresses.is_empty() {
        return Err(LookupError::not_found(hostname, None));
    }

    debug!("{hostname}: {} address(es)", addresses.len());
    Ok(addresses)
}
