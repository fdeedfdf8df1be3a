//! 地址与 ping 输出的格式转换

use std::net::IpAddr;
use std::time::Duration;

/// 把地址列表按分隔符拼接成一行
pub fn join_addresses(delimiter: &str, addresses: &[IpAddr]) -> String {
    addresses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// 尝试把主机名当作 IP 字面量解析
///
/// 支持 `[::1]` 这种带方括号的 IPv6 写法
pub fn parse_ip_literal(host: &str) -> Option<IpAddr> {
    let unbracketed = host
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'));

    match unbracketed {
        // 方括号里只允许 IPv6
        Some(inner) => inner.parse::<std::net::Ipv6Addr>().ok().map(IpAddr::V6),
        None => host.parse::<IpAddr>().ok(),
    }
}

/// 去掉重复地址，保留第一次出现的位置
pub fn dedup_addresses<I>(addresses: I) -> Vec<IpAddr>
where
    I: IntoIterator<Item = IpAddr>,
{
    let mut unique: Vec<IpAddr> = Vec::new();
    for addr in addresses {
        if !unique.contains(&addr) {
            unique.push(addr);
        }
    }
    unique
}

/// 从 ping 的输出里取出往返时间（`time=0.045 ms` / `time<1ms`）
///
/// 只做整数运算，避免毫秒小数换算时的浮点误差
pub fn parse_rtt(output: &str) -> Option<Duration> {
    let (_, rest) = output.split_once("time=").or_else(|| output.split_once("time<"))?;
    let number: String = rest
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let (whole, fraction) = number.split_once('.').unwrap_or((number.as_str(), ""));
    let whole_ms: u64 = whole.parse().ok()?;

    // 毫秒的小数部分最多取 6 位，正好是纳秒
    let fraction: String = fraction.chars().take(6).collect();
    let fraction_ns: u64 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<6}").parse().ok()?
    };

    Some(Duration::from_millis(whole_ms) + Duration::from_nanos(fraction_ns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn joins_in_given_order() {
        let addrs = [
            IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)),
            IpAddr::V6("2606:2800:220:1::248".parse().unwrap()),
        ];
        assert_eq!(
            join_addresses(", ", &addrs),
            "93.184.216.34, 2606:2800:220:1::248"
        );
        assert_eq!(join_addresses(", ", &[]), "");
    }

    #[test]
    fn parses_plain_and_bracketed_literals() {
        assert_eq!(
            parse_ip_literal("10.0.0.1"),
            Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
        );
        assert_eq!(parse_ip_literal("::1"), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(parse_ip_literal("[::1]"), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(parse_ip_literal("[127.0.0.1]"), None);
        assert_eq!(parse_ip_literal("example.com"), None);
    }

    #[test]
    fn reads_round_trip_time_from_ping_line() {
        assert_eq!(
            parse_rtt("64 bytes from 127.0.0.1: icmp_seq=1 ttl=64 time=0.045 ms"),
            Some(Duration::from_micros(45))
        );
        assert_eq!(
            parse_rtt("64 bytes from ::1: seq=0 ttl=64 time=12 ms"),
            Some(Duration::from_millis(12))
        );
        assert_eq!(parse_rtt("Reply from 10.0.0.1: bytes=32 time<1ms TTL=128"), Some(Duration::from_millis(1)));
        assert_eq!(parse_rtt("1 packets transmitted, 0 received"), None);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let a = IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1));
        let b = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert_eq!(dedup_addresses([a, b, a, b, a]), vec![a, b]);
    }
}
