//! 探测辅助函数模块
//!
//! 包含截止时间、剩余预算等计算

use std::time::{Duration, Instant};

/// 计算距截止时间的剩余时间
///
/// # 返回
/// - `Some(Duration)`: 剩余时间（大于零）
/// - `None`: 已经到达或超过截止时间
pub fn remaining_until(deadline: Instant) -> Option<Duration> {
    let remaining = deadline.saturating_duration_since(Instant::now());
    if remaining.is_zero() {
        None
    } else {
        Some(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_deadline_has_no_budget() {
        let deadline = Instant::now();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(remaining_until(deadline), None);
    }

    #[test]
    fn future_deadline_is_bounded_by_timeout() {
        let timeout = Duration::from_secs(5);
        let remaining = remaining_until(Instant::now() + timeout).unwrap();
        assert!(remaining <= timeout);
        assert!(remaining > Duration::from_secs(4));
    }
}
