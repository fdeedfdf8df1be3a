//! 参数验证

use std::time::Duration;

use crate::error::ProbeError;

/// 验证探测超时
///
/// 超时为零时任何探测都不可能成功，直接拒绝
///
/// # Errors
/// - `ProbeError::InvalidTimeout`: `timeout` 为零
pub fn validate_timeout(timeout: Duration) -> Result<Duration, ProbeError> {
    if timeout.is_zero() {
        return Err(ProbeError::InvalidTimeout);
    }
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            validate_timeout(Duration::ZERO),
            Err(ProbeError::InvalidTimeout)
        ));
    }

    #[test]
    fn accepts_positive() {
        assert_eq!(validate_timeout(Duration::from_millis(1000)).unwrap(), Duration::from_secs(1));
    }
}
