//! Wei/ether conversions for reward amounts.
//!
//! Contracts and events carry reward amounts in wei (`u128`); listings and
//! filters work in ether (`f64`), matching what the UI displays. `f64` has
//! 53 bits of mantissa, so display values lose precision above ~9e15 wei
//! granularity — acceptable for filtering and rendering, never used to
//! build transaction values byte-for-byte.

/// Number of wei in one ether.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Convert a wei amount to ether for display and filtering.
pub fn wei_to_eth(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETH as f64
}

/// Convert an ether amount to wei.
///
/// Returns `None` for negative, NaN, infinite, or out-of-range input —
/// all caller errors, never silently clamped.
pub fn eth_to_wei(eth: f64) -> Option<u128> {
    if !eth.is_finite() || eth < 0.0 {
        return None;
    }
    let wei = eth * WEI_PER_ETH as f64;
    if wei > u128::MAX as f64 {
        return None;
    }
    Some(wei as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_eth_round_trips() {
        assert_eq!(wei_to_eth(WEI_PER_ETH), 1.0);
        assert_eq!(eth_to_wei(1.0), Some(WEI_PER_ETH));
    }

    #[test]
    fn fractional_eth_converts() {
        assert_eq!(eth_to_wei(0.5), Some(WEI_PER_ETH / 2));
        assert_eq!(wei_to_eth(WEI_PER_ETH / 2), 0.5);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(wei_to_eth(0), 0.0);
        assert_eq!(eth_to_wei(0.0), Some(0));
    }

    #[test]
    fn invalid_eth_inputs_are_rejected() {
        assert_eq!(eth_to_wei(-1.0), None);
        assert_eq!(eth_to_wei(f64::NAN), None);
        assert_eq!(eth_to_wei(f64::INFINITY), None);
    }
}
