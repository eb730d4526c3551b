use crate::domain::ConversionRate;

#[derive(Debug, Clone, PartialEq)]
pub struct WalletBalance {
    /// Whole units (ETH, not wei)
    pub value: f64,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BalanceState {
    Loading,
    Ready(WalletBalance),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedWallet {
    pub address: String,
    pub ens_name: Option<String>,
    pub balance: BalanceState,
}

/// What the wallet collaborator reports to the page, once per frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connected(ConnectedWallet),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(w) => Some(&w.address),
            WalletStatus::Disconnected => None,
        }
    }
}

/// `0x1234567890abcdef` -> `0x1234...cdef`
pub fn shorten_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Balance converted to quote currency with 2 decimals, or `"0"` when either side is missing or zero.
pub fn fiat_estimate(balance: Option<f64>, rate: ConversionRate) -> String {
    match balance {
        Some(value) if value != 0.0 && !value.is_nan() => rate
            .convert(value)
            .map(|fiat| format!("{:.2}", fiat))
            .unwrap_or_else(|| "0".to_string()),
        _ => "0".to_string(),
    }
}

/// `0x` followed by 40 hex digits.
pub fn is_valid_address(addr: &str) -> bool {
    addr.strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_address() {
        assert_eq!(shorten_address("0x1234567890abcdef"), "0x1234...cdef");
        assert_eq!(
            shorten_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"),
            "0x71C7...976F"
        );
    }

    #[test]
    fn short_input_does_not_panic() {
        assert_eq!(shorten_address("0x12"), "0x12...0x12");
        assert_eq!(shorten_address(""), "...");
    }

    #[test]
    fn fiat_estimate_multiplies_balance_by_rate() {
        assert_eq!(fiat_estimate(Some(2.0), ConversionRate::new(3000.0)), "6000.00");
        assert_eq!(fiat_estimate(Some(0.125), ConversionRate::new(2000.5)), "250.06");
    }

    #[test]
    fn fiat_estimate_falls_back_to_zero() {
        assert_eq!(fiat_estimate(Some(2.0), ConversionRate::UNAVAILABLE), "0");
        assert_eq!(fiat_estimate(Some(0.0), ConversionRate::new(3000.0)), "0");
        assert_eq!(fiat_estimate(None, ConversionRate::new(3000.0)), "0");
    }

    #[test]
    fn validates_addresses() {
        assert!(is_valid_address("0x71C7656EC7ab88b098defB751B7401B5f6d8976F"));
        assert!(!is_valid_address("71C7656EC7ab88b098defB751B7401B5f6d8976F"));
        assert!(!is_valid_address("0x1234"));
        assert!(!is_valid_address("0xZZC7656EC7ab88b098defB751B7401B5f6d8976F"));
    }
}
