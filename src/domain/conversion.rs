/// Spot rate, quote currency per unit of base currency.
///
/// `0` is the "no conversion available" sentinel the price client falls back to.
/// Never show it as a market price: check [`ConversionRate::is_available`] first.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ConversionRate(f64);

impl ConversionRate {
    pub const UNAVAILABLE: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_available(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// `amount` in quote currency, or `None` while no rate is available.
    pub fn convert(self, amount: f64) -> Option<f64> {
        self.is_available().then(|| amount * self.0)
    }
}

impl std::fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_available() {
            write!(f, "{:.2}", self.0)
        } else {
            write!(f, "n/a")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_price() {
        assert!(!ConversionRate::UNAVAILABLE.is_available());
        assert_eq!(ConversionRate::UNAVAILABLE.convert(2.0), None);
        assert_eq!(ConversionRate::UNAVAILABLE.to_string(), "n/a");
        assert_eq!(ConversionRate::default(), ConversionRate::UNAVAILABLE);
    }

    #[test]
    fn converts_with_real_rate() {
        let rate = ConversionRate::new(3000.0);
        assert_eq!(rate.convert(2.0), Some(6000.0));
        assert_eq!(rate.to_string(), "3000.00");
    }
}
