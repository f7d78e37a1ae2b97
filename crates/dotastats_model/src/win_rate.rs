use std::fmt::Display;

/// Win percentage with one decimal of precision, stored as tenths of a percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WinRate(u16);

impl WinRate {
    pub const ZERO: WinRate = WinRate(0);
    pub const MAX_TENTHS: u16 = 1000;

    /// Values above 100.0% are clamped.
    pub fn from_tenths(tenths: u16) -> Self {
        WinRate(tenths.min(Self::MAX_TENTHS))
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl Display for WinRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_one_decimal() {
        assert_eq!(WinRate::from_tenths(333).to_string(), "33.3");
        assert_eq!(WinRate::from_tenths(300).to_string(), "30.0");
        assert_eq!(WinRate::ZERO.to_string(), "0.0");
        assert_eq!(WinRate::from_tenths(1000).to_string(), "100.0");
    }

    #[test]
    fn clamped_to_hundred_percent() {
        assert_eq!(WinRate::from_tenths(1500).as_f64(), 100.0);
    }
}
