//! Wake-chance tracking and the risk-label bands.
//!
//! `RiskState` owns the current wake probability and its per-poke
//! escalation. `RiskBand` maps a probability to the label shown at the
//! table; the mapping is total and monotonic over [0, 100].

use serde::{Deserialize, Serialize};

use crate::core::config::{LULLABY_RELIEF, MAX_INCREMENT, MAX_PROBABILITY, MIN_INCREMENT};

/// Current wake chance and its escalation step.
///
/// The probability stays in [0, 100] at all times: escalation clamps at 100,
/// relief floors at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskState {
    current: u8,
    increment: u8,
}

impl RiskState {
    /// Create a risk state with a clamped starting chance and step.
    #[must_use]
    pub fn new(initial: u8, increment: u8) -> Self {
        Self {
            current: initial.min(MAX_PROBABILITY),
            increment: increment.clamp(MIN_INCREMENT, MAX_INCREMENT),
        }
    }

    /// Current wake chance (percent).
    #[must_use]
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Per-poke escalation step (percent).
    #[must_use]
    pub fn increment(&self) -> u8 {
        self.increment
    }

    /// Raise the chance by one step, clamped at 100. Returns the new value.
    pub fn escalate(&mut self) -> u8 {
        self.current = self
            .current
            .saturating_add(self.increment)
            .min(MAX_PROBABILITY);
        self.current
    }

    /// Lower the chance by the lullaby relief, floored at 0. Returns the new
    /// value.
    pub fn relieve(&mut self) -> u8 {
        self.current = self.current.saturating_sub(LULLABY_RELIEF);
        self.current
    }

    /// The risk band for the current chance.
    #[must_use]
    pub fn band(&self) -> RiskBand {
        RiskBand::from_probability(self.current)
    }
}

/// Risk label bands over the wake chance.
///
/// Thresholds partition [0, 100] into five ordered bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    /// 0-8%.
    Low,
    /// 9-16%.
    Dicey,
    /// 17-24%.
    Questionable,
    /// 25-30%.
    Danger,
    /// 31-100%.
    Reckless,
}

impl RiskBand {
    /// Map a probability (clamped to [0, 100]) to its band.
    #[must_use]
    pub fn from_probability(percent: u8) -> Self {
        match percent.min(MAX_PROBABILITY) {
            0..=8 => RiskBand::Low,
            9..=16 => RiskBand::Dicey,
            17..=24 => RiskBand::Questionable,
            25..=30 => RiskBand::Danger,
            _ => RiskBand::Reckless,
        }
    }

    /// The label shown at the table for this band.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low risk",
            RiskBand::Dicey => "Gettin' dicey",
            RiskBand::Questionable => "Are you sure you want to keep going?",
            RiskBand::Danger => "Your middle name is Danger",
            RiskBand::Reckless => "Incredible bravery (or stupidity)?",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let risk = RiskState::new(200, 0);
        assert_eq!(risk.current(), 100);
        assert_eq!(risk.increment(), 1);

        let risk = RiskState::new(50, 99);
        assert_eq!(risk.increment(), 20);
    }

    #[test]
    fn test_escalate_clamps_at_100() {
        let mut risk = RiskState::new(95, 10);

        assert_eq!(risk.escalate(), 100);
        assert_eq!(risk.escalate(), 100);
        assert_eq!(risk.current(), 100);
    }

    #[test]
    fn test_relieve_floors_at_zero() {
        let mut risk = RiskState::new(5, 1);

        assert_eq!(risk.relieve(), 0);
        assert_eq!(risk.relieve(), 0);
    }

    #[test]
    fn test_relieve_is_exactly_ten() {
        let mut risk = RiskState::new(37, 1);
        assert_eq!(risk.relieve(), 27);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskBand::from_probability(0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(8), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(9), RiskBand::Dicey);
        assert_eq!(RiskBand::from_probability(16), RiskBand::Dicey);
        assert_eq!(RiskBand::from_probability(17), RiskBand::Questionable);
        assert_eq!(RiskBand::from_probability(24), RiskBand::Questionable);
        assert_eq!(RiskBand::from_probability(25), RiskBand::Danger);
        assert_eq!(RiskBand::from_probability(30), RiskBand::Danger);
        assert_eq!(RiskBand::from_probability(31), RiskBand::Reckless);
        assert_eq!(RiskBand::from_probability(100), RiskBand::Reckless);
    }

    #[test]
    fn test_band_total_and_monotonic() {
        let mut last = RiskBand::from_probability(0);
        for p in 1..=100u8 {
            let band = RiskBand::from_probability(p);
            assert!(band >= last, "band regressed at {}%", p);
            last = band;
        }
    }

    #[test]
    fn test_band_clamps_out_of_range() {
        assert_eq!(RiskBand::from_probability(255), RiskBand::Reckless);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskBand::Low.label(), "Low risk");
        assert_eq!(RiskBand::Dicey.label(), "Gettin' dicey");
        assert_eq!(format!("{}", RiskBand::Danger), "Your middle name is Danger");
    }
}
