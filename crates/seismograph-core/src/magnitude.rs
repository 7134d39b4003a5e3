//! Magnitude estimation: an iterative base-10 logarithm plus a soil-weighted
//! site-response constant.

use crate::error::MagnitudeError;

/// Number of squaring rounds used by [`approximate_log10`]. Each round resolves
/// one binary digit of the fractional part, so results are truncated to a
/// multiple of `2^-10`.
pub const REFINEMENT_ROUNDS: usize = 10;

/// Approximate `log10(x)`.
///
/// `x` is scaled into `[1, 10)` while counting the exponent, then the mantissa is
/// squared repeatedly. Whenever the square reaches 10 it is divided back down
/// and the current binary weight is added to the fractional estimate.
///
/// # Errors
///
/// [`MagnitudeError::NonPositive`] for `x <= 0` and [`MagnitudeError::NonFinite`]
/// for NaN or infinite input.
pub fn approximate_log10(x: f64) -> Result<f64, MagnitudeError> {
    if !x.is_finite() {
        return Err(MagnitudeError::NonFinite(x));
    }
    if x <= 0.0 {
        return Err(MagnitudeError::NonPositive(x));
    }

    let mut mantissa = x;
    let mut characteristic: i32 = 0;
    while mantissa < 1.0 {
        mantissa *= 10.0;
        characteristic -= 1;
    }
    while mantissa >= 10.0 {
        mantissa /= 10.0;
        characteristic += 1;
    }

    let mut fraction = 0.0;
    let mut factor = 1.0;
    for _ in 0..REFINEMENT_ROUNDS {
        mantissa *= mantissa;
        factor /= 2.0;
        if mantissa >= 10.0 {
            mantissa /= 10.0;
            fraction += factor;
        }
    }

    Ok(fraction + f64::from(characteristic))
}

/// Weighted site-response constant. Inputs are expected to be normalized; no
/// validation happens here.
pub fn fuzzy_k(hard_rock_weight: f64, firm_soil_weight: f64, soft_soil_weight: f64) -> f64 {
    hard_rock_weight * SoilType::HardRock.site_constant()
        + firm_soil_weight * SoilType::FirmSoil.site_constant()
        + soft_soil_weight * SoilType::SoftSoil.site_constant()
}

/// Magnitude for a peak amplitude and site-response constant `k`.
///
/// # Errors
///
/// [`MagnitudeError::InvalidAmplitude`] when `amplitude <= 0` (or NaN).
pub fn calculate_magnitude(amplitude: f64, k: f64) -> Result<f64, MagnitudeError> {
    if amplitude.is_nan() || amplitude <= 0.0 {
        return Err(MagnitudeError::InvalidAmplitude(amplitude));
    }
    Ok(approximate_log10(amplitude)? + k)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoilType {
    HardRock,
    FirmSoil,
    SoftSoil,
}

impl SoilType {
    pub const ALL: [SoilType; 3] = [SoilType::HardRock, SoilType::FirmSoil, SoilType::SoftSoil];

    pub fn site_constant(self) -> f64 {
        match self {
            SoilType::HardRock => 2.5,
            SoilType::FirmSoil => 5.0,
            SoilType::SoftSoil => 6.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoilType::HardRock => "Hard Rock",
            SoilType::FirmSoil => "Firm Soil",
            SoilType::SoftSoil => "Soft Soil",
        }
    }
}

/// Non-negative contribution of each soil type before normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SoilWeights {
    pub hard_rock: f64,
    pub firm_soil: f64,
    pub soft_soil: f64,
}

impl SoilWeights {
    pub fn new(hard_rock: f64, firm_soil: f64, soft_soil: f64) -> Self {
        Self {
            hard_rock,
            firm_soil,
            soft_soil,
        }
    }

    /// One unit of weight per ticked checkbox.
    pub fn from_selection(hard_rock: bool, firm_soil: bool, soft_soil: bool) -> Self {
        let unit = |selected: bool| if selected { 1.0 } else { 0.0 };
        Self::new(unit(hard_rock), unit(firm_soil), unit(soft_soil))
    }

    pub fn total(&self) -> f64 {
        self.hard_rock + self.firm_soil + self.soft_soil
    }

    /// Weights scaled to sum to 1, or `None` when nothing carries weight or a
    /// component is negative or NaN.
    pub fn normalized(&self) -> Option<SoilWeights> {
        let components = [self.hard_rock, self.firm_soil, self.soft_soil];
        if components.iter().any(|w| w.is_nan() || *w < 0.0) {
            return None;
        }
        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        Some(Self::new(
            self.hard_rock / total,
            self.firm_soil / total,
            self.soft_soil / total,
        ))
    }

    /// The site-response constant `k` for these weights.
    pub fn site_response(&self) -> Option<f64> {
        self.normalized()
            .map(|w| fuzzy_k(w.hard_rock, w.firm_soil, w.soft_soil))
    }
}
