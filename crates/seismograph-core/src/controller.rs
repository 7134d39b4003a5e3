//! UI-independent state behind the Generate / Calculate / Clear buttons.

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::amplitude::{Amplitude, AmplitudeGenerator};
use crate::error::CalculateError;
use crate::magnitude::{calculate_magnitude, SoilType, SoilWeights};
use crate::outcome::Outcome;
use crate::playback::Player;

/// The three soil checkboxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoilSelection {
    pub hard_rock: bool,
    pub firm_soil: bool,
    pub soft_soil: bool,
}

impl SoilSelection {
    pub fn weights(&self) -> SoilWeights {
        SoilWeights::from_selection(self.hard_rock, self.firm_soil, self.soft_soil)
    }

    pub fn get_mut(&mut self, soil: SoilType) -> &mut bool {
        match soil {
            SoilType::HardRock => &mut self.hard_rock,
            SoilType::FirmSoil => &mut self.firm_soil,
            SoilType::SoftSoil => &mut self.soft_soil,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnitudeReport {
    pub amplitude: Amplitude,
    pub site_response: f64,
    pub magnitude: f64,
    pub outcome: Outcome,
}

pub struct Seismograph<R = ThreadRng> {
    pub selection: SoilSelection,
    amplitude: Option<Amplitude>,
    last_result: Option<Result<MagnitudeReport, CalculateError>>,
    generator: AmplitudeGenerator<R>,
    player: Player,
}

impl Seismograph<ThreadRng> {
    pub fn new(player: Player) -> Self {
        Self::with_generator(AmplitudeGenerator::new(), player)
    }
}

impl<R: Rng> Seismograph<R> {
    pub fn with_generator(generator: AmplitudeGenerator<R>, player: Player) -> Self {
        Self {
            selection: SoilSelection::default(),
            amplitude: None,
            last_result: None,
            generator,
            player,
        }
    }

    /// Draw a new amplitude and restart playback with the matching clip.
    pub fn generate(&mut self) -> Amplitude {
        let amplitude = self.generator.next_amplitude();
        self.amplitude = Some(amplitude);
        info!(%amplitude, "generated earthquake");
        if let Err(e) = self.player.restart(amplitude) {
            warn!("{e}");
        }
        amplitude
    }

    /// Magnitude for the last amplitude and the current soil selection.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NoAmplitudeYet`] before the first generate,
    /// [`CalculateError::NoWeightSelected`] with every checkbox cleared, and
    /// [`CalculateError::Magnitude`] for a non-positive amplitude.
    pub fn calculate(&mut self) -> Result<MagnitudeReport, CalculateError> {
        let result = self.evaluate();
        match &result {
            Ok(report) => debug!(?report, "calculated magnitude"),
            Err(e) => debug!("calculation refused: {e}"),
        }
        self.last_result = Some(result);
        result
    }

    fn evaluate(&self) -> Result<MagnitudeReport, CalculateError> {
        let amplitude = self.amplitude.ok_or(CalculateError::NoAmplitudeYet)?;
        let site_response = self
            .selection
            .weights()
            .site_response()
            .ok_or(CalculateError::NoWeightSelected)?;
        let magnitude = calculate_magnitude(amplitude.as_f64(), site_response)?;
        Ok(MagnitudeReport {
            amplitude,
            site_response,
            magnitude,
            outcome: Outcome::for_magnitude(magnitude),
        })
    }

    /// Forget the amplitude and result, and stop playback.
    pub fn clear(&mut self) {
        self.amplitude = None;
        self.last_result = None;
        if let Some(outcome) = self.player.stop() {
            debug!(?outcome, "playback cleared");
        }
    }
}

impl<R> Seismograph<R> {
    pub fn amplitude(&self) -> Option<Amplitude> {
        self.amplitude
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        match self.last_result {
            Some(Ok(report)) => Some(report.outcome),
            _ => None,
        }
    }

    pub fn amplitude_text(&self) -> String {
        match self.amplitude {
            Some(amplitude) => format!("Highest Amplitude: {amplitude}"),
            None => "Highest Amplitude: N/A".to_string(),
        }
    }

    pub fn result_text(&self) -> String {
        match &self.last_result {
            None => String::new(),
            Some(Ok(report)) => format!("Magnitude: {:.2}", report.magnitude),
            Some(Err(e)) => e.to_string(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
}
