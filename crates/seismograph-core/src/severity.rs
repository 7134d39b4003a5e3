/// Amplitude band that decides which clip plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeverityBand {
    Low,
    Mid,
    High,
}

impl SeverityBand {
    pub const MID_THRESHOLD: u32 = 300;
    pub const HIGH_THRESHOLD: u32 = 700;

    pub fn for_amplitude(amplitude: u32) -> Self {
        if amplitude < Self::MID_THRESHOLD {
            SeverityBand::Low
        } else if amplitude < Self::HIGH_THRESHOLD {
            SeverityBand::Mid
        } else {
            SeverityBand::High
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SeverityBand::Low => "low",
            SeverityBand::Mid => "mid",
            SeverityBand::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(SeverityBand::for_amplitude(1), SeverityBand::Low);
        assert_eq!(SeverityBand::for_amplitude(299), SeverityBand::Low);
        assert_eq!(SeverityBand::for_amplitude(300), SeverityBand::Mid);
        assert_eq!(SeverityBand::for_amplitude(699), SeverityBand::Mid);
        assert_eq!(SeverityBand::for_amplitude(700), SeverityBand::High);
        assert_eq!(SeverityBand::for_amplitude(1000), SeverityBand::High);
    }

    #[test]
    fn bands_partition_the_amplitude_range() {
        let mut counts = [0usize; 3];
        for a in 1..=1000 {
            let idx = match SeverityBand::for_amplitude(a) {
                SeverityBand::Low => 0,
                SeverityBand::Mid => 1,
                SeverityBand::High => 2,
            };
            counts[idx] += 1;
        }
        assert_eq!(counts, [299, 400, 301]);
    }

    #[test]
    fn high_amplitude_scenario_selects_high_clip() {
        assert_eq!(SeverityBand::for_amplitude(850).name(), "high");
    }
}
