/// Expected effects of a quake, bucketed by magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    MinorTremor,
    Light,
    Moderate,
    Strong,
    Major,
    Great,
}

impl Outcome {
    /// Table order, weakest first.
    pub const ALL: [Outcome; 6] = [
        Outcome::MinorTremor,
        Outcome::Light,
        Outcome::Moderate,
        Outcome::Strong,
        Outcome::Major,
        Outcome::Great,
    ];

    /// Lower bounds are inclusive; anything under 3.0 counts as a minor tremor.
    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude < 3.0 {
            Outcome::MinorTremor
        } else if magnitude < 4.0 {
            Outcome::Light
        } else if magnitude < 5.0 {
            Outcome::Moderate
        } else if magnitude < 6.0 {
            Outcome::Strong
        } else if magnitude < 7.0 {
            Outcome::Major
        } else {
            Outcome::Great
        }
    }

    pub fn range_label(self) -> &'static str {
        match self {
            Outcome::MinorTremor => "1.0 - 3.0",
            Outcome::Light => "3.0 - 4.0",
            Outcome::Moderate => "4.0 - 5.0",
            Outcome::Strong => "5.0 - 6.0",
            Outcome::Major => "6.0 - 7.0",
            Outcome::Great => "7.0+",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Outcome::MinorTremor => "Minor tremor, no damage.",
            Outcome::Light => "Light earthquake, slight damage.",
            Outcome::Moderate => "Moderate earthquake, some damage.",
            Outcome::Strong => "Strong earthquake, moderate damage.",
            Outcome::Major => "Major earthquake, serious damage.",
            Outcome::Great => "Great earthquake, severe damage.",
        }
    }
}
