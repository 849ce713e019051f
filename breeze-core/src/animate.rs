//! The entrance animation, described as pure data.
//!
//! The sequence has no functional role; a rendering adapter interprets it,
//! so display logic stays testable without a rendering surface.

/// Display element a step animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    City,
    Temp,
    Desc,
    /// The humidity/wind/pressure block.
    Details,
    Update,
}

/// How an element enters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Slide in vertically from offset `dy` while fading in.
    Slide { dy: f64 },
    /// Scale up from zero while fading in.
    Scale,
    /// Fade in only.
    Fade,
}

/// One step of the entrance sequence. Delay and duration are in time-units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub target: Target,
    pub motion: Motion,
    pub delay: f64,
    pub duration: f64,
}

/// The fixed entrance sequence, played once per successful display.
pub fn entrance() -> Vec<Step> {
    vec![
        Step { target: Target::City, motion: Motion::Slide { dy: -30.0 }, delay: 0.0, duration: 1.0 },
        Step { target: Target::Temp, motion: Motion::Scale, delay: 0.3, duration: 1.0 },
        Step { target: Target::Desc, motion: Motion::Slide { dy: 20.0 }, delay: 0.6, duration: 1.0 },
        Step { target: Target::Details, motion: Motion::Slide { dy: 30.0 }, delay: 0.9, duration: 1.0 },
        Step { target: Target::Update, motion: Motion::Fade, delay: 1.2, duration: 1.0 },
    ]
}
