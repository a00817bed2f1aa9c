/// Sweep direction of the last carousel move.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    Backward,    // Panels leave to the right, arrive from the left
    #[default]
    Neutral,     // No move yet
    Forward,     // Panels leave to the left, arrive from the right
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Backward => -1.0,
            Direction::Neutral => 0.0,
            Direction::Forward => 1.0,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionPhase {
    Idle,                                                   // Displayed product at rest
    Exiting { elapsed: f32, from_offset: f32, from_opacity: f32 }, // Outgoing panel leaving
    Entering { elapsed: f32 },                              // Incoming panel arriving
}
