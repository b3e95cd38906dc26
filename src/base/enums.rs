use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the fluid phases of the black-oil model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Phase {
    /// Water phase
    Aqueous,

    /// Oil phase
    Liquid,

    /// Gas phase
    Vapour,
}

impl Phase {
    /// Returns the canonical index of the phase (water = 0, oil = 1, gas = 2)
    pub fn index(&self) -> usize {
        match self {
            Phase::Aqueous => 0,
            Phase::Liquid => 1,
            Phase::Vapour => 2,
        }
    }
}

/// Holds the set of active phases and their positions in per-phase arrays
///
/// Active phases are packed in canonical order (water, oil, gas); the
/// position of an active phase selects its row in the pressure and
/// saturation arrays produced by the equilibration.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct PhaseUsage {
    used: [bool; 3],
    pos: [usize; 3],
    n_phases: usize,
}

impl PhaseUsage {
    /// Allocates a new instance from the activation flags
    pub fn new(water: bool, oil: bool, gas: bool) -> Result<Self, StrError> {
        if !(water || oil || gas) {
            return Err("at least one phase must be active");
        }
        let used = [water, oil, gas];
        let mut pos = [0; 3];
        let mut n_phases = 0;
        for i in 0..3 {
            if used[i] {
                pos[i] = n_phases;
                n_phases += 1;
            }
        }
        Ok(PhaseUsage { used, pos, n_phases })
    }

    /// Returns the number of active phases
    pub fn n_phases(&self) -> usize {
        self.n_phases
    }

    /// Tells whether a phase is active
    pub fn used(&self, phase: Phase) -> bool {
        self.used[phase.index()]
    }

    /// Returns the position of a phase in per-phase arrays (meaningful for active phases only)
    pub fn pos(&self, phase: Phase) -> usize {
        self.pos[phase.index()]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
