use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ProcessError;

/// Número de paso. Siempre positivo; serializa como entero plano.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepNumber(NonZeroU32);

impl StepNumber {
    pub const FIRST: StepNumber = StepNumber(NonZeroU32::MIN);

    pub fn new(step: u32) -> Result<Self, ProcessError> {
        NonZeroU32::new(step).map(StepNumber).ok_or(ProcessError::InvalidStep(step))
    }

    pub const fn from_nonzero(step: NonZeroU32) -> Self { StepNumber(step) }

    pub fn get(self) -> u32 { self.0.get() }
}

impl Default for StepNumber {
    fn default() -> Self { Self::FIRST }
}

impl FromStr for StepNumber {
    type Err = ProcessError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s.trim().parse().map_err(|_| ProcessError::InvalidStepInput(s.to_string()))?;
        StepNumber::new(n)
    }
}

impl fmt::Display for StepNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}
