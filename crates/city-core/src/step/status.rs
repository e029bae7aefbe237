/// Estado de un paso visto desde la capa de render (badges).
///
/// Se deriva de `currentStep` y `completedSteps`; no se persiste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Ni actual ni completado.
    Pending,
    /// Es el paso actual y aún no se completó.
    Current,
    /// Completado y no es el paso actual.
    Completed,
    /// Es el paso actual y ya estaba completado (el usuario volvió a él).
    Revisiting,
}

impl StepStatus {
    pub fn from_flags(is_current: bool, is_completed: bool) -> Self {
        match (is_current, is_completed) {
            (true, true) => StepStatus::Revisiting,
            (true, false) => StepStatus::Current,
            (false, true) => StepStatus::Completed,
            (false, false) => StepStatus::Pending,
        }
    }

    pub fn is_completed(self) -> bool { matches!(self, StepStatus::Completed | StepStatus::Revisiting) }
}
