#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub completed: usize,
    pub failed: usize,
}
