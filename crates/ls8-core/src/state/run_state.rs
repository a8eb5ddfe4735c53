use crate::fault::HaltReason;

/// Execution-state machine of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum RunState {
    /// Ready to execute the next instruction.
    #[default]
    Running,
    /// Terminal state; no further instruction executes.
    Halted(HaltReason),
}

impl RunState {
    /// Returns the halt reason, if this state is halted.
    #[must_use]
    pub const fn halt_reason(self) -> Option<HaltReason> {
        match self {
            Self::Halted(reason) => Some(reason),
            Self::Running => None,
        }
    }

    /// Returns `true` once the machine has halted.
    #[must_use]
    pub const fn is_halted(self) -> bool {
        matches!(self, Self::Halted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::RunState;
    use crate::fault::{Fault, HaltReason};

    #[test]
    fn run_state_default_is_running() {
        assert_eq!(RunState::default(), RunState::Running);
        assert!(!RunState::default().is_halted());
    }

    #[test]
    fn halt_reason_accessor_reports_only_halted_variant() {
        assert_eq!(RunState::Running.halt_reason(), None);
        assert_eq!(
            RunState::Halted(HaltReason::Instruction).halt_reason(),
            Some(HaltReason::Instruction)
        );

        let faulted = RunState::Halted(HaltReason::Fault(Fault::DivideByZero { pc: 4 }));
        assert!(faulted.is_halted());
    }
}
