use formula_model::Command;

/// Result of transforming one command against an executed one.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOutcome {
    /// The command, rewritten to apply after the executed command.
    Transformed(Command),
    /// The executed command does not affect this one.
    Unchanged,
    /// The command no longer makes sense and must be dropped.
    Ignored,
}

impl TransformOutcome {
    /// Resolve the outcome to the command to apply, if any.
    pub fn resolve(self, original: &Command) -> Option<Command> {
        match self {
            TransformOutcome::Transformed(cmd) => Some(cmd),
            TransformOutcome::Unchanged => Some(original.clone()),
            TransformOutcome::Ignored => None,
        }
    }
}
