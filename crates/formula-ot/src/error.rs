use formula_model::CommandKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// An executed command affects `to_transform` but no rule accounts for it.
    #[error("no transformation of {to_transform} against executed {executed}")]
    MissingTransformation {
        to_transform: CommandKind,
        executed: CommandKind,
    },
}
