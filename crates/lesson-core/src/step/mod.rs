pub mod definition;
pub mod delayed;
pub mod node;

pub use definition::StepDefinition;
pub use delayed::DelayedSubStep;
pub use node::{StepNode, StepSlot, StepStatus};
