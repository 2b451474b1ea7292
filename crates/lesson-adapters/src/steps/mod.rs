pub mod input;
pub mod onboarding;
pub mod quiz;
pub mod reveal;
pub mod statement;

pub use input::InputModeStep;
pub use onboarding::onboarding_flow;
pub use quiz::QuizGateStep;
pub use reveal::{EquationStep, RevealStep};
pub use statement::{AutoPlayStep, StatementStep};
