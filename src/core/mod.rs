mod engine;
mod error;
mod types;

pub use engine::{calculate, project, project_with_variance};
pub use error::ProjectionError;
pub use types::{
    ProjectionInputs, ProjectionResult, Scenario, ScenarioParameters, ScenarioProjection,
    ValidationLimits, VarianceProjection, YearRecord,
};
