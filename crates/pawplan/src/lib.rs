pub mod catalog;
pub mod config;
pub mod error;
pub mod nutrition;
pub mod plans;
pub mod pricing;
pub mod recommendation;
pub mod telemetry;

pub use catalog::{Recipe, RecipeCatalog};
pub use error::AppError;
pub use plans::{PlanQuoter, PlanRequest, PlanService};
