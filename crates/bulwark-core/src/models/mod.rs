//! Graph reference data, personal-record views, and ephemeral score entities.

pub mod edge;
pub mod effectiveness;
pub mod habit;
pub mod node;
pub mod results;

pub use edge::{CausalEdge, EdgeType};
pub use effectiveness::{Effectiveness, EffectivenessRating};
pub use habit::{HabitClassification, HabitStatus};
pub use node::CausalNode;
pub use results::{DefenseResult, ImpactResult};
