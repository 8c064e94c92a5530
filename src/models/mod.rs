// Data models for the coaching decision engine

pub mod activity;
pub mod anomaly;
pub mod intent;
pub mod strength_workout;
pub mod training_plan;
pub mod trend;
pub mod user_profile;
pub mod workout_lookup;

pub use activity::*;
pub use anomaly::*;
pub use intent::*;
pub use strength_workout::*;
pub use training_plan::*;
pub use trend::*;
pub use user_profile::*;
pub use workout_lookup::*;
