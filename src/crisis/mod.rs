// Crisis module
// Public interface for crisis detection and support resources

mod detector;
mod resources;

pub use detector::{CrisisDetector, CrisisKeywords, DEFAULT_CRISIS_PHRASES};
pub use resources::{
    ContactAction, CopingStrategy, CrisisResource, COPING_STRATEGIES, CRISIS_LIFELINE,
    CRISIS_RESOURCES, CRISIS_TEXT_KEYWORD, CRISIS_TEXT_NUMBER, EMERGENCY_NUMBER,
    SAFETY_PLAN_STEPS, SAFETY_PLAN_URL,
};
