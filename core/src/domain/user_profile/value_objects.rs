#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserProfileInput {
    pub household_size: Option<u32>,
    pub dietary_preferences: Option<Vec<String>>,
    pub cooking_style: Option<String>,
    pub cooking_goals: Option<Vec<String>>,
    pub onboarding_completed: Option<bool>,
}
