use serde::{Deserialize, Serialize};

/// Hosted-email service level requested alongside a domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailPlanTier {
    Basic,
    Standard,
    Premium,
    #[default]
    None,
}

/// Tier name, tier and reseller product-plan id.
const EMAIL_PLANS: &[(&str, EmailPlanTier, u32)] = &[
    ("basic", EmailPlanTier::Basic, 47),
    ("standard", EmailPlanTier::Standard, 48),
    ("premium", EmailPlanTier::Premium, 49),
];

impl EmailPlanTier {
    /// Resolves a tier name. Unknown names mean no email hosting.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        EMAIL_PLANS
            .iter()
            .find(|(plan, _, _)| plan.eq_ignore_ascii_case(name))
            .map(|(_, tier, _)| *tier)
            .unwrap_or(EmailPlanTier::None)
    }

    /// Reseller product-plan id, or `None` when no hosting is requested.
    pub fn plan_id(self) -> Option<u32> {
        EMAIL_PLANS
            .iter()
            .find(|(_, tier, _)| *tier == self)
            .map(|(_, _, id)| *id)
    }
}
