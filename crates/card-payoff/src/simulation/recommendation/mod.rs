mod catalog;
mod policy;

pub use catalog::ProductKind;
pub use policy::{ADULT_AGE, MINIMUM_BENEFIT, MINIMUM_SALARY, MINIMUM_SEVERANCE_BALANCE};

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::FinancialProfile;
use policy::{conditions_for, select_product, EligibilitySignals};

/// Product suggestion shown beside the payoff comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: ProductKind,
    pub product: &'static str,
    pub description: &'static str,
    pub benefits: Vec<&'static str>,
    pub profile: &'static str,
    pub conditions: String,
    pub message: &'static str,
}

impl Recommendation {
    /// True for the free educational material offered when no credit product fits.
    pub fn is_fallback(&self) -> bool {
        !self.kind.is_credit_product()
    }
}

/// Picks one product for the profile. Pure: the same profile and `today`
/// always produce the same recommendation, and a result is always produced.
pub fn recommend(profile: &FinancialProfile, today: NaiveDate) -> Recommendation {
    let signals = EligibilitySignals {
        occupation: profile.occupation,
        has_payroll_loan: profile.has_payroll_loan,
        monthly_benefit: profile.monthly_benefit,
        monthly_salary: profile.monthly_salary,
        has_severance_fund: profile.has_severance_fund,
        severance_fund_balance: profile.severance_fund_balance,
        age: profile.age_on(today),
    };

    let kind = select_product(&signals);
    tracing::debug!(occupation = profile.occupation.code(), product = ?kind, "product selected");

    let sheet = kind.sheet();
    Recommendation {
        kind,
        product: sheet.product,
        description: sheet.description,
        benefits: sheet.benefits.to_vec(),
        profile: sheet.profile,
        conditions: conditions_for(kind, &signals),
        message: sheet.message,
    }
}
