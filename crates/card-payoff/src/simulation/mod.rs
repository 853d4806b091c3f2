//! Credit-card payoff simulation.
//!
//! A run parses the typed card fields, classifies each debt, projects three
//! payoff scenarios and pairs the comparison with one lending-product
//! recommendation. The engine is a pure function of its inputs; validation,
//! analytics and transport live in [`service`] and [`router`].

pub mod amortization;
pub mod classifier;
pub mod domain;
pub mod events;
pub mod format;
pub mod import;
pub mod intake;
pub mod numeric;
pub mod recommendation;
pub mod result;
pub mod router;
pub mod scenarios;
pub mod service;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;

pub use amortization::{months_to_payoff, project_payoff, PayoffProjection, NON_CONVERGENT_MONTHS};
pub use classifier::{classify, CardStrategy, Classification};
pub use domain::{CardId, CardInput, Debt, FinancialProfile, FinancialProfileInput, Occupation};
pub use events::{NoopObserver, ObserverError, SimulationEvent, SimulationObserver};
pub use import::{import_cards, CardImportError};
pub use intake::{CardField, IntakeError, SimulationRequest, MAX_CARDS};
pub use recommendation::{recommend, ProductKind, Recommendation};
pub use result::{CardAnalysis, SimulationResult, SimulationSummary};
pub use router::simulation_router;
pub use scenarios::{run_scenarios, ClassifiedDebt, ScenarioComparison, ScenarioKind};
pub use service::PayoffSimulationService;

use numeric::parse_currency;

/// Runs the whole engine for one request. Never fails: malformed amounts
/// degrade to zero and a minimum-payment shortfall becomes an alert.
pub fn simulate_payoff(request: &SimulationRequest, today: NaiveDate) -> SimulationResult {
    let debts: Vec<ClassifiedDebt> = request
        .cards
        .iter()
        .map(Debt::from_input)
        .map(|debt| ClassifiedDebt {
            classification: classify(&debt),
            debt,
        })
        .collect();

    let comparison = run_scenarios(&debts, parse_currency(&request.affordable_amount));
    let profile = FinancialProfile::from_input(request.occupation, &request.profile);
    let recommendation = recommend(&profile, today);

    tracing::info!(
        cards = debts.len(),
        months_minimum = comparison.minimum_only.total_months,
        months_optimized = comparison.optimized.total_months,
        savings = %comparison.savings_optimized,
        minimum_alert = comparison.has_minimum_alert,
        product = recommendation.product,
        "payoff simulation completed"
    );

    SimulationResult::assemble(&debts, comparison, recommendation)
}
