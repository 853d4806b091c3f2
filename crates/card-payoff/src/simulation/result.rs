use rust_decimal::Decimal;
use serde::Serialize;

use super::amortization::NON_CONVERGENT_MONTHS;
use super::classifier::CardStrategy;
use super::domain::CardId;
use super::recommendation::Recommendation;
use super::scenarios::{ClassifiedDebt, ScenarioComparison, ScenarioOutcome};

/// Per-card line of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAnalysis {
    pub id: CardId,
    pub name: String,
    pub debt: Decimal,
    pub monthly_rate: Decimal,
    pub minimum_payment: Decimal,
    pub monthly_cost: Decimal,
    pub strategy: CardStrategy,
    pub strategy_label: &'static str,
    pub observation: &'static str,
    /// Payment under the optimized plan (minimum plus surplus share).
    pub optimized_payment: Decimal,
    pub estimated_months_minimum: u32,
    pub estimated_months_optimized: u32,
    pub estimated_months_consolidated: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub total_months_minimum: u32,
    pub total_months_optimized: u32,
    pub total_months_consolidated: u32,
    pub total_interest_minimum: Decimal,
    pub total_interest_optimized: Decimal,
    pub total_interest_consolidated: Decimal,
    pub savings_optimized: Decimal,
    pub savings_consolidated: Decimal,
    pub total_debt: Decimal,
    pub total_minimums: Decimal,
    pub average_monthly_rate: Decimal,
    pub surplus: Decimal,
    pub undistributed_surplus: Decimal,
}

/// Everything the presentation layer needs; built once per run, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub cards: Vec<CardAnalysis>,
    pub summary: SimulationSummary,
    pub recommendation: Recommendation,
    pub alerts: Vec<String>,
    pub has_minimum_alert: bool,
}

impl SimulationResult {
    /// Shapes the scenario comparison and recommendation into the final record.
    /// Card order follows the caller's input order.
    pub fn assemble(
        debts: &[ClassifiedDebt],
        comparison: ScenarioComparison,
        recommendation: Recommendation,
    ) -> Self {
        let cards = debts
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let months = |outcome: &ScenarioOutcome| {
                    outcome.months_at(position).unwrap_or(NON_CONVERGENT_MONTHS)
                };
                let optimized_payment = comparison
                    .optimized
                    .card_at(position)
                    .map(|card| card.projection.payment)
                    .unwrap_or(entry.debt.minimum_payment);

                CardAnalysis {
                    id: entry.debt.id.clone(),
                    name: entry.debt.name.clone(),
                    debt: entry.debt.principal,
                    monthly_rate: entry.debt.monthly_rate,
                    minimum_payment: entry.debt.minimum_payment,
                    monthly_cost: entry.debt.monthly_interest_cost(),
                    strategy: entry.classification.strategy,
                    strategy_label: entry.classification.strategy.label(),
                    observation: entry.classification.observation,
                    optimized_payment,
                    estimated_months_minimum: months(&comparison.minimum_only),
                    estimated_months_optimized: months(&comparison.optimized),
                    estimated_months_consolidated: months(&comparison.consolidated),
                }
            })
            .collect();

        let summary = SimulationSummary {
            total_months_minimum: comparison.minimum_only.total_months,
            total_months_optimized: comparison.optimized.total_months,
            total_months_consolidated: comparison.consolidated.total_months,
            total_interest_minimum: comparison.minimum_only.total_interest,
            total_interest_optimized: comparison.optimized.total_interest,
            total_interest_consolidated: comparison.consolidated.total_interest,
            savings_optimized: comparison.savings_optimized,
            savings_consolidated: comparison.savings_consolidated,
            total_debt: comparison.overview.total_debt,
            total_minimums: comparison.overview.total_minimums,
            average_monthly_rate: comparison.overview.average_monthly_rate,
            surplus: comparison.overview.surplus,
            undistributed_surplus: comparison.overview.undistributed_surplus,
        };

        Self {
            cards,
            summary,
            recommendation,
            alerts: comparison.alerts,
            has_minimum_alert: comparison.has_minimum_alert,
        }
    }

    pub fn is_fallback_recommendation(&self) -> bool {
        self.recommendation.is_fallback()
    }
}
