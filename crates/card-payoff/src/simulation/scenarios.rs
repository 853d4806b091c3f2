use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::amortization::{project_payoff, PayoffProjection};
use super::classifier::Classification;
use super::domain::{CardId, Debt};

/// Monthly rate of the consolidated lower-rate credit product.
pub const CONSOLIDATED_MONTHLY_RATE: Decimal = dec!(0.02);

pub const MINIMUM_SHORTFALL_ALERT: &str = "O valor mensal informado não cobre o pagamento mínimo de todos os cartões. Considere renegociar ou buscar crédito adicional.";

/// A parsed debt together with its classifier verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDebt {
    pub debt: Debt,
    pub classification: Classification,
}

impl ClassifiedDebt {
    /// Surplus weight: interest accrued per month on the whole balance.
    pub fn weight(&self) -> Decimal {
        self.debt.monthly_interest_cost()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    MinimumOnly,
    Optimized,
    Consolidated,
}

impl ScenarioKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinimumOnly => "Pagando o mínimo",
            Self::Optimized => "Distribuição otimizada",
            Self::Consolidated => "Crédito com juros menores",
        }
    }
}

/// One card's projection inside a scenario. `position` is the card's index in
/// the caller's original ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardProjection {
    pub position: usize,
    pub card_id: CardId,
    pub monthly_rate: Decimal,
    #[serde(flatten)]
    pub projection: PayoffProjection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub kind: ScenarioKind,
    pub cards: Vec<CardProjection>,
    /// Months until the last card is paid off.
    pub total_months: u32,
    pub total_interest: Decimal,
}

impl ScenarioOutcome {
    fn from_projections(kind: ScenarioKind, cards: Vec<CardProjection>) -> Self {
        let total_months = cards
            .iter()
            .map(|card| card.projection.months)
            .fold(0, u32::max);
        let total_interest = cards
            .iter()
            .map(|card| card.projection.total_interest)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        tracing::debug!(
            scenario = ?kind,
            cards = cards.len(),
            total_months,
            %total_interest,
            "scenario simulated"
        );

        Self {
            kind,
            cards,
            total_months,
            total_interest,
        }
    }

    pub fn card_at(&self, position: usize) -> Option<&CardProjection> {
        self.cards.iter().find(|card| card.position == position)
    }

    pub fn months_at(&self, position: usize) -> Option<u32> {
        self.card_at(position).map(|card| card.projection.months)
    }
}

/// Household-level figures that hold for every scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioOverview {
    pub total_debt: Decimal,
    pub total_minimums: Decimal,
    pub affordable_amount: Decimal,
    /// Affordable amount left after every minimum, never negative.
    pub surplus: Decimal,
    /// Surplus that no card was eligible to receive.
    pub undistributed_surplus: Decimal,
    /// Debt-weighted mean of the card rates; zero with no debt.
    pub average_monthly_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioComparison {
    pub overview: PortfolioOverview,
    pub minimum_only: ScenarioOutcome,
    pub optimized: ScenarioOutcome,
    pub consolidated: ScenarioOutcome,
    /// Interest saved by the optimized plan; negative when it does worse.
    pub savings_optimized: Decimal,
    /// Interest saved by consolidating; negative when it does worse.
    pub savings_consolidated: Decimal,
    pub alerts: Vec<String>,
    pub has_minimum_alert: bool,
}

pub fn run_scenarios(debts: &[ClassifiedDebt], affordable_amount: Decimal) -> ScenarioComparison {
    let total_minimums = debts
        .iter()
        .map(|entry| entry.debt.minimum_payment)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let has_minimum_alert = total_minimums > affordable_amount;
    let alerts = if has_minimum_alert {
        vec![MINIMUM_SHORTFALL_ALERT.to_string()]
    } else {
        Vec::new()
    };

    let surplus = affordable_amount
        .saturating_sub(total_minimums)
        .max(Decimal::ZERO);
    let shares = surplus_shares(debts, surplus);
    let distributed = shares
        .iter()
        .copied()
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let overview = PortfolioOverview {
        total_debt: total_debt(debts),
        total_minimums,
        affordable_amount,
        surplus,
        undistributed_surplus: if distributed.is_zero() {
            surplus
        } else {
            Decimal::ZERO
        },
        average_monthly_rate: average_monthly_rate(debts),
    };

    let minimum_only = ScenarioOutcome::from_projections(
        ScenarioKind::MinimumOnly,
        debts
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                project_card(
                    position,
                    &entry.debt,
                    entry.debt.minimum_payment,
                    entry.debt.monthly_rate,
                )
            })
            .collect(),
    );

    let optimized = ScenarioOutcome::from_projections(
        ScenarioKind::Optimized,
        distribution_order(debts)
            .into_iter()
            .map(|position| {
                let debt = &debts[position].debt;
                let payment = debt.minimum_payment.saturating_add(shares[position]);
                project_card(position, debt, payment, debt.monthly_rate)
            })
            .collect(),
    );

    let consolidated = ScenarioOutcome::from_projections(
        ScenarioKind::Consolidated,
        debts
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                project_card(
                    position,
                    &entry.debt,
                    entry.debt.minimum_payment,
                    CONSOLIDATED_MONTHLY_RATE,
                )
            })
            .collect(),
    );

    let savings_optimized = minimum_only
        .total_interest
        .saturating_sub(optimized.total_interest);
    let savings_consolidated = minimum_only
        .total_interest
        .saturating_sub(consolidated.total_interest);

    ScenarioComparison {
        overview,
        minimum_only,
        optimized,
        consolidated,
        savings_optimized,
        savings_consolidated,
        alerts,
        has_minimum_alert,
    }
}

/// Card positions in surplus-distribution order: renegotiate, then prioritize,
/// then pay-minimum; higher rate first within a tag. The sort is stable.
pub fn distribution_order(debts: &[ClassifiedDebt]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..debts.len()).collect();
    order.sort_by(|&left, &right| {
        let (left, right) = (&debts[left], &debts[right]);
        left.classification
            .strategy
            .distribution_rank()
            .cmp(&right.classification.strategy.distribution_rank())
            .then_with(|| right.debt.monthly_rate.cmp(&left.debt.monthly_rate))
    });
    order
}

/// Extra monthly payment for each card position. Eligible cards split the
/// surplus in proportion to their weight; with no eligible weight the surplus
/// is left undistributed.
pub fn surplus_shares(debts: &[ClassifiedDebt], surplus: Decimal) -> Vec<Decimal> {
    let eligible = |entry: &ClassifiedDebt| entry.classification.strategy.receives_surplus();

    let total_weight = debts
        .iter()
        .filter(|entry| eligible(entry))
        .map(ClassifiedDebt::weight)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    debts
        .iter()
        .map(|entry| {
            if surplus <= Decimal::ZERO || !eligible(entry) {
                return Decimal::ZERO;
            }
            entry
                .weight()
                .checked_div(total_weight)
                .and_then(|fraction| fraction.checked_mul(surplus))
                .unwrap_or(Decimal::ZERO)
        })
        .collect()
}

fn project_card(
    position: usize,
    debt: &Debt,
    payment: Decimal,
    monthly_rate: Decimal,
) -> CardProjection {
    CardProjection {
        position,
        card_id: debt.id.clone(),
        monthly_rate,
        projection: project_payoff(debt.principal, payment, monthly_rate),
    }
}

fn total_debt(debts: &[ClassifiedDebt]) -> Decimal {
    debts
        .iter()
        .map(|entry| entry.debt.principal)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

fn average_monthly_rate(debts: &[ClassifiedDebt]) -> Decimal {
    let weighted = debts
        .iter()
        .map(ClassifiedDebt::weight)
        .fold(Decimal::ZERO, Decimal::saturating_add);
    weighted
        .checked_div(total_debt(debts))
        .unwrap_or(Decimal::ZERO)
}
