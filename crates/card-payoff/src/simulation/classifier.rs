use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::domain::Debt;

/// Monthly rate above which a card should be renegotiated or replaced.
pub const RENEGOTIATE_RATE: Decimal = dec!(0.15);
/// Monthly rate above which a card competes for surplus cash.
pub const PRIORITIZE_RATE: Decimal = dec!(0.10);
/// Balance above which a high-rate card is an urgent renegotiation.
pub const URGENT_BALANCE: Decimal = dec!(5000);
/// Balance above which a mid-rate card is prioritized regardless of its minimum.
pub const LARGE_BALANCE: Decimal = dec!(3000);
/// Share of the minimum payment eaten by interest that makes a mid-rate card a priority.
pub const INTEREST_TO_MINIMUM_RATIO: Decimal = dec!(0.7);

/// Payoff tag assigned to every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStrategy {
    Renegotiate,
    Prioritize,
    PayMinimum,
}

impl CardStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Renegotiate => "Renegociar",
            Self::Prioritize => "Priorizar",
            Self::PayMinimum => "Pagar o mínimo",
        }
    }

    /// Position in the surplus distribution order; lower goes first.
    pub const fn distribution_rank(self) -> u8 {
        match self {
            Self::Renegotiate => 0,
            Self::Prioritize => 1,
            Self::PayMinimum => 2,
        }
    }

    /// Whether the card shares in cash left over after all minimums.
    pub const fn receives_surplus(self) -> bool {
        matches!(self, Self::Renegotiate | Self::Prioritize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub strategy: CardStrategy,
    pub observation: &'static str,
}

struct ClassificationRule {
    name: &'static str,
    applies: fn(&Debt) -> bool,
    strategy: CardStrategy,
    observation: &'static str,
}

/// First matching rule wins; the last rule always matches.
static RULES: [ClassificationRule; 5] = [
    ClassificationRule {
        name: "high_rate_large_balance",
        applies: high_rate_large_balance,
        strategy: CardStrategy::Renegotiate,
        observation: "Dívida alta com juros altos - renegociação urgente recomendada",
    },
    ClassificationRule {
        name: "high_rate",
        applies: high_rate,
        strategy: CardStrategy::Renegotiate,
        observation: "Alta taxa de juros - considere quitação com crédito mais barato",
    },
    ClassificationRule {
        name: "mid_rate_costly",
        applies: mid_rate_costly,
        strategy: CardStrategy::Prioritize,
        observation: "Juros altos - priorize pagamento acima do mínimo",
    },
    ClassificationRule {
        name: "mid_rate",
        applies: mid_rate,
        strategy: CardStrategy::PayMinimum,
        observation: "Juros médios - mantenha o mínimo enquanto prioriza outros cartões",
    },
    ClassificationRule {
        name: "low_rate",
        applies: any_rate,
        strategy: CardStrategy::PayMinimum,
        observation: "Juros baixos - pague o mínimo e priorize cartões com juros maiores",
    },
];

fn high_rate_large_balance(debt: &Debt) -> bool {
    high_rate(debt) && debt.principal > URGENT_BALANCE
}

fn high_rate(debt: &Debt) -> bool {
    debt.monthly_rate > RENEGOTIATE_RATE
}

fn mid_rate_costly(debt: &Debt) -> bool {
    mid_rate(debt) && (interest_dominates_minimum(debt) || debt.principal > LARGE_BALANCE)
}

fn mid_rate(debt: &Debt) -> bool {
    debt.monthly_rate > PRIORITIZE_RATE
}

fn any_rate(_: &Debt) -> bool {
    true
}

pub fn classify(debt: &Debt) -> Classification {
    let rule = RULES
        .iter()
        .find(|rule| (rule.applies)(debt))
        .unwrap_or(&RULES[RULES.len() - 1]);

    tracing::debug!(
        card = %debt.id,
        rule = rule.name,
        strategy = ?rule.strategy,
        "card classified"
    );

    Classification {
        strategy: rule.strategy,
        observation: rule.observation,
    }
}

/// A zero minimum with any interest at all counts as fully consumed by interest.
fn interest_dominates_minimum(debt: &Debt) -> bool {
    let cost = debt.monthly_interest_cost();
    match cost.checked_div(debt.minimum_payment) {
        Some(ratio) => ratio > INTEREST_TO_MINIMUM_RATIO,
        None => cost > Decimal::ZERO,
    }
}
