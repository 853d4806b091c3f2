use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{CardId, CardInput, FinancialProfileInput, Occupation};
use super::numeric::parse_currency;

/// Most cards a single simulation accepts.
pub const MAX_CARDS: usize = 5;

/// Everything the host collects across the form steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub cards: Vec<CardInput>,
    pub affordable_amount: String,
    pub occupation: Occupation,
    pub profile: FinancialProfileInput,
    /// Reference date for age calculation; hosts default it to the local date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Card field that must be filled before a simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    TotalDebt,
    MonthlyRate,
    MinimumPayment,
}

impl CardField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalDebt => "total_debt",
            Self::MonthlyRate => "monthly_rate",
            Self::MinimumPayment => "minimum_payment",
        }
    }
}

/// Rejection raised before the engine runs. The engine itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("at least one card is required")]
    NoCards,
    #[error("at most {max} cards are accepted, got {actual}")]
    TooManyCards { max: usize, actual: usize },
    #[error("card '{card_id}' is missing {}", .field.label())]
    MissingCardField { card_id: CardId, field: CardField },
    #[error("card id '{0}' appears more than once")]
    DuplicateCardId(CardId),
    #[error("the affordable monthly amount is required")]
    MissingAffordableAmount,
}

impl SimulationRequest {
    /// Checks that every required field is present. Payment plausibility is not
    /// checked here: minimums above the affordable amount become a result alert.
    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.cards.is_empty() {
            return Err(IntakeError::NoCards);
        }
        if self.cards.len() > MAX_CARDS {
            return Err(IntakeError::TooManyCards {
                max: MAX_CARDS,
                actual: self.cards.len(),
            });
        }

        let mut seen = HashSet::new();
        for card in &self.cards {
            if !seen.insert(&card.id) {
                return Err(IntakeError::DuplicateCardId(card.id.clone()));
            }

            let missing = [
                (CardField::TotalDebt, card.total_debt.as_str()),
                (CardField::MonthlyRate, card.effective_rate_input()),
                (CardField::MinimumPayment, card.minimum_payment.as_str()),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());

            if let Some((field, _)) = missing {
                return Err(IntakeError::MissingCardField {
                    card_id: card.id.clone(),
                    field,
                });
            }
        }

        if self.affordable_amount.trim().is_empty() {
            return Err(IntakeError::MissingAffordableAmount);
        }

        Ok(())
    }

    /// Sum of the typed minimums, as the start-of-simulation event reports it.
    pub fn total_minimums(&self) -> Decimal {
        self.cards
            .iter()
            .map(|card| parse_currency(&card.minimum_payment))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}
