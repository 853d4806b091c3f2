use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::numeric::{parse_currency, parse_percent};

/// Rate applied when the cardholder does not know the monthly rate of a card
/// (national average for revolving card credit).
pub const AVERAGE_CARD_RATE_INPUT: &str = "15,00";

/// Caller supplied identifier for a card; stable across one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw card fields exactly as typed into the card form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInput {
    pub id: CardId,
    #[serde(default)]
    pub name: String,
    pub total_debt: String,
    #[serde(default)]
    pub monthly_rate: String,
    pub minimum_payment: String,
    #[serde(default)]
    pub use_average_rate: bool,
}

impl CardInput {
    /// Rate string after the "use the average rate" shortcut is applied.
    pub fn effective_rate_input(&self) -> &str {
        if self.use_average_rate {
            AVERAGE_CARD_RATE_INPUT
        } else {
            &self.monthly_rate
        }
    }

    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            format!("Cartão {}", self.id)
        } else {
            trimmed.to_string()
        }
    }
}

/// One parsed credit balance. Immutable for the lifetime of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Debt {
    pub id: CardId,
    pub name: String,
    pub principal: Decimal,
    pub monthly_rate: Decimal,
    pub minimum_payment: Decimal,
}

impl Debt {
    pub fn from_input(input: &CardInput) -> Self {
        Self {
            id: input.id.clone(),
            name: input.display_name(),
            principal: parse_currency(&input.total_debt),
            monthly_rate: parse_percent(input.effective_rate_input()),
            minimum_payment: parse_currency(&input.minimum_payment),
        }
    }

    /// Interest accrued in one month on the full balance.
    pub fn monthly_interest_cost(&self) -> Decimal {
        self.principal.saturating_mul(self.monthly_rate)
    }
}

/// Occupation category collected by the qualification form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    /// Retired or pensioner paid by the social security institute (INSS).
    #[serde(alias = "inss")]
    RetiredSocialSecurity,
    /// Continuous-cash disability or elderly benefit recipient (BPC/LOAS).
    #[serde(alias = "bpc")]
    DisabilityBenefit,
    /// Formally registered private-sector employee (CLT).
    #[serde(alias = "clt")]
    SalariedEmployee,
    #[serde(alias = "outros")]
    Other,
}

impl Occupation {
    /// Maps the form codes; unknown codes fall back to [`Occupation::Other`].
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "inss" | "retired_social_security" => Self::RetiredSocialSecurity,
            "bpc" | "disability_benefit" => Self::DisabilityBenefit,
            "clt" | "salaried_employee" => Self::SalariedEmployee,
            _ => Self::Other,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::RetiredSocialSecurity => "inss",
            Self::DisabilityBenefit => "bpc",
            Self::SalariedEmployee => "clt",
            Self::Other => "outros",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RetiredSocialSecurity => "Aposentado INSS",
            Self::DisabilityBenefit => "Beneficiário BPC/LOAS",
            Self::SalariedEmployee => "Trabalhador CLT",
            Self::Other => "Outros",
        }
    }

    /// Paid through a public benefit rather than a salary.
    pub const fn is_benefit_recipient(self) -> bool {
        matches!(self, Self::RetiredSocialSecurity | Self::DisabilityBenefit)
    }
}

/// Raw financial-data form answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProfileInput {
    #[serde(default)]
    pub monthly_benefit: Option<String>,
    #[serde(default)]
    pub monthly_salary: Option<String>,
    #[serde(default, deserialize_with = "yes_no")]
    pub has_payroll_loan: bool,
    #[serde(default)]
    pub payroll_installment: Option<String>,
    #[serde(default, deserialize_with = "yes_no")]
    pub has_severance_fund: bool,
    #[serde(default)]
    pub severance_fund_balance: Option<String>,
    pub birth_date: NaiveDate,
}

/// Parsed qualification data consumed by the recommendation cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialProfile {
    pub occupation: Occupation,
    pub has_payroll_loan: bool,
    pub payroll_installment: Option<Decimal>,
    pub monthly_benefit: Decimal,
    pub monthly_salary: Decimal,
    pub has_severance_fund: bool,
    pub severance_fund_balance: Decimal,
    pub birth_date: NaiveDate,
}

impl FinancialProfile {
    pub fn from_input(occupation: Occupation, input: &FinancialProfileInput) -> Self {
        let amount = |value: &Option<String>| value.as_deref().map(parse_currency);

        Self {
            occupation,
            has_payroll_loan: input.has_payroll_loan,
            payroll_installment: amount(&input.payroll_installment),
            monthly_benefit: amount(&input.monthly_benefit).unwrap_or_default(),
            monthly_salary: amount(&input.monthly_salary).unwrap_or_default(),
            has_severance_fund: input.has_severance_fund,
            severance_fund_balance: amount(&input.severance_fund_balance).unwrap_or_default(),
            birth_date: input.birth_date,
        }
    }

    /// Whole years lived as of `today`; negative for birth dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }
}

/// Accepts JSON booleans as well as the `"sim"` / `"nao"` answers of the form.
fn yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Answer {
        Flag(bool),
        Text(String),
    }

    match Answer::deserialize(deserializer)? {
        Answer::Flag(flag) => Ok(flag),
        Answer::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "sim" | "s" | "yes" | "true" => Ok(true),
            "nao" | "não" | "n" | "no" | "false" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected sim/nao answer, got '{other}'"
            ))),
        },
    }
}
