use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::super::domain::Occupation;
use super::super::format::format_decimal_comma;
use super::catalog::ProductKind;

/// Minimum monthly benefit for a new benefit-deducted loan.
pub const MINIMUM_BENEFIT: Decimal = dec!(1400);
/// Minimum monthly salary for a new payroll-deducted loan.
pub const MINIMUM_SALARY: Decimal = dec!(1500);
/// Minimum severance-fund balance worth advancing.
pub const MINIMUM_SEVERANCE_BALANCE: Decimal = dec!(1000);
pub const ADULT_AGE: i32 = 18;

/// Facts the cascade reads, already parsed and with age resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EligibilitySignals {
    pub(crate) occupation: Occupation,
    pub(crate) has_payroll_loan: bool,
    pub(crate) monthly_benefit: Decimal,
    pub(crate) monthly_salary: Decimal,
    pub(crate) has_severance_fund: bool,
    pub(crate) severance_fund_balance: Decimal,
    pub(crate) age: i32,
}

struct RecommendationRule {
    product: ProductKind,
    applies: fn(&EligibilitySignals) -> bool,
}

/// Strict priority order: the first matching rule wins and nothing after it is
/// consulted. When none match the financial-education fallback applies.
static CASCADE: [RecommendationRule; 5] = [
    RecommendationRule {
        product: ProductKind::BenefitPayrollPortability,
        applies: benefit_recipient_with_payroll_loan,
    },
    RecommendationRule {
        product: ProductKind::PrivatePayrollPortability,
        applies: employee_with_payroll_loan,
    },
    RecommendationRule {
        product: ProductKind::BenefitPayrollLoan,
        applies: benefit_recipient_with_margin,
    },
    RecommendationRule {
        product: ProductKind::PrivatePayrollLoan,
        applies: employee_with_margin,
    },
    RecommendationRule {
        product: ProductKind::SeveranceFundAdvance,
        applies: adult_with_severance_balance,
    },
];

pub(crate) fn select_product(signals: &EligibilitySignals) -> ProductKind {
    CASCADE
        .iter()
        .find(|rule| (rule.applies)(signals))
        .map(|rule| rule.product)
        .unwrap_or(ProductKind::FinancialEducation)
}

/// One-line summary of the figures that drove the selection.
pub(crate) fn conditions_for(product: ProductKind, signals: &EligibilitySignals) -> String {
    let payroll_loan = if signals.has_payroll_loan { "Sim" } else { "Não" };

    match product {
        ProductKind::BenefitPayrollPortability | ProductKind::BenefitPayrollLoan => format!(
            "Benefício: R$ {} | Consignado ativo: {payroll_loan}",
            format_decimal_comma(signals.monthly_benefit)
        ),
        ProductKind::PrivatePayrollPortability | ProductKind::PrivatePayrollLoan => format!(
            "Salário: R$ {} | Consignado ativo: {payroll_loan}",
            format_decimal_comma(signals.monthly_salary)
        ),
        ProductKind::SeveranceFundAdvance => format!(
            "Saldo FGTS: R$ {} | Idade: {} anos",
            format_decimal_comma(signals.severance_fund_balance),
            signals.age
        ),
        ProductKind::FinancialEducation => "Continue organizando suas finanças".to_string(),
    }
}

fn benefit_recipient_with_payroll_loan(signals: &EligibilitySignals) -> bool {
    signals.has_payroll_loan && signals.occupation.is_benefit_recipient()
}

fn employee_with_payroll_loan(signals: &EligibilitySignals) -> bool {
    signals.has_payroll_loan && signals.occupation == Occupation::SalariedEmployee
}

fn benefit_recipient_with_margin(signals: &EligibilitySignals) -> bool {
    !signals.has_payroll_loan
        && signals.occupation.is_benefit_recipient()
        && signals.monthly_benefit >= MINIMUM_BENEFIT
}

fn employee_with_margin(signals: &EligibilitySignals) -> bool {
    !signals.has_payroll_loan
        && signals.occupation == Occupation::SalariedEmployee
        && signals.monthly_salary >= MINIMUM_SALARY
}

fn adult_with_severance_balance(signals: &EligibilitySignals) -> bool {
    signals.has_severance_fund
        && signals.severance_fund_balance >= MINIMUM_SEVERANCE_BALANCE
        && signals.age >= ADULT_AGE
}
