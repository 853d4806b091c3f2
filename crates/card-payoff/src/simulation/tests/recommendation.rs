use super::common::*;
use rust_decimal_macros::dec;

use crate::simulation::domain::Occupation;
use crate::simulation::recommendation::{recommend, ProductKind};

#[test]
fn benefit_recipient_with_payroll_loan_gets_portability_regardless_of_benefit() {
    for occupation in [Occupation::RetiredSocialSecurity, Occupation::DisabilityBenefit] {
        for benefit in [dec!(0), dec!(900), dec!(5000)] {
            let mut profile = profile(occupation);
            profile.has_payroll_loan = true;
            profile.monthly_benefit = benefit;

            let recommendation = recommend(&profile, today());
            assert_eq!(
                recommendation.kind,
                ProductKind::BenefitPayrollPortability,
                "{occupation:?} with benefit {benefit}"
            );
        }
    }
}

#[test]
fn portability_wins_over_severance_fund() {
    let mut profile = profile(Occupation::RetiredSocialSecurity);
    profile.has_payroll_loan = true;
    profile.has_severance_fund = true;
    profile.severance_fund_balance = dec!(20000);

    let recommendation = recommend(&profile, today());
    assert_eq!(recommendation.kind, ProductKind::BenefitPayrollPortability);
    assert_eq!(
        recommendation.conditions,
        "Benefício: R$ 0,00 | Consignado ativo: Sim"
    );
}

#[test]
fn employee_with_payroll_loan_gets_private_portability() {
    let mut profile = profile(Occupation::SalariedEmployee);
    profile.has_payroll_loan = true;

    let recommendation = recommend(&profile, today());
    assert_eq!(recommendation.kind, ProductKind::PrivatePayrollPortability);
    assert_eq!(recommendation.product, "Portabilidade de Consignado Privado");
}

#[test]
fn benefit_threshold_is_inclusive() {
    let mut profile = profile(Occupation::RetiredSocialSecurity);
    profile.monthly_benefit = dec!(1400);
    let recommendation = recommend(&profile, today());
    assert_eq!(recommendation.kind, ProductKind::BenefitPayrollLoan);
    assert_eq!(
        recommendation.conditions,
        "Benefício: R$ 1400,00 | Consignado ativo: Não"
    );

    profile.monthly_benefit = dec!(1399.99);
    assert_eq!(
        recommend(&profile, today()).kind,
        ProductKind::FinancialEducation
    );
}

#[test]
fn salary_threshold_is_inclusive() {
    let mut profile = profile(Occupation::SalariedEmployee);
    profile.monthly_salary = dec!(1500);
    let recommendation = recommend(&profile, today());
    assert_eq!(recommendation.kind, ProductKind::PrivatePayrollLoan);
    assert_eq!(
        recommendation.conditions,
        "Salário: R$ 1500,00 | Consignado ativo: Não"
    );

    profile.monthly_salary = dec!(1499.99);
    assert_eq!(
        recommend(&profile, today()).kind,
        ProductKind::FinancialEducation
    );
}

#[test]
fn low_income_falls_through_to_severance_fund() {
    let mut profile = profile(Occupation::SalariedEmployee);
    profile.monthly_salary = dec!(1200);
    profile.has_severance_fund = true;
    profile.severance_fund_balance = dec!(1000);

    let recommendation = recommend(&profile, today());
    assert_eq!(recommendation.kind, ProductKind::SeveranceFundAdvance);
    assert_eq!(
        recommendation.conditions,
        "Saldo FGTS: R$ 1000,00 | Idade: 45 anos"
    );
}

#[test]
fn severance_fund_requires_adult_holder() {
    let mut profile = profile(Occupation::Other);
    profile.has_severance_fund = true;
    profile.severance_fund_balance = dec!(3000);

    profile.birth_date = date(2007, 6, 1);
    assert_eq!(
        recommend(&profile, today()).kind,
        ProductKind::SeveranceFundAdvance
    );

    profile.birth_date = date(2007, 6, 2);
    assert_eq!(
        recommend(&profile, today()).kind,
        ProductKind::FinancialEducation
    );
}

#[test]
fn severance_fund_flag_without_enough_balance_is_ignored() {
    let mut profile = profile(Occupation::Other);
    profile.has_severance_fund = true;
    profile.severance_fund_balance = dec!(999.99);

    assert_eq!(
        recommend(&profile, today()).kind,
        ProductKind::FinancialEducation
    );
}

#[test]
fn other_occupation_without_assets_gets_education_fallback() {
    let mut profile = profile(Occupation::Other);
    profile.monthly_salary = dec!(8000);
    profile.has_payroll_loan = true;

    let recommendation = recommend(&profile, today());
    assert_eq!(recommendation.kind, ProductKind::FinancialEducation);
    assert!(recommendation.is_fallback());
    assert_eq!(recommendation.conditions, "Continue organizando suas finanças");
}

#[test]
fn credit_products_carry_full_sheet() {
    let mut profile = profile(Occupation::RetiredSocialSecurity);
    profile.has_payroll_loan = true;

    let recommendation = recommend(&profile, today());
    assert!(!recommendation.is_fallback());
    assert_eq!(recommendation.benefits.len(), 4);
    assert!(!recommendation.description.is_empty());
    assert!(!recommendation.message.is_empty());
}
