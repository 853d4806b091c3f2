//! pt-BR presentation helpers for amounts, rates and durations.

use rust_decimal::{Decimal, RoundingStrategy};

use super::amortization::NON_CONVERGENT_MONTHS;

fn cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// `1400` -> `"1400,00"`: two decimals, comma mark, no grouping.
pub fn format_decimal_comma(value: Decimal) -> String {
    cents(value).to_string().replacen('.', ",", 1)
}

/// `1234.5` -> `"R$ 1.234,50"`.
pub fn format_brl(value: Decimal) -> String {
    let rendered = cents(value.abs()).to_string();
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    let sign = if value.is_sign_negative() && !cents(value).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {grouped},{fraction}")
}

/// Monthly rate fraction as a percentage with one decimal: `0.125` -> `"12,5%"`.
pub fn format_rate(rate: Decimal) -> String {
    let mut percent = rate
        .saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(1);
    format!("{}%", percent.to_string().replacen('.', ",", 1))
}

/// Human payoff horizon: `"8 meses"`, `"1 ano e 1 mês"`, `"Mais de 50 anos"`.
pub fn format_months(months: u32) -> String {
    if months >= NON_CONVERGENT_MONTHS {
        return "Mais de 50 anos".to_string();
    }

    let month_word = |count: u32| if count == 1 { "mês" } else { "meses" };
    if months < 12 {
        return format!("{months} {}", month_word(months));
    }

    let years = months / 12;
    let remaining = months % 12;
    let year_word = if years == 1 { "ano" } else { "anos" };
    if remaining == 0 {
        format!("{years} {year_word}")
    } else {
        format!("{years} {year_word} e {remaining} {}", month_word(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn comma_format_keeps_two_decimals_without_grouping() {
        assert_eq!(format_decimal_comma(dec!(1400)), "1400,00");
        assert_eq!(format_decimal_comma(dec!(1234.5)), "1234,50");
        assert_eq!(format_decimal_comma(dec!(0.005)), "0,01");
        assert_eq!(format_decimal_comma(Decimal::ZERO), "0,00");
    }

    #[test]
    fn brl_groups_thousands() {
        assert_eq!(format_brl(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_brl(dec!(1234567.8)), "R$ 1.234.567,80");
        assert_eq!(format_brl(dec!(999)), "R$ 999,00");
        assert_eq!(format_brl(dec!(-2500)), "-R$ 2.500,00");
        assert_eq!(format_brl(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn rate_renders_as_percentage() {
        assert_eq!(format_rate(dec!(0.125)), "12,5%");
        assert_eq!(format_rate(dec!(0.15)), "15,0%");
        assert_eq!(format_rate(dec!(0.13333)), "13,3%");
    }

    #[test]
    fn months_render_in_years_and_months() {
        assert_eq!(format_months(0), "0 meses");
        assert_eq!(format_months(1), "1 mês");
        assert_eq!(format_months(11), "11 meses");
        assert_eq!(format_months(12), "1 ano");
        assert_eq!(format_months(13), "1 ano e 1 mês");
        assert_eq!(format_months(38), "3 anos e 2 meses");
        assert_eq!(format_months(600), "50 anos");
        assert_eq!(format_months(NON_CONVERGENT_MONTHS), "Mais de 50 anos");
    }
}
