use crate::infra::{parse_date, TracingObserver};
use card_payoff::error::AppError;
use card_payoff::simulation::domain::{CardId, CardInput, FinancialProfileInput, Occupation};
use card_payoff::simulation::format::{format_brl, format_months, format_rate};
use card_payoff::simulation::{
    import_cards, PayoffSimulationService, ScenarioKind, SimulationRequest, SimulationResult,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// JSON file holding a complete simulation request
    #[arg(long, conflicts_with_all = ["cards", "affordable", "birth_date"])]
    pub(crate) request: Option<PathBuf>,
    /// Cards CSV with id,name,debt,rate,minimum columns
    #[arg(long, required_unless_present = "request")]
    pub(crate) cards: Option<PathBuf>,
    /// Amount available for card payments each month (e.g. 1.500,00)
    #[arg(long, required_unless_present = "request")]
    pub(crate) affordable: Option<String>,
    /// Occupation code: inss, bpc, clt or outros
    #[arg(long, default_value = "outros")]
    pub(crate) occupation: String,
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, required_unless_present = "request")]
    pub(crate) birth_date: Option<NaiveDate>,
    /// Monthly public benefit
    #[arg(long)]
    pub(crate) benefit: Option<String>,
    /// Monthly salary
    #[arg(long)]
    pub(crate) salary: Option<String>,
    /// Current payroll-loan installment; implies an active payroll loan
    #[arg(long)]
    pub(crate) payroll_installment: Option<String>,
    /// Severance-fund balance; implies the fund is available
    #[arg(long)]
    pub(crate) severance_balance: Option<String>,
    /// Reference date for age calculation (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the raw result as JSON instead of the rendered comparison
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reference date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the raw result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let json = args.json;
    let request = match args.request.clone() {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            serde_json::from_reader(reader)?
        }
        None => inline_request(args)?,
    };

    simulate_and_print(&request, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut request = demo_request();
    request.today = args.today;

    if !args.json {
        println!("Card payoff demo");
        println!(
            "Household: {} cards | {} available per month | {}",
            request.cards.len(),
            request.affordable_amount,
            request.occupation.label()
        );
    }
    simulate_and_print(&request, args.json)
}

fn simulate_and_print(request: &SimulationRequest, json: bool) -> Result<(), AppError> {
    let service = PayoffSimulationService::new(Arc::new(TracingObserver));
    let result = service.simulate(request, Local::now().date_naive())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
    } else {
        render_result(&mut out, &result)?;
    }
    Ok(())
}

fn inline_request(args: SimulateArgs) -> Result<SimulationRequest, AppError> {
    let cards = match args.cards {
        Some(path) => import_cards(File::open(path)?)?,
        None => Vec::new(),
    };
    let birth_date = args.birth_date.ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "--birth-date is required")
    })?;

    Ok(SimulationRequest {
        cards,
        affordable_amount: args.affordable.unwrap_or_default(),
        occupation: Occupation::from_code(&args.occupation),
        profile: FinancialProfileInput {
            monthly_benefit: args.benefit,
            monthly_salary: args.salary,
            has_payroll_loan: args.payroll_installment.is_some(),
            payroll_installment: args.payroll_installment,
            has_severance_fund: args.severance_balance.is_some(),
            severance_fund_balance: args.severance_balance,
            birth_date,
        },
        today: args.today,
    })
}

fn demo_card(id: &str, name: &str, debt: &str, rate: &str, minimum: &str) -> CardInput {
    CardInput {
        id: CardId(id.to_string()),
        name: name.to_string(),
        total_debt: debt.to_string(),
        monthly_rate: rate.to_string(),
        minimum_payment: minimum.to_string(),
        use_average_rate: false,
    }
}

pub(crate) fn demo_request() -> SimulationRequest {
    SimulationRequest {
        cards: vec![
            demo_card("1", "Cartão da loja", "6.200,00", "16,90", "310,00"),
            demo_card("2", "Cartão do banco", "3.400,00", "12,50", "240,00"),
            demo_card("3", "Cartão digital", "900,00", "7,90", "90,00"),
        ],
        affordable_amount: "1.200,00".to_string(),
        occupation: Occupation::RetiredSocialSecurity,
        profile: FinancialProfileInput {
            monthly_benefit: Some("2.300,00".to_string()),
            monthly_salary: None,
            has_payroll_loan: false,
            payroll_installment: None,
            has_severance_fund: false,
            severance_fund_balance: None,
            birth_date: NaiveDate::from_ymd_opt(1957, 8, 21).unwrap_or(NaiveDate::MIN),
        },
        today: None,
    }
}

pub(crate) fn render_result<W: Write>(out: &mut W, result: &SimulationResult) -> io::Result<()> {
    let summary = &result.summary;

    writeln!(
        out,
        "Total debt {} | average rate {} a.m. | minimums {}",
        format_brl(summary.total_debt),
        format_rate(summary.average_monthly_rate),
        format_brl(summary.total_minimums)
    )?;
    writeln!(out, "Monthly surplus {}", format_brl(summary.surplus))?;
    for alert in &result.alerts {
        writeln!(out, "! {alert}")?;
    }

    writeln!(out, "\nCards")?;
    for card in &result.cards {
        writeln!(
            out,
            "- {}: {} at {} -> {}",
            card.name,
            format_brl(card.debt),
            format_rate(card.monthly_rate),
            card.strategy_label
        )?;
        writeln!(out, "  {}", card.observation)?;
        writeln!(
            out,
            "  minimum {} ({}) | optimized {} ({}) | lower-rate credit ({})",
            format_brl(card.minimum_payment),
            format_months(card.estimated_months_minimum),
            format_brl(card.optimized_payment),
            format_months(card.estimated_months_optimized),
            format_months(card.estimated_months_consolidated)
        )?;
    }

    writeln!(out, "\nScenarios")?;
    let scenarios = [
        (
            ScenarioKind::MinimumOnly,
            summary.total_months_minimum,
            summary.total_interest_minimum,
        ),
        (
            ScenarioKind::Optimized,
            summary.total_months_optimized,
            summary.total_interest_optimized,
        ),
        (
            ScenarioKind::Consolidated,
            summary.total_months_consolidated,
            summary.total_interest_consolidated,
        ),
    ];
    for (kind, months, interest) in scenarios {
        writeln!(
            out,
            "- {}: {} | interest {}",
            kind.label(),
            format_months(months),
            format_brl(interest)
        )?;
    }
    writeln!(
        out,
        "Savings: optimized {} | lower-rate credit {}",
        format_brl(summary.savings_optimized),
        format_brl(summary.savings_consolidated)
    )?;

    let recommendation = &result.recommendation;
    writeln!(out, "\nRecommendation: {}", recommendation.product)?;
    writeln!(out, "  {}", recommendation.message)?;
    writeln!(out, "  {}", recommendation.conditions)?;
    for benefit in &recommendation.benefits {
        writeln!(out, "  * {benefit}")?;
    }

    Ok(())
}
