use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::simulation::classifier::classify;
use crate::simulation::domain::{
    CardId, CardInput, Debt, FinancialProfile, FinancialProfileInput, Occupation,
};
use crate::simulation::events::{ObserverError, SimulationEvent, SimulationObserver};
use crate::simulation::intake::SimulationRequest;
use crate::simulation::scenarios::ClassifiedDebt;
use crate::simulation::service::PayoffSimulationService;
use crate::simulation::simulation_router;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2025, 6, 1)
}

pub(super) fn card(id: &str, debt: &str, rate: &str, minimum: &str) -> CardInput {
    CardInput {
        id: CardId(id.to_string()),
        name: String::new(),
        total_debt: debt.to_string(),
        monthly_rate: rate.to_string(),
        minimum_payment: minimum.to_string(),
        use_average_rate: false,
    }
}

pub(super) fn classified(cards: &[CardInput]) -> Vec<ClassifiedDebt> {
    cards
        .iter()
        .map(Debt::from_input)
        .map(|debt| ClassifiedDebt {
            classification: classify(&debt),
            debt,
        })
        .collect()
}

pub(super) fn profile_input() -> FinancialProfileInput {
    FinancialProfileInput {
        monthly_benefit: None,
        monthly_salary: None,
        has_payroll_loan: false,
        payroll_installment: None,
        has_severance_fund: false,
        severance_fund_balance: None,
        birth_date: date(1980, 5, 10),
    }
}

/// Profile with no payroll loan, no income and no severance fund.
pub(super) fn profile(occupation: Occupation) -> FinancialProfile {
    FinancialProfile::from_input(occupation, &profile_input())
}

/// Mixed portfolio: an urgent high-rate card and a cheap card, with cash to spare.
pub(super) fn mixed_cards() -> Vec<CardInput> {
    vec![
        card("1", "5.000,00", "18,00", "100,00"),
        card("2", "2.000,00", "5,00", "150,00"),
    ]
}

pub(super) fn request(cards: Vec<CardInput>, affordable: &str) -> SimulationRequest {
    SimulationRequest {
        cards,
        affordable_amount: affordable.to_string(),
        occupation: Occupation::Other,
        profile: profile_input(),
        today: Some(today()),
    }
}

#[derive(Default)]
pub(super) struct RecordingObserver {
    events: Mutex<Vec<SimulationEvent>>,
}

impl RecordingObserver {
    pub(super) fn events(&self) -> Vec<SimulationEvent> {
        self.events.lock().expect("observer lock").clone()
    }
}

impl SimulationObserver for RecordingObserver {
    fn notify(&self, event: &SimulationEvent) -> Result<(), ObserverError> {
        self.events.lock().expect("observer lock").push(event.clone());
        Ok(())
    }
}

pub(super) struct UnavailableObserver;

impl SimulationObserver for UnavailableObserver {
    fn notify(&self, _event: &SimulationEvent) -> Result<(), ObserverError> {
        Err(ObserverError::Transport("collector offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    PayoffSimulationService<RecordingObserver>,
    Arc<RecordingObserver>,
) {
    let observer = Arc::new(RecordingObserver::default());
    (PayoffSimulationService::new(observer.clone()), observer)
}

pub(super) fn router_with_service(
    service: PayoffSimulationService<RecordingObserver>,
) -> axum::Router {
    simulation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
