use std::sync::Arc;

use chrono::NaiveDate;

use super::events::{SimulationEvent, SimulationObserver};
use super::intake::{IntakeError, SimulationRequest};
use super::numeric::parse_currency;
use super::result::SimulationResult;
use super::simulate_payoff;

/// Validates requests, runs the engine and reports analytics events.
pub struct PayoffSimulationService<O> {
    observer: Arc<O>,
}

impl<O> PayoffSimulationService<O>
where
    O: SimulationObserver + 'static,
{
    pub fn new(observer: Arc<O>) -> Self {
        Self { observer }
    }

    /// Runs one simulation. `today` applies when the request carries no date.
    pub fn simulate(
        &self,
        request: &SimulationRequest,
        today: NaiveDate,
    ) -> Result<SimulationResult, IntakeError> {
        request.validate()?;

        self.emit(SimulationEvent::SimulationStart {
            cards_count: request.cards.len(),
            total_minimums: request.total_minimums(),
            affordable_amount: parse_currency(&request.affordable_amount),
        });

        let result = simulate_payoff(request, request.today.unwrap_or(today));

        self.emit(SimulationEvent::SimulationComplete {
            total_cards: result.cards.len(),
            total_months: result.summary.total_months_optimized,
            savings: result.summary.savings_optimized,
            recommended_product: result.recommendation.product.to_string(),
        });

        Ok(result)
    }

    /// Records that the user followed the recommendation call-to-action.
    pub fn record_cta_click(&self, product: &str) {
        self.emit(SimulationEvent::CtaClick {
            product: product.to_string(),
        });
    }

    fn emit(&self, event: SimulationEvent) {
        if let Err(err) = self.observer.notify(&event) {
            tracing::warn!(event = event.name(), error = %err, "simulation event dropped");
        }
    }
}
