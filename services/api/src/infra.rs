use card_payoff::simulation::{ObserverError, SimulationEvent, SimulationObserver};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Forwards analytics events to the structured log.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TracingObserver;

impl SimulationObserver for TracingObserver {
    fn notify(&self, event: &SimulationEvent) -> Result<(), ObserverError> {
        let payload = serde_json::to_string(event)
            .map_err(|err| ObserverError::Transport(err.to_string()))?;
        info!(event = event.name(), %payload, "simulation event");
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 1962-11-30 "),
            Ok(NaiveDate::from_ymd_opt(1962, 11, 30).expect("valid date"))
        );
    }

    #[test]
    fn parse_date_explains_failures() {
        let err = parse_date("30/11/1962").expect_err("form dates are rejected");
        assert!(err.contains("YYYY-MM-DD"));
    }

    #[test]
    fn tracing_observer_accepts_every_event() {
        let observer = TracingObserver;
        let event = SimulationEvent::CtaClick {
            product: "Consignado INSS".to_string(),
        };
        assert!(observer.notify(&event).is_ok());
    }
}
