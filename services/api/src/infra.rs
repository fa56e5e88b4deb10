use ecrp::appraisal::OutcomeEvaluator;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) evaluator: OutcomeEvaluator,
}

impl AppState {
    pub(crate) fn new(readiness: Arc<AtomicBool>, metrics: PrometheusHandle) -> Self {
        Self {
            readiness,
            metrics: Arc::new(metrics),
            evaluator: OutcomeEvaluator::new(),
        }
    }
}

/// File name offered for a CSV export produced on `date`.
pub(crate) fn export_filename(date: chrono::NaiveDate) -> String {
    format!("ecrp_appraisal_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn export_filename_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("valid date");
        assert_eq!(export_filename(date), "ecrp_appraisal_2025-03-07.csv");
    }
}
