use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter_vec, register_int_gauge, Encoder, IntCounterVec, IntGauge, TextEncoder,
};
use service::errors::StoreError;

// Prometheus metrics (default registry)
pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "employee_store_operations_total",
        "Store operations by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("register employee_store_operations_total")
});

pub static STORE_RECORDS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("employee_store_records", "Employee records currently held")
        .expect("register employee_store_records")
});

/// Count one store call under `operation` with an outcome derived from `result`.
pub fn observe<T>(operation: &str, result: &Result<T, StoreError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(StoreError::NotFound(_)) => "not_found",
        Err(StoreError::InvalidArgument(_)) => "invalid_argument",
    };
    STORE_OPERATIONS_TOTAL.with_label_values(&[operation, outcome]).inc();
}

/// Publish the record count read from the store.
pub fn track_records(total: usize) {
    STORE_RECORDS.set(i64::try_from(total).unwrap_or(i64::MAX));
}

pub fn encode_metrics() -> (StatusCode, String) {
    // Touch lazies so both series are exported before the first request.
    Lazy::force(&STORE_OPERATIONS_TOTAL);
    Lazy::force(&STORE_RECORDS);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_counts_by_outcome() {
        let before = STORE_OPERATIONS_TOTAL.with_label_values(&["get", "not_found"]).get();
        observe::<()>("get", &Err(StoreError::NotFound(1)));
        let after = STORE_OPERATIONS_TOTAL.with_label_values(&["get", "not_found"]).get();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn encode_includes_store_series() {
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("employee_store_records"));
    }
}
