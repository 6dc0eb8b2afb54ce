//! Prometheus metrics collection and exposition endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    auth_rejections_total: IntCounterVec,
}

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_code.as_str()])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Why a caller failed to authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthRejection {
    ManagerCredential,
    UnknownToken,
    ExpiredToken,
}

impl AuthRejection {
    fn as_label(self) -> &'static str {
        match self {
            Self::ManagerCredential => "manager_credential",
            Self::UnknownToken => "unknown_token",
            Self::ExpiredToken => "expired_token",
        }
    }
}

pub(crate) fn record_auth_rejection(reason: AuthRejection) {
    let Some(metrics) = metrics() else {
        return;
    };

    metrics
        .auth_rejections_total
        .with_label_values(&[reason.as_label()])
        .inc();
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();

    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(value) => {
            res.headers_mut().insert(CONTENT_TYPE, value);
        }
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    }

    res.render(String::from_utf8_lossy(&encoded).into_owned());
}

fn metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS.get_or_init(build_metrics).as_ref()
}

fn build_metrics() -> Option<HttpMetrics> {
    match try_build_metrics() {
        Ok(metrics) => Some(metrics),
        Err(source) => {
            error!("failed to build http metrics: {source}");

            None
        }
    }
}

fn try_build_metrics() -> Result<HttpMetrics, prometheus::Error> {
    let registry = Registry::new();

    let requests_total = IntCounterVec::new(
        Opts::new(
            "customers_json_http_requests_total",
            "Total HTTP requests partitioned by method, route, and status code.",
        ),
        &["method", "route", "status_code"],
    )?;

    let request_duration_seconds = HistogramVec::new(
        HistogramOpts::new(
            "customers_json_http_request_duration_seconds",
            "HTTP request duration in seconds partitioned by method and route.",
        )
        .buckets(vec![
            0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "route"],
    )?;

    let requests_in_flight = IntGauge::with_opts(Opts::new(
        "customers_json_http_requests_in_flight",
        "Current number of in-flight HTTP requests.",
    ))?;

    let auth_rejections_total = IntCounterVec::new(
        Opts::new(
            "customers_json_auth_rejections_total",
            "Rejected manager credentials and customer tokens partitioned by reason.",
        ),
        &["reason"],
    )?;

    registry.register(Box::new(requests_total.clone()))?;
    registry.register(Box::new(request_duration_seconds.clone()))?;
    registry.register(Box::new(requests_in_flight.clone()))?;
    registry.register(Box::new(auth_rejections_total.clone()))?;

    Ok(HttpMetrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        auth_rejections_total,
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn metrics_endpoint_exposes_http_metrics() -> TestResult {
        observe_request("GET", "/customers/{id}", 200, 0.042);
        observe_request("POST", "/customers/token", 401, 0.123);
        record_auth_rejection(AuthRejection::ExpiredToken);

        let _in_flight = InFlightRequestGuard::track();

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let response = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert!(
            response.contains("customers_json_http_requests_total"),
            "expected requests_total metric in response"
        );
        assert!(
            response.contains("customers_json_http_request_duration_seconds"),
            "expected request_duration metric in response"
        );
        assert!(
            response.contains("customers_json_http_requests_in_flight"),
            "expected in-flight metric in response"
        );
        assert!(
            response.contains(r#"customers_json_auth_rejections_total{reason="expired_token"}"#),
            "expected auth rejection metric in response"
        );
        assert!(
            response.contains(r#"route="/customers/token""#),
            "expected route label in response"
        );

        Ok(())
    }
}
