use std::sync::LazyLock;

use crate::models::{FeatureDescriptor, FeatureImage};

fn feature(
    title: &str,
    description: &str,
    href: &str,
    cta_label: &str,
    (src, alt, caption): (&str, &str, &str),
) -> FeatureDescriptor {
    FeatureDescriptor {
        title: title.to_string(),
        description: description.to_string(),
        href: href.to_string(),
        cta_label: cta_label.to_string(),
        image: FeatureImage {
            src: src.to_string(),
            alt: alt.to_string(),
            caption: caption.to_string(),
        },
    }
}

/// Product features in carousel order.
pub static FEATURES: LazyLock<Vec<FeatureDescriptor>> = LazyLock::new(|| {
    vec![
        feature(
            "Application Performance Monitoring",
            "Out-of-the-box service charts for latency, throughput, error rates, ApDex, and top endpoints.",
            "/application-performance-monitoring/",
            "Explore APM",
            (
                "/img/features/apm/apm-charts.webp",
                "Service performance charts showing latency percentiles, error rate, requests per second, and top endpoints.",
                "Monitor service latency, error rate, and throughput with ready-to-use dashboards.",
            ),
        ),
        feature(
            "Distributed Tracing",
            "Follow requests across services with flamegraphs, span filters, and trace analytics.",
            "/distributed-tracing/",
            "Explore Tracing",
            (
                "/img/features/distributed-tracing/traces-flamegraphs.webp",
                "Trace flamegraph view highlighting spans across multiple services.",
                "Understand every request path with trace flamegraphs and rich span insights.",
            ),
        ),
        feature(
            "Log Management",
            "Centralize, query, and correlate logs with traces and metrics to debug faster.",
            "/log-management/",
            "Explore Logs",
            (
                "/img/features/logs/logs-in-context.webp",
                "Log stream with filters and related trace context highlighted.",
                "Tail, search, and pivot logs with instant drill-down into related traces.",
            ),
        ),
        feature(
            "Infrastructure Monitoring",
            "Track Kubernetes and host health with detailed CPU, memory, and network visibility.",
            "/docs/infrastructure-monitoring/overview/",
            "Explore Infrastructure",
            (
                "/img/docs/infrastructure-monitoring/kubernetes-pod-metrics.webp",
                "SigNoz dashboard showing Kubernetes pod metrics and resource utilization.",
                "Stay ahead of cluster issues with Kubernetes and host infrastructure dashboards.",
            ),
        ),
        feature(
            "LLM Observability",
            "Trace LLM applications with prompt-level visibility, cost tracking, and agent analytics.",
            "/docs/llm-observability/",
            "Explore LLM Observability",
            (
                "/img/docs/llm/crewai/crew-dashboard.webp",
                "Dashboard summarizing LLM runs with tokens, latency, cost, and success metrics.",
                "Measure LLM latency, token usage, and cost to keep generative AI experiences reliable.",
            ),
        ),
        feature(
            "Metrics & Dashboards",
            "Build PromQL-powered dashboards and visualize business and SRE metrics in one place.",
            "/metrics-and-dashboards/",
            "Explore Dashboards",
            (
                "/img/features/metrics/metrics-query-builder.webp",
                "Metrics explorer with PromQL query builder and multi-visualization dashboard.",
                "Create custom dashboards with powerful PromQL and flexible visualizations.",
            ),
        ),
        feature(
            "Exceptions Monitoring",
            "Group and triage exceptions with stack traces, trends, and ownership context.",
            "/exceptions-monitoring/",
            "Explore Exceptions",
            (
                "/img/features/exceptions/exceptions-overview.webp",
                "Exceptions overview showing grouped errors with counts and trends.",
                "Investigate exception spikes with grouped errors and full stack traces.",
            ),
        ),
        feature(
            "Alerts Management",
            "Define alerts on metrics, logs, traces, and anomalies with multi-channel notifications.",
            "/alerts-management/",
            "Explore Alerts",
            (
                "/img/features/alerts/metric-based-alert.webp",
                "Alert rule configuration for metric thresholds with preview chart.",
                "Trigger metric, log, trace, and anomaly alerts with flexible conditions.",
            ),
        ),
        feature(
            "External API Monitoring",
            "Monitor third-party API latency, throughput, and error rates alongside internal services.",
            "/external-apis/",
            "Explore External APIs",
            (
                "/img/external-apis/view-all-external-api-domains.png",
                "Table listing external API domains with latency, throughput, and error metrics.",
                "Track every external dependency with per-endpoint performance insights.",
            ),
        ),
    ]
});
