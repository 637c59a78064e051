use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    ProjectionError, ProjectionInputs, Scenario, ValidationLimits, VarianceProjection,
    YearRecord, calculate,
};
use crate::report::{Currency, Labels, Language, format_money, render_report};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliLanguage {
    English,
    Turkish,
}

impl From<CliLanguage> for Language {
    fn from(value: CliLanguage) -> Self {
        match value {
            CliLanguage::English => Language::English,
            CliLanguage::Turkish => Language::Turkish,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCurrency {
    Try,
    Usd,
    Eur,
    Gbp,
}

impl From<CliCurrency> for Currency {
    fn from(value: CliCurrency) -> Self {
        match value {
            CliCurrency::Try => Currency::Try,
            CliCurrency::Usd => Currency::Usd,
            CliCurrency::Eur => Currency::Eur,
            CliCurrency::Gbp => Currency::Gbp,
        }
    }
}

impl From<Language> for CliLanguage {
    fn from(value: Language) -> Self {
        match value {
            Language::English => CliLanguage::English,
            Language::Turkish => CliLanguage::Turkish,
        }
    }
}

impl From<Currency> for CliCurrency {
    fn from(value: Currency) -> Self {
        match value {
            Currency::Try => CliCurrency::Try,
            Currency::Usd => CliCurrency::Usd,
            Currency::Eur => CliCurrency::Eur,
            Currency::Gbp => CliCurrency::Gbp,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    principal: Option<f64>,
    annual_rate: Option<f64>,
    years: Option<u32>,
    monthly_addition: Option<f64>,
    annual_addition_increase: Option<f64>,
    rate_variance: Option<f64>,

    language: Option<Language>,
    currency: Option<Currency>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LabelsQuery {
    language: Option<Language>,
    currency: Option<Currency>,
}

#[derive(Parser, Debug)]
#[command(
    name = "compound",
    about = "Compound interest projection with low/mid/high interest rate scenarios"
)]
struct Cli {
    #[arg(long, default_value_t = 1000.0, help = "Initial principal, must be greater than 0")]
    principal: f64,
    #[arg(
        long,
        default_value_t = 7.0,
        allow_negative_numbers = true,
        help = "Annual interest rate in percent"
    )]
    annual_rate: f64,
    #[arg(long, default_value_t = 10, help = "Investment period in whole years")]
    years: u32,
    #[arg(long, default_value_t = 0.0, help = "Amount added every month")]
    monthly_addition: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Yearly increase of the monthly addition in percent"
    )]
    annual_addition_increase: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Percentage points subtracted/added to the annual rate for the low/high scenarios"
    )]
    rate_variance: f64,
    #[arg(
        long,
        default_value_t = 100.0,
        help = "Largest accepted --rate-variance in percentage points"
    )]
    max_rate_variance: f64,
    #[arg(long, default_value_t = 500, help = "Largest accepted --years")]
    max_years: u32,
    #[arg(long, value_enum, default_value_t = CliLanguage::English)]
    language: CliLanguage,
    #[arg(
        long,
        value_enum,
        default_value_t = CliCurrency::Try,
        help = "Display currency; amounts are not converted"
    )]
    currency: CliCurrency,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
#[command(name = "compound serve", about = "Serve the projection JSON API")]
struct ServeCli {
    #[arg(default_value_t = 8080, help = "TCP port to listen on")]
    port: u16,
    #[arg(
        long,
        default_value_t = 100.0,
        help = "Largest accepted rateVariance in percentage points"
    )]
    max_rate_variance: f64,
    #[arg(long, default_value_t = 500, help = "Largest accepted years")]
    max_years: u32,
}

#[derive(Debug)]
struct ApiRequest {
    inputs: ProjectionInputs,
    language: Language,
    currency: Currency,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioResponse {
    scenario: Scenario,
    label: &'static str,
    annual_rate_percent: f64,
    final_balance: Option<f64>,
    final_balance_display: Option<String>,
    years: Vec<YearRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    language: Language,
    currency: Currency,
    rate_variance_percent: f64,
    scenarios: Vec<ScenarioResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LabelsResponse {
    language: Language,
    language_tag: &'static str,
    currency: Currency,
    currency_label: String,
    y_axis_title: String,
    labels: &'static Labels,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn flag_for_field(field: &str) -> &'static str {
    match field {
        "principal" => "--principal",
        "annual_rate_percent" => "--annual-rate",
        "years" => "--years",
        "monthly_addition" => "--monthly-addition",
        "annual_addition_increase_percent" => "--annual-addition-increase",
        "rate_variance_percent" => "--rate-variance",
        _ => "input",
    }
}

fn describe_error(err: &ProjectionError) -> String {
    match err {
        ProjectionError::InvalidInput { field, reason } => {
            format!("{} {reason}", flag_for_field(field))
        }
    }
}

fn build_limits(max_rate_variance: f64, max_years: u32) -> Result<ValidationLimits, String> {
    if !max_rate_variance.is_finite() || max_rate_variance < 0.0 {
        return Err("--max-rate-variance must be a finite number >= 0".to_string());
    }
    if max_years == 0 {
        return Err("--max-years must be at least 1".to_string());
    }
    Ok(ValidationLimits {
        max_rate_variance_percent: max_rate_variance,
        max_years,
    })
}

fn inputs_from_cli(cli: &Cli) -> ProjectionInputs {
    ProjectionInputs {
        principal: cli.principal,
        annual_rate_percent: cli.annual_rate,
        years: cli.years,
        monthly_addition: cli.monthly_addition,
        annual_addition_increase_percent: cli.annual_addition_increase,
        rate_variance_percent: cli.rate_variance,
    }
}

/// Field values are checked later, once, by `calculate`.
fn build_inputs(cli: &Cli) -> Result<(ProjectionInputs, ValidationLimits), String> {
    let limits = build_limits(cli.max_rate_variance, cli.max_years)?;
    Ok((inputs_from_cli(cli), limits))
}

/// Parses command line arguments, runs the projection and prints the report.
pub fn run_cli<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.to_string()),
    };
    let (inputs, limits) = build_inputs(&cli)?;
    let projection = calculate(&inputs, &limits).map_err(|err| describe_error(&err))?;

    let language: Language = cli.language.into();
    let currency: Currency = cli.currency.into();
    match cli.format {
        OutputFormat::Table => {
            print!("{}", render_report(&projection, language.labels(), currency));
        }
        OutputFormat::Json => {
            let response = build_project_response(&projection, language, currency);
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| format!("Failed to serialize projection: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Parses `serve` arguments (`[port] [--max-rate-variance N] [--max-years N]`)
/// and runs the HTTP server until it fails.
pub async fn run_server_cli<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match ServeCli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(e.to_string()),
    };
    let limits = build_limits(cli.max_rate_variance, cli.max_years)?;
    run_http_server(cli.port, limits)
        .await
        .map_err(|e| format!("Server error: {e}"))
}

fn router(limits: ValidationLimits) -> Router {
    Router::new()
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route("/api/labels", get(labels_handler))
        .fallback(not_found_handler)
        .with_state(limits)
}

pub async fn run_http_server(port: u16, limits: ValidationLimits) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router(limits);

    let listener = TcpListener::bind(addr).await?;
    info!("compound HTTP API listening on http://{addr}");
    info!(
        "validation limits: max rate variance {}%, max years {}",
        limits.max_rate_variance_percent, limits.max_years
    );
    info!("Local access: http://127.0.0.1:{port}/api/project");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(
    State(limits): State<ValidationLimits>,
    payload: Result<Query<ProjectPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => project_handler_impl(payload, &limits).await,
        Err(e) => payload_rejected(&e.body_text()),
    }
}

async fn project_post_handler(
    State(limits): State<ValidationLimits>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => project_handler_impl(payload, &limits).await,
        Err(e) => payload_rejected(&e.body_text()),
    }
}

fn payload_rejected(detail: &str) -> Response {
    let msg = format!("Invalid API payload: {detail}");
    warn!("rejected projection request: {msg}");
    error_response(StatusCode::BAD_REQUEST, &msg)
}

async fn project_handler_impl(payload: ProjectPayload, limits: &ValidationLimits) -> Response {
    let request = api_request_from_payload(payload);
    info!(
        "projection request: years={} rate={}% variance={}",
        request.inputs.years,
        request.inputs.annual_rate_percent,
        request.inputs.rate_variance_percent
    );

    match calculate(&request.inputs, limits) {
        Ok(projection) => json_response(
            StatusCode::OK,
            build_project_response(&projection, request.language, request.currency),
        ),
        Err(err) => {
            let msg = describe_error(&err);
            warn!("rejected projection request: {msg}");
            error_response(StatusCode::BAD_REQUEST, &msg)
        }
    }
}

async fn labels_handler(query: Result<Query<LabelsQuery>, QueryRejection>) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => return payload_rejected(&e.body_text()),
    };
    json_response(
        StatusCode::OK,
        build_labels_response(
            query.language.unwrap_or_default(),
            query.currency.unwrap_or_default(),
        ),
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API payload: {e}"))?;
    Ok(api_request_from_payload(payload))
}

fn api_request_from_payload(payload: ProjectPayload) -> ApiRequest {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.principal {
        cli.principal = v;
    }
    if let Some(v) = payload.annual_rate {
        cli.annual_rate = v;
    }
    if let Some(v) = payload.years {
        cli.years = v;
    }
    if let Some(v) = payload.monthly_addition {
        cli.monthly_addition = v;
    }
    if let Some(v) = payload.annual_addition_increase {
        cli.annual_addition_increase = v;
    }
    if let Some(v) = payload.rate_variance {
        cli.rate_variance = v;
    }
    if let Some(v) = payload.language {
        cli.language = v.into();
    }
    if let Some(v) = payload.currency {
        cli.currency = v.into();
    }

    ApiRequest {
        inputs: inputs_from_cli(&cli),
        language: cli.language.into(),
        currency: cli.currency.into(),
    }
}

fn default_cli_for_api() -> Cli {
    Cli {
        principal: 1_000.0,
        annual_rate: 7.0,
        years: 10,
        monthly_addition: 0.0,
        annual_addition_increase: 0.0,
        rate_variance: 0.0,
        max_rate_variance: 100.0,
        max_years: 500,
        language: CliLanguage::English,
        currency: CliCurrency::Try,
        format: OutputFormat::Json,
    }
}

fn build_project_response(
    projection: &VarianceProjection,
    language: Language,
    currency: Currency,
) -> ProjectResponse {
    let labels = language.labels();
    ProjectResponse {
        language,
        currency,
        rate_variance_percent: projection.rate_variance_percent,
        scenarios: projection
            .scenarios()
            .into_iter()
            .map(|s| ScenarioResponse {
                scenario: s.scenario,
                label: labels.series_name.get(s.scenario),
                annual_rate_percent: s.annual_rate_percent,
                final_balance: s.result.final_balance(),
                final_balance_display: s.result.final_balance().map(|v| format_money(currency, v)),
                years: s.result.records.clone(),
            })
            .collect(),
    }
}

fn build_labels_response(language: Language, currency: Currency) -> LabelsResponse {
    let labels = language.labels();
    LabelsResponse {
        language,
        language_tag: language.tag(),
        currency,
        currency_label: currency.label(),
        y_axis_title: labels.y_axis_title(currency),
        labels,
    }
}
