// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod stubs;

use axum::{
    Json, Router,
    extract::{State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cinema_tickets::TicketService;
use cinema_tickets_api::{
    ApiError, GetPurchaseRulesResponse, PurchaseTicketsRequest, PurchaseTicketsResponse,
    QuotePurchaseResponse, get_purchase_rules, purchase_tickets, quote_purchase,
};
use cinema_tickets_domain::{
    DomainError, MAX_TICKETS_PER_PURCHASE, MIN_ADULT_TICKETS_REQUIRED, PriceTable, PurchaseRules,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::stubs::{LoggingPaymentService, LoggingSeatReservationService};

/// Cinema Tickets Server - HTTP server for the cinema ticket service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Maximum number of tickets allowed in one purchase
    #[arg(long, default_value_t = MAX_TICKETS_PER_PURCHASE)]
    max_tickets_per_purchase: u32,

    /// Minimum number of adult tickets required in one purchase
    #[arg(long, default_value_t = MIN_ADULT_TICKETS_REQUIRED)]
    min_adult_tickets: u32,

    /// Price of an adult ticket
    #[arg(long, default_value_t = PriceTable::default().adult)]
    adult_price: u32,

    /// Price of a child ticket
    #[arg(long, default_value_t = PriceTable::default().child)]
    child_price: u32,

    /// Price of an infant ticket
    #[arg(long, default_value_t = PriceTable::default().infant)]
    infant_price: u32,
}

impl Args {
    /// Builds the purchase rules from the command-line options.
    fn purchase_rules(&self) -> Result<PurchaseRules, DomainError> {
        PurchaseRules::new(
            self.max_tickets_per_purchase,
            self.min_adult_tickets,
            PriceTable::new(self.adult_price, self.child_price, self.infant_price),
        )
    }
}

/// The ticket service wired to the stub collaborators.
type AppTicketService = TicketService<LoggingPaymentService, LoggingSeatReservationService>;

/// Application state shared across handlers.
///
/// The ticket service is stateless, so no lock is needed.
#[derive(Clone)]
struct AppState {
    /// The ticket service handling purchases.
    service: Arc<AppTicketService>,
}

impl AppState {
    fn new(rules: PurchaseRules) -> Self {
        Self {
            service: Arc::new(TicketService::with_rules(
                rules,
                LoggingPaymentService,
                LoggingSeatReservationService,
            )),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::PaymentFailed { .. } | ApiError::SeatReservationFailed { .. } => {
                error!(error = %err, "External service error");
                Self {
                    status: StatusCode::BAD_GATEWAY,
                    message: err.to_string(),
                }
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Handler for POST `/purchases` endpoint.
///
/// Validates the purchase, takes payment and reserves seats.
async fn handle_purchase_tickets(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<PurchaseTicketsRequest>, JsonRejection>,
) -> Result<Json<PurchaseTicketsResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        account_id = %req.account_id,
        requests = req.ticket_type_requests.len(),
        "Handling purchase_tickets request"
    );

    let response: PurchaseTicketsResponse = purchase_tickets(&app_state.service, &req)?;

    info!(
        account_id = response.account_id,
        total_amount = response.total_amount,
        seats_reserved = response.seats_reserved,
        "Successfully purchased tickets"
    );

    Ok(Json(response))
}

/// Handler for POST `/purchases/quote` endpoint.
///
/// Validates the purchase and reports its cost without side effects.
async fn handle_quote_purchase(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<PurchaseTicketsRequest>, JsonRejection>,
) -> Result<Json<QuotePurchaseResponse>, HttpError> {
    let Json(req) = payload?;
    info!(
        account_id = %req.account_id,
        requests = req.ticket_type_requests.len(),
        "Handling quote_purchase request"
    );

    let response: QuotePurchaseResponse = quote_purchase(&app_state.service, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/rules` endpoint.
async fn handle_get_purchase_rules(
    AxumState(app_state): AxumState<AppState>,
) -> Json<GetPurchaseRulesResponse> {
    info!("Handling get_purchase_rules request");
    Json(get_purchase_rules(&app_state.service))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/purchases", post(handle_purchase_tickets))
        .route("/purchases/quote", post(handle_quote_purchase))
        .route("/rules", get(handle_get_purchase_rules))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Cinema Tickets Server");

    let rules: PurchaseRules = args.purchase_rules()?;
    info!(
        max_tickets_per_purchase = rules.max_tickets_per_purchase(),
        min_adult_tickets = rules.min_adult_tickets(),
        adult_price = rules.prices().adult,
        child_price = rules.prices().child,
        infant_price = rules.prices().infant,
        "Using purchase rules"
    );

    let app: Router = build_router(AppState::new(rules));

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
