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

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use clap::Parser;
use cocagne_api::{
    AddCalendarDateRequest, AddCalendarDateResponse, AddTourPointRequest, AddTourPointResponse,
    ApiError, ClearTourCalendarResponse, CreateDepotPointResponse, CreateStructureRequest,
    CreateStructureResponse, CreateTourRequest, CreateTourResponse, DepotPointInfo,
    DepotPointRequest, ProposeDatesRequest, ProposeDatesResponse, RemoveTourPointResponse,
    ReorderTourPointRequest, ReorderTourPointResponse, StructureInfo, TourDatesInfo, TourInfo,
    TourPointInfo, UpdateTourCalendarRequest, UpdateTourCalendarResponse, add_calendar_date,
    add_tour_point, clear_tour_calendar, create_depot_point, create_structure, create_tour,
    delete_depot_point, delete_tour, get_depot_point, get_tour_calendar, list_available_points,
    list_depot_points, list_holidays, list_open_weeks, list_structures, list_tour_dates,
    list_tour_points, list_tours, propose_delivery_dates, remove_tour_point, reorder_tour_point,
    update_depot_point, update_tour_calendar,
};
use cocagne_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Cocagne Server - HTTP server for the Cocagne delivery planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL` connection URL. Takes precedence over `--database` when set.
    #[arg(short, long)]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for tours, depot points and the calendar.
    persistence: Arc<Mutex<Persistence>>,
}

/// API response for listing tours.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListToursResponse {
    /// The list of tours.
    tournees: Vec<TourInfo>,
}

/// API response for the planning overview of all tours.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListTourDatesResponse {
    /// The planned dates of each tour.
    tournees: Vec<TourDatesInfo>,
}

/// API response for listing depot points.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListDepotPointsResponse {
    /// The list of depot points.
    points: Vec<DepotPointInfo>,
}

/// API response for listing the depot points of a tour.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListTourPointsResponse {
    /// The depot points of the tour, in delivery order.
    points: Vec<TourPointInfo>,
}

/// API response for listing shared calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CalendarDatesResponse {
    /// The dates (ISO-8601), ascending.
    dates: Vec<String>,
}

/// API response for listing structures.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListStructuresResponse {
    /// The list of structures.
    structures: Vec<StructureInfo>,
}

/// API response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    /// Success indicator.
    success: bool,
    /// A success message.
    message: String,
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
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
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

/// Handler for POST `/tournees` endpoint.
///
/// Creates a new tour.
async fn handle_create_tour(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateTourRequest>,
) -> Result<Json<CreateTourResponse>, HttpError> {
    info!("Handling create_tour request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateTourResponse = create_tour(&mut persistence, req)?;
    drop(persistence);

    info!(tour_id = response.tournee_id, "Successfully created tour");

    Ok(Json(response))
}

/// Handler for GET `/tournees` endpoint.
///
/// Lists all tours.
async fn handle_list_tours(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListToursResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let tournees: Vec<TourInfo> = list_tours(&mut persistence)?;
    drop(persistence);

    Ok(Json(ListToursResponse { tournees }))
}

/// Handler for GET `/tournees/dates` endpoint.
///
/// Returns the planned dates of every tour, for the planning overview.
async fn handle_list_tour_dates(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListTourDatesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let tournees: Vec<TourDatesInfo> = list_tour_dates(&mut persistence)?;
    drop(persistence);

    Ok(Json(ListTourDatesResponse { tournees }))
}

/// Handler for DELETE `/tournees/{id}` endpoint.
///
/// Deletes a tour and its depot point memberships.
async fn handle_delete_tour(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(tour_id = %tour_id, "Handling delete_tour request");

    let mut persistence = app_state.persistence.lock().await;
    delete_tour(&mut persistence, &tour_id)?;
    drop(persistence);

    Ok(Json(DeleteResponse {
        success: true,
        message: String::from("Tournée supprimée"),
    }))
}

/// Handler for GET `/tournees/{id}/calendrier` endpoint.
///
/// Returns the calendar record of a tour.
async fn handle_get_tour_calendar(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
) -> Result<Json<TourInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let tour: TourInfo = get_tour_calendar(&mut persistence, &tour_id)?;
    drop(persistence);

    Ok(Json(tour))
}

/// Handler for PATCH `/tournees/{id}/calendrier` endpoint.
///
/// Applies a partial update to the calendar record of a tour.
async fn handle_update_tour_calendar(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
    Json(req): Json<UpdateTourCalendarRequest>,
) -> Result<Json<UpdateTourCalendarResponse>, HttpError> {
    info!(tour_id = %tour_id, "Handling update_tour_calendar request");

    let mut persistence = app_state.persistence.lock().await;
    let response: UpdateTourCalendarResponse =
        update_tour_calendar(&mut persistence, &tour_id, req)?;
    drop(persistence);

    info!(
        tour_id = response.tournee.tournee_id,
        "Successfully updated tour calendar"
    );

    Ok(Json(response))
}

/// Handler for DELETE `/tournees/{id}/calendrier` endpoint.
///
/// Clears the planned dates of a tour and resets its status.
async fn handle_clear_tour_calendar(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
) -> Result<Json<ClearTourCalendarResponse>, HttpError> {
    info!(tour_id = %tour_id, "Handling clear_tour_calendar request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ClearTourCalendarResponse = clear_tour_calendar(&mut persistence, &tour_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/tournees/{id}/points-depot` endpoint.
///
/// Lists the depot points of a tour in delivery order.
async fn handle_list_tour_points(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
) -> Result<Json<ListTourPointsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let points: Vec<TourPointInfo> = list_tour_points(&mut persistence, &tour_id)?;
    drop(persistence);

    Ok(Json(ListTourPointsResponse { points }))
}

/// Handler for POST `/tournees/{id}/points-depot` endpoint.
///
/// Adds a depot point to a tour. Adding a point that is already on the
/// tour is a no-op reported in the response body.
async fn handle_add_tour_point(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
    Json(req): Json<AddTourPointRequest>,
) -> Result<Json<AddTourPointResponse>, HttpError> {
    info!(
        tour_id = %tour_id,
        point_id = req.point_id,
        "Handling add_tour_point request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AddTourPointResponse = add_tour_point(&mut persistence, &tour_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/tournees/{id}/points-depot/{point_id}` endpoint.
///
/// Removes a depot point from a tour.
async fn handle_remove_tour_point(
    AxumState(app_state): AxumState<AppState>,
    Path((tour_id, point_id)): Path<(String, String)>,
) -> Result<Json<RemoveTourPointResponse>, HttpError> {
    info!(
        tour_id = %tour_id,
        point_id = %point_id,
        "Handling remove_tour_point request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: RemoveTourPointResponse =
        remove_tour_point(&mut persistence, &tour_id, &point_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PATCH `/tournees/{id}/points-depot/ordre` endpoint.
///
/// Moves a depot point to a new position within a tour.
async fn handle_reorder_tour_point(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
    Json(req): Json<ReorderTourPointRequest>,
) -> Result<Json<ReorderTourPointResponse>, HttpError> {
    info!(
        tour_id = %tour_id,
        point_id = req.point_id,
        position = req.numero_ordre,
        "Handling reorder_tour_point request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ReorderTourPointResponse = reorder_tour_point(&mut persistence, &tour_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/tournees/{id}/dates-proposees` endpoint.
///
/// Generates proposed delivery dates for a tour.
async fn handle_propose_dates(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
    Json(req): Json<ProposeDatesRequest>,
) -> Result<Json<ProposeDatesResponse>, HttpError> {
    info!(
        tour_id = %tour_id,
        start = req.date_debut.as_deref().unwrap_or("today"),
        frequency = req.frequence,
        "Handling propose_dates request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ProposeDatesResponse = propose_delivery_dates(&mut persistence, &tour_id, req)?;
    drop(persistence);

    info!(
        tour_id = %tour_id,
        proposed = response.dates.len(),
        reason = %response.motif_arret,
        "Proposal run finished"
    );

    Ok(Json(response))
}

/// Handler for GET `/points-depot` endpoint.
///
/// Lists all depot points.
async fn handle_list_depot_points(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListDepotPointsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let points: Vec<DepotPointInfo> = list_depot_points(&mut persistence)?;
    drop(persistence);

    Ok(Json(ListDepotPointsResponse { points }))
}

/// Handler for POST `/points-depot` endpoint.
///
/// Creates a new depot point.
async fn handle_create_depot_point(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DepotPointRequest>,
) -> Result<Json<CreateDepotPointResponse>, HttpError> {
    info!(name = %req.nom, "Handling create_depot_point request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateDepotPointResponse = create_depot_point(&mut persistence, req)?;
    drop(persistence);

    info!(
        point_id = response.point_id,
        "Successfully created depot point"
    );

    Ok(Json(response))
}

/// Handler for GET `/points-depot/{id}` endpoint.
///
/// Returns a single depot point.
async fn handle_get_depot_point(
    AxumState(app_state): AxumState<AppState>,
    Path(point_id): Path<String>,
) -> Result<Json<DepotPointInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let point: DepotPointInfo = get_depot_point(&mut persistence, &point_id)?;
    drop(persistence);

    Ok(Json(point))
}

/// Handler for PATCH `/points-depot/{id}` endpoint.
///
/// Updates a depot point.
async fn handle_update_depot_point(
    AxumState(app_state): AxumState<AppState>,
    Path(point_id): Path<String>,
    Json(req): Json<DepotPointRequest>,
) -> Result<Json<DepotPointInfo>, HttpError> {
    info!(point_id = %point_id, "Handling update_depot_point request");

    let mut persistence = app_state.persistence.lock().await;
    let point: DepotPointInfo = update_depot_point(&mut persistence, &point_id, req)?;
    drop(persistence);

    Ok(Json(point))
}

/// Handler for DELETE `/points-depot/{id}` endpoint.
///
/// Deletes a depot point and its tour memberships.
async fn handle_delete_depot_point(
    AxumState(app_state): AxumState<AppState>,
    Path(point_id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(point_id = %point_id, "Handling delete_depot_point request");

    let mut persistence = app_state.persistence.lock().await;
    delete_depot_point(&mut persistence, &point_id)?;
    drop(persistence);

    Ok(Json(DeleteResponse {
        success: true,
        message: String::from("Point de dépôt supprimé"),
    }))
}

/// Handler for GET `/points-depot/disponibles/{id}` endpoint.
///
/// Lists the depot points not yet assigned to the given tour.
async fn handle_list_available_points(
    AxumState(app_state): AxumState<AppState>,
    Path(tour_id): Path<String>,
) -> Result<Json<ListDepotPointsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let points: Vec<DepotPointInfo> = list_available_points(&mut persistence, &tour_id)?;
    drop(persistence);

    Ok(Json(ListDepotPointsResponse { points }))
}

/// Handler for GET `/calendrier/ouvertures` endpoint.
///
/// Lists the open-week dates of the shared calendar.
async fn handle_list_open_weeks(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<CalendarDatesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let dates: Vec<String> = list_open_weeks(&mut persistence)?;
    drop(persistence);

    Ok(Json(CalendarDatesResponse { dates }))
}

/// Handler for GET `/calendrier/feries` endpoint.
///
/// Lists the holiday dates of the shared calendar.
async fn handle_list_holidays(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<CalendarDatesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let dates: Vec<String> = list_holidays(&mut persistence)?;
    drop(persistence);

    Ok(Json(CalendarDatesResponse { dates }))
}

/// Handler for POST `/calendrier` endpoint.
///
/// Records a date in the shared calendar.
async fn handle_add_calendar_date(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddCalendarDateRequest>,
) -> Result<Json<AddCalendarDateResponse>, HttpError> {
    info!(date = %req.date, kind = %req.kind, "Handling add_calendar_date request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AddCalendarDateResponse = add_calendar_date(&mut persistence, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/structures` endpoint.
///
/// Lists all structures.
async fn handle_list_structures(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListStructuresResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let structures: Vec<StructureInfo> = list_structures(&mut persistence)?;
    drop(persistence);

    Ok(Json(ListStructuresResponse { structures }))
}

/// Handler for POST `/structures` endpoint.
///
/// Creates a new structure.
async fn handle_create_structure(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateStructureRequest>,
) -> Result<Json<CreateStructureResponse>, HttpError> {
    info!(name = %req.nom, "Handling create_structure request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateStructureResponse = create_structure(&mut persistence, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/tournees", post(handle_create_tour))
        .route("/tournees", get(handle_list_tours))
        .route("/tournees/dates", get(handle_list_tour_dates))
        .route("/tournees/{id}", delete(handle_delete_tour))
        .route("/tournees/{id}/calendrier", get(handle_get_tour_calendar))
        .route(
            "/tournees/{id}/calendrier",
            patch(handle_update_tour_calendar),
        )
        .route(
            "/tournees/{id}/calendrier",
            delete(handle_clear_tour_calendar),
        )
        .route("/tournees/{id}/points-depot", get(handle_list_tour_points))
        .route("/tournees/{id}/points-depot", post(handle_add_tour_point))
        .route(
            "/tournees/{id}/points-depot/ordre",
            patch(handle_reorder_tour_point),
        )
        .route(
            "/tournees/{id}/points-depot/{point_id}",
            delete(handle_remove_tour_point),
        )
        .route("/tournees/{id}/dates-proposees", post(handle_propose_dates))
        .route("/points-depot", get(handle_list_depot_points))
        .route("/points-depot", post(handle_create_depot_point))
        .route("/points-depot/{id}", get(handle_get_depot_point))
        .route("/points-depot/{id}", patch(handle_update_depot_point))
        .route("/points-depot/{id}", delete(handle_delete_depot_point))
        .route(
            "/points-depot/disponibles/{id}",
            get(handle_list_available_points),
        )
        .route("/calendrier/ouvertures", get(handle_list_open_weeks))
        .route("/calendrier/feries", get(handle_list_holidays))
        .route("/calendrier", post(handle_add_calendar_date))
        .route("/structures", get(handle_list_structures))
        .route("/structures", post(handle_create_structure))
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

    info!("Initializing Cocagne Server");

    // Initialize persistence (MySQL, file-based or in-memory based on CLI arguments)
    let persistence: Persistence = if let Some(mysql_url) = &args.mysql_url {
        info!("Using MySQL database");
        Persistence::new_with_mysql(mysql_url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Helper to build a JSON request.
    fn json_request(method: &str, uri: &str, body: &impl Serialize) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    /// Helper to build a bodyless request.
    fn plain_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    /// Helper to deserialize a response body.
    async fn response_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    /// Helper to create a tour through the API and return its ID.
    async fn create_tour_via_api(app: &Router, req: &CreateTourRequest) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/tournees", req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let created: CreateTourResponse = response_json(response).await;
        created.tournee_id
    }

    /// Helper to create a depot point through the API and return its ID.
    async fn create_point_via_api(app: &Router, name: &str) -> i64 {
        let req: DepotPointRequest = DepotPointRequest {
            nom: name.to_string(),
            adresse: String::from("1 rue du Marché"),
            latitude: 46.2,
            longitude: 6.1,
            structure_id: None,
        };
        let response = app
            .clone()
            .oneshot(json_request("POST", "/points-depot", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let created: CreateDepotPointResponse = response_json(response).await;
        created.point_id
    }

    #[tokio::test]
    async fn test_create_and_list_tours() {
        let app: Router = build_router(create_test_app_state());

        let tour_id: i64 = create_tour_via_api(
            &app,
            &CreateTourRequest {
                jour_preparation: Some(String::from("2025-03-03")),
                jour_livraison: Some(String::from("2025-03-05")),
                statut_tournee: Some(String::from("planifiée")),
            },
        )
        .await;
        assert!(tour_id > 0);

        let response = app
            .oneshot(plain_request("GET", "/tournees"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let listed: ListToursResponse = response_json(response).await;
        assert_eq!(listed.tournees.len(), 1);
        assert_eq!(listed.tournees[0].statut_tournee, "planifiée");
    }

    #[tokio::test]
    async fn test_malformed_tour_id_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(plain_request("GET", "/tournees/abc/calendrier"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = response_json(response).await;
        assert!(error_response.error);
    }

    #[tokio::test]
    async fn test_missing_tour_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(plain_request("GET", "/tournees/99/calendrier"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_calendar_patch_violating_date_order_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());

        let tour_id: i64 = create_tour_via_api(
            &app,
            &CreateTourRequest {
                jour_preparation: Some(String::from("2025-03-03")),
                jour_livraison: Some(String::from("2025-03-05")),
                statut_tournee: None,
            },
        )
        .await;

        let patch: UpdateTourCalendarRequest = UpdateTourCalendarRequest {
            jour_preparation: Some(String::from("2025-03-10")),
            jour_livraison: None,
            statut_tournee: None,
        };
        let response = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                &format!("/tournees/{tour_id}/calendrier"),
                &patch,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        // The stored record is untouched.
        let response = app
            .oneshot(plain_request(
                "GET",
                &format!("/tournees/{tour_id}/calendrier"),
            ))
            .await
            .unwrap();
        let tour: TourInfo = response_json(response).await;
        assert_eq!(tour.jour_preparation.as_deref(), Some("2025-03-03"));
    }

    #[tokio::test]
    async fn test_empty_membership_listing_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let tour_id: i64 = create_tour_via_api(
            &app,
            &CreateTourRequest {
                jour_preparation: None,
                jour_livraison: None,
                statut_tournee: None,
            },
        )
        .await;

        let response = app
            .oneshot(plain_request(
                "GET",
                &format!("/tournees/{tour_id}/points-depot"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_membership_add_list_remove_flow() {
        let app: Router = build_router(create_test_app_state());

        let tour_id: i64 = create_tour_via_api(
            &app,
            &CreateTourRequest {
                jour_preparation: None,
                jour_livraison: None,
                statut_tournee: None,
            },
        )
        .await;
        let point_id: i64 = create_point_via_api(&app, "Ferme du Lac").await;

        let add_req: AddTourPointRequest = AddTourPointRequest {
            point_id,
            numero_ordre: Some(1),
        };
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/tournees/{tour_id}/points-depot"),
                &add_req,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let added: AddTourPointResponse = response_json(response).await;
        assert!(added.added);

        let response = app
            .clone()
            .oneshot(plain_request(
                "GET",
                &format!("/tournees/{tour_id}/points-depot"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let listed: ListTourPointsResponse = response_json(response).await;
        assert_eq!(listed.points.len(), 1);
        assert_eq!(listed.points[0].point_id, point_id);

        let response = app
            .oneshot(plain_request(
                "DELETE",
                &format!("/tournees/{tour_id}/points-depot/{point_id}"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let removed: RemoveTourPointResponse = response_json(response).await;
        assert!(removed.removed);
    }

    #[tokio::test]
    async fn test_calendar_reference_round_trip() {
        let app: Router = build_router(create_test_app_state());

        let req: AddCalendarDateRequest = AddCalendarDateRequest {
            date: String::from("2025-01-06"),
            kind: String::from("ouverture"),
        };
        let response = app
            .clone()
            .oneshot(json_request("POST", "/calendrier", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(plain_request("GET", "/calendrier/ouvertures"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let listed: CalendarDatesResponse = response_json(response).await;
        assert_eq!(listed.dates, vec![String::from("2025-01-06")]);
    }

    #[tokio::test]
    async fn test_proposals_without_open_weeks_are_exhausted() {
        let app: Router = build_router(create_test_app_state());

        let tour_id: i64 = create_tour_via_api(
            &app,
            &CreateTourRequest {
                jour_preparation: None,
                jour_livraison: None,
                statut_tournee: None,
            },
        )
        .await;

        let req: ProposeDatesRequest = ProposeDatesRequest {
            date_debut: Some(String::from("2025-01-06")),
            frequence: 7,
        };
        let response = app
            .oneshot(json_request(
                "POST",
                &format!("/tournees/{tour_id}/dates-proposees"),
                &req,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let proposals: ProposeDatesResponse = response_json(response).await;
        assert!(proposals.dates.is_empty());
        assert!(proposals.epuise);
        assert_eq!(proposals.motif_arret, "echecs_consecutifs");
    }

    #[tokio::test]
    async fn test_proposals_accept_payload_without_start_date() {
        let app: Router = build_router(create_test_app_state());

        let tour_id: i64 = create_tour_via_api(
            &app,
            &CreateTourRequest {
                jour_preparation: None,
                jour_livraison: None,
                statut_tournee: None,
            },
        )
        .await;

        // Only the frequency is supplied; the run starts from the current
        // day. With no open weeks every candidate is rejected.
        let response = app
            .oneshot(json_request(
                "POST",
                &format!("/tournees/{tour_id}/dates-proposees"),
                &serde_json::json!({ "frequence": 7 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let proposals: ProposeDatesResponse = response_json(response).await;
        assert!(proposals.dates.is_empty());
        assert!(proposals.epuise);
    }
}
