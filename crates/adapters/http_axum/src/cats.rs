//! `/cats` controller.
//!
//! Each route is registered explicitly in [`routes`]; the handler signature
//! declares which parts of the request it binds:
//!
//! | Route                   | Bindings                      |
//! |-------------------------|-------------------------------|
//! | `GET  test01`           | whole [`Request`]             |
//! | `GET  test02/{id}`      | all path params as a map      |
//! | `GET  test03/{id}`      | path param `id`               |
//! | `GET  test04`           | query map                     |
//! | `POST create`           | JSON body ([`Cat`])           |
//! | `GET  findAll`          | none                          |
//! | `GET  findOne/{id}`     | path param `id`               |
//! | `PUT  update/{id}`      | path param `id` + raw body    |
//! | `DELETE remove/{id}`    | path param `id`               |
//! | `POST create01`         | none, builds the response     |
//! | `GET  test05`           | none, builds the response     |
//!
//! Only `create` and `findAll` reach the record store.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Serialize;

use catbox_app::ports::CatRepository;
use catbox_domain::cat::{Cat, UpdateCat};

use crate::error::ApiError;
use crate::state::AppState;

/// Body sent by `create01`.
pub const CREATE01_BODY: &str = "kkkkkkkkk";

/// Build the `/cats` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CatRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/test01", get(test01))
        .route("/test02/{id}", get(test02))
        .route("/test03/{id}", get(test03))
        .route("/test04", get(test04))
        .route("/create", post(create::<R>))
        .route("/findAll", get(find_all::<R>))
        .route("/findOne/{id}", get(find_one))
        .route("/update/{id}", put(update))
        .route("/remove/{id}", delete(remove))
        .route("/create01", post(create01))
        .route("/test05", get(test05))
}

/// Acknowledgement returned by `POST /cats/create`.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub code: u16,
    pub message: &'static str,
}

impl Ack {
    fn success() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: "success",
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Ack>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => (StatusCode::OK, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Cat>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /cats/test01` — receives the whole request and logs its query.
pub async fn test01(request: Request) -> &'static str {
    let query = Query::<BTreeMap<String, String>>::try_from_uri(request.uri())
        .map(|Query(query)| query)
        .unwrap_or_default();
    tracing::info!(?query, "test01");
    "test01"
}

/// `GET /cats/test02/{id}` — receives every path param as a map.
pub async fn test02(Path(params): Path<BTreeMap<String, String>>) -> &'static str {
    tracing::info!(?params, "test02");
    "param=>:"
}

/// `GET /cats/test03/{id}` — receives the `id` path param alone.
pub async fn test03(Path(id): Path<String>) -> String {
    tracing::info!(%id, "test03");
    format!("id=>:{id}")
}

/// `GET /cats/test04` — receives the query string as a map.
pub async fn test04(Query(query): Query<BTreeMap<String, String>>) -> &'static str {
    tracing::info!(?query, "test04");
    "test04"
}

/// `POST /cats/create` — stores the body and acknowledges with 200.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(cat): Json<Cat>,
) -> Result<CreateResponse, ApiError>
where
    R: CatRepository + Send + Sync + 'static,
{
    tracing::info!(%cat, "create");
    state.cat_service.create(cat).await?;
    Ok(CreateResponse::Ok(Json(Ack::success())))
}

/// `GET /cats/findAll` — returns every stored cat.
pub async fn find_all<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: CatRepository + Send + Sync + 'static,
{
    let cats = state.cat_service.find_all().await?;
    Ok(ListResponse::Ok(Json(cats)))
}

/// `GET /cats/findOne/{id}`
pub async fn find_one(Path(id): Path<String>) -> String {
    format!("This action returns a #{id} cat")
}

/// `PUT /cats/update/{id}` — logs the body, changes nothing.
///
/// Any body is accepted. Anything other than a JSON object is logged as an
/// empty update.
pub async fn update(Path(id): Path<String>, body: Bytes) -> String {
    let update = serde_json::from_slice::<UpdateCat>(&body).unwrap_or_default();
    tracing::info!(%id, %update, "update");
    format!("This action updates a #{id} cat")
}

/// `DELETE /cats/remove/{id}` — removes nothing.
pub async fn remove(Path(id): Path<String>) -> String {
    format!("This action removes a #{id} cat")
}

/// `POST /cats/create01` — writes a fixed text response directly.
pub async fn create01() -> Response {
    (StatusCode::OK, CREATE01_BODY).into_response()
}

/// `GET /cats/test05` — writes an empty JSON array directly.
pub async fn test05() -> Response {
    (StatusCode::OK, Json(serde_json::json!([]))).into_response()
}
