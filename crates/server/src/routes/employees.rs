use axum::{
    body::Bytes,
    extract::{rejection::{PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service::{employee::Employee, pagination::Pagination};
use tracing::info;

use crate::{errors::JsonApiError, observability, state::AppState};

/// Decode an employee from the raw body whatever the declared content type.
fn decode_employee(body: &Bytes) -> Result<Employee, JsonApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// First value of `key`, so repeated parameters never spoil the others.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// Refresh the records gauge from the store after a mutation.
async fn refresh_record_gauge(state: &AppState) {
    observability::track_records(state.employees.count().await);
}

/// GET /employees?page=&pageSize=
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let pagination = Pagination::from_query(
        first_value(&pairs, "page"),
        first_value(&pairs, "pageSize"),
        state.default_page_size,
    );

    let result = state.employees.list(pagination).await;
    observability::observe("list", &result);
    let page = result?;
    info!(
        page = pagination.page,
        page_size = pagination.page_size,
        count = page.items.len(),
        total = page.total,
        "list employees"
    );
    Ok(([("x-total-count", page.total.to_string())], Json(page.items)))
}

/// POST /employee
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Employee>, JsonApiError> {
    let employee = decode_employee(&body)?;
    let result = state.employees.create(employee).await;
    observability::observe("create", &result);
    let created = result?;
    refresh_record_gauge(&state).await;
    info!(id = created.id, "employee created");
    Ok(Json(created))
}

/// GET /employee/:id
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Employee>, JsonApiError> {
    let Path(id) = id?;
    let result = state.employees.get(id).await;
    observability::observe("get", &result);
    Ok(Json(result?))
}

/// PUT /employee/:id
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Result<Json<Employee>, JsonApiError> {
    let Path(id) = id?;
    let employee = decode_employee(&body)?;
    replace(&state, id, employee).await
}

/// PUT /employee, target id taken from the body
pub async fn update_from_body(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Employee>, JsonApiError> {
    let employee = decode_employee(&body)?;
    replace(&state, employee.id, employee).await
}

async fn replace(
    state: &AppState,
    id: u64,
    employee: Employee,
) -> Result<Json<Employee>, JsonApiError> {
    let result = state.employees.update(id, employee).await;
    observability::observe("update", &result);
    let updated = result?;
    info!(id, "employee updated");
    Ok(Json(updated))
}

/// DELETE /employee/:id
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Path(id) = id?;
    let result = state.employees.delete(id).await;
    observability::observe("delete", &result);
    result?;
    refresh_record_gauge(&state).await;
    info!(id, "employee deleted");
    Ok((StatusCode::OK, format!("Employee with ID {id} deleted successfully")))
}
