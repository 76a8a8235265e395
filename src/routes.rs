use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::{
    AppState,
    catalog::resolve_page,
    error::{ApiResult, AppError, AppResult},
    models::{DetailQuery, ListQuery},
    templates,
};

pub async fn index(State(state): State<Arc<AppState>>, Query(q): Query<ListQuery>) -> Html<String> {
    let filters = q.filters();
    let listing = state.catalog.list_movies(&filters, q.page.as_deref());
    debug!(
        page = listing.page,
        total_pages = listing.total_pages,
        genre = ?filters.genre(),
        language = ?filters.language(),
        search = ?filters.search(),
        mood = ?filters.mood(),
        sort = filters.sort.as_str(),
        "listed movies"
    );
    Html(templates::index_page(&listing, &filters))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(q): Query<DetailQuery>,
    uri: Uri,
) -> AppResult<Response> {
    // Non-numeric ids are a missing page, not a bad request.
    let Ok(id) = id.parse::<i64>() else {
        return Ok(not_found(uri).await.into_response());
    };

    let movie = state.catalog.movie_by_id(id)?;
    let from_page = resolve_page(q.from_page.as_deref());
    Ok(Html(templates::movie_detail_page(&movie, from_page)).into_response())
}

pub async fn surprise(State(state): State<Arc<AppState>>) -> Html<String> {
    let movie = state.catalog.surprise();
    debug!(id = movie.movie.id, "surprise pick");
    Html(templates::movie_detail_page(&movie, 1))
}

pub async fn about() -> Html<String> {
    Html(templates::about_page())
}

pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(templates::not_found_page(uri.path())))
}

pub async fn api_movies(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListQuery>,
) -> Response {
    let listing = state.catalog.list_movies(&q.filters(), q.page.as_deref());
    Json(listing).into_response()
}

pub async fn api_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let Ok(id) = id.parse::<i64>() else {
        return Err(AppError::NotFound("Movie not found".to_string()).into());
    };
    let movie = state.catalog.movie_by_id(id)?;
    Ok(Json(movie).into_response())
}

pub async fn api_surprise(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.surprise()).into_response()
}
