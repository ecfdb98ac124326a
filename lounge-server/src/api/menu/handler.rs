//! Menu API Handlers

use axum::Json;
use axum::extract::Path;

use shared::content::menu::{self, MenuCategory, MenuSection};

use crate::utils::{ApiResponse, AppResult, ok};

/// All categories in tab order
pub async fn list() -> Json<ApiResponse<Vec<MenuSection>>> {
    ok(menu::all_sections())
}

/// One category; unknown ids are a 404
pub async fn get_by_id(Path(category): Path<String>) -> AppResult<Json<ApiResponse<MenuSection>>> {
    let category: MenuCategory = category.parse()?;
    Ok(ok(category.section()))
}
