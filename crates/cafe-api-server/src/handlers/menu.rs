//! Menu endpoints: thin request/response mapping onto the menu service.

use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use cafe_core::domain::{Category, CategorySeed, CategoryWithItems, ItemSeed, MainCategory, MenuItem};
use cafe_core::services::MenuService;

use crate::utils::error::ApiError;

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

pub async fn get_categories(
    Extension(menu): Extension<Arc<MenuService>>,
    Path(main_category): Path<String>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let main: MainCategory = main_category.parse()?;
    let categories = menu.categories(main).await?;
    Ok(Json(CategoriesResponse { categories }))
}

#[derive(Serialize)]
pub struct ItemsResponse {
    pub items: Vec<MenuItem>,
}

pub async fn get_items(
    Extension(menu): Extension<Arc<MenuService>>,
    Path((main_category, category_id)): Path<(String, i64)>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let main: MainCategory = main_category.parse()?;
    let items = menu.items(main, category_id).await?;
    Ok(Json(ItemsResponse { items }))
}

#[derive(Serialize)]
pub struct CompleteMenuResponse {
    pub menu: Vec<CategoryWithItems>,
}

pub async fn get_complete_menu(
    Extension(menu): Extension<Arc<MenuService>>,
    Path(main_category): Path<String>,
) -> Result<Json<CompleteMenuResponse>, ApiError> {
    let main: MainCategory = main_category.parse()?;
    let entries = menu.complete_menu(main).await?;
    Ok(Json(CompleteMenuResponse { menu: entries }))
}

#[derive(Deserialize)]
struct MenuDataPayload {
    #[serde(rename = "mainCategory")]
    main_category: String,
    categories: Vec<CategorySeed>,
}

#[derive(Serialize)]
pub struct InitializeResponse {
    pub success: bool,
    pub message: String,
}

pub async fn initialize_menu(
    Extension(menu): Extension<Arc<MenuService>>,
    Json(body): Json<Value>,
) -> Result<Json<InitializeResponse>, ApiError> {
    let payload = body
        .get("menuData")
        .cloned()
        .and_then(|v| serde_json::from_value::<MenuDataPayload>(v).ok())
        .ok_or_else(|| ApiError::BadRequest("Invalid menu data format".to_string()))?;

    let main: MainCategory = payload.main_category.parse()?;
    info!(main = %main, categories = payload.categories.len(), "initializing menu");
    menu.initialize(main, payload.categories).await?;

    Ok(Json(InitializeResponse {
        success: true,
        message: "Menu data initialized successfully".to_string(),
    }))
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub main_category: String,
    pub category_id: Option<i64>,
    pub name: String,
    pub price: String,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct CreateItemResponse {
    pub success: bool,
    pub item: MenuItem,
    pub order: u32,
}

pub async fn create_item(
    Extension(menu): Extension<Arc<MenuService>>,
    Json(request): Json<CreateItemRequest>,
) -> Result<Json<CreateItemResponse>, ApiError> {
    let main: MainCategory = request.main_category.parse()?;
    let category_id = require_category_id(request.category_id)?;

    let item = menu
        .create_item(
            main,
            category_id,
            ItemSeed {
                name: request.name,
                price: request.price,
                description: request.description,
            },
        )
        .await?;

    let order = item.order;
    Ok(Json(CreateItemResponse {
        success: true,
        item,
        order,
    }))
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub main_category: String,
    pub category_id: Option<i64>,
    pub item_order: Option<u32>,
    pub name: String,
    pub price: String,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateItemResponse {
    pub success: bool,
    pub item: MenuItem,
}

pub async fn update_item(
    Extension(menu): Extension<Arc<MenuService>>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<Json<UpdateItemResponse>, ApiError> {
    let main: MainCategory = request.main_category.parse()?;
    let category_id = require_category_id(request.category_id)?;
    let order = require_item_order(request.item_order)?;

    let item = menu
        .update_item(
            main,
            category_id,
            order,
            ItemSeed {
                name: request.name,
                price: request.price,
                description: request.description,
            },
        )
        .await?;

    Ok(Json(UpdateItemResponse {
        success: true,
        item,
    }))
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteItemRequest {
    pub main_category: String,
    pub category_id: Option<i64>,
    pub item_order: Option<u32>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

pub async fn delete_item(
    Extension(menu): Extension<Arc<MenuService>>,
    Json(request): Json<DeleteItemRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let main: MainCategory = request.main_category.parse()?;
    let category_id = require_category_id(request.category_id)?;
    let order = require_item_order(request.item_order)?;

    menu.delete_item(main, category_id, order).await?;

    Ok(Json(SuccessResponse { success: true }))
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub main_category: String,
    pub category_id: Option<i64>,
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateCategoryResponse {
    pub success: bool,
    pub category: Category,
}

pub async fn update_category(
    Extension(menu): Extension<Arc<MenuService>>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<UpdateCategoryResponse>, ApiError> {
    let main: MainCategory = request.main_category.parse()?;
    let category_id = require_category_id(request.category_id)?;

    let category = menu
        .update_category(main, category_id, &request.name, request.icon, request.color)
        .await?;

    Ok(Json(UpdateCategoryResponse {
        success: true,
        category,
    }))
}

fn require_category_id(category_id: Option<i64>) -> Result<i64, ApiError> {
    category_id.ok_or_else(|| ApiError::BadRequest("Missing required field: categoryId".to_string()))
}

fn require_item_order(item_order: Option<u32>) -> Result<u32, ApiError> {
    item_order.ok_or_else(|| ApiError::BadRequest("Missing required field: itemOrder".to_string()))
}
