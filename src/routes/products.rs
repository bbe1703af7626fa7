use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::filter::FilterCriteria;
use crate::dto::products::{ProductFormData, status_options};
use crate::forms::products::{ProductFilterQuery, ProductForm, ReturnToForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::products as products_service;

fn render_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    server_config: &ServerConfig,
    data: ProductFormData,
    action: &str,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "products", server_config.theme);
    context.insert("product", &data.product);
    context.insert("categories", &data.categories);
    context.insert("units", &data.units);
    context.insert("action", action);
    render_template(tera, "products/form.html", &context)
}

#[get("/")]
pub async fn show_products(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let criteria = FilterCriteria::from(ProductFilterQuery::from_query_string(req.query_string()));

    let data = match products_service::load_products_page(repo.get_ref(), criteria) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load products page: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(&flash_messages, "products", server_config.theme);
    context.insert("products", &data.products);
    context.insert("categories", &data.categories);
    context.insert("units", &data.units);
    context.insert("criteria", &data.criteria);
    context.insert("statuses", &status_options(data.criteria.status));
    context.insert("query", req.query_string());

    render_template(&tera, "products/index.html", &context)
}

#[get("/products/clear")]
pub async fn clear_filters() -> impl Responder {
    let query = ProductFilterQuery::from(&products_service::clear_filters());
    redirect(&format!("/?{}", query.to_query_string()))
}

#[post("/product/{product_id}/remove")]
pub async fn remove_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ReturnToForm>,
) -> impl Responder {
    match products_service::deactivate_product(repo.get_ref(), product_id.into_inner()) {
        Ok(()) => FlashMessage::success("Product deactivated.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Product not found.").send(),
        Err(_) => FlashMessage::error("Failed to deactivate the product.").send(),
    }
    redirect(&form.location())
}

#[post("/product/{product_id}/reactivate")]
pub async fn reactivate_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ReturnToForm>,
) -> impl Responder {
    match products_service::reactivate_product(repo.get_ref(), product_id.into_inner()) {
        Ok(()) => FlashMessage::success("Product reactivated.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Product not found.").send(),
        Err(_) => FlashMessage::error("Failed to reactivate the product.").send(),
    }
    redirect(&form.location())
}

#[get("/product/new")]
pub async fn new_product(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match products_service::load_product_form(repo.get_ref(), None) {
        Ok(data) => render_form(&tera, &flash_messages, &server_config, data, "/product/add"),
        Err(err) => {
            log::error!("Failed to load product form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/product/add")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    match products_service::create_product(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Product added.").send();
            redirect("/")
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(format!("Invalid product form: {msg}")).send();
            redirect("/product/new")
        }
        Err(_) => {
            FlashMessage::error("Failed to add the product.").send();
            redirect("/product/new")
        }
    }
}

#[get("/product/{product_id}/edit")]
pub async fn edit_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = product_id.into_inner();

    match products_service::load_product_form(repo.get_ref(), Some(product_id)) {
        Ok(data) => {
            let action = format!("/product/{product_id}/save");
            render_form(&tera, &flash_messages, &server_config, data, &action)
        }
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Product not found.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/product/{product_id}/save")]
pub async fn save_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    let product_id = product_id.into_inner();
    let edit_url = format!("/product/{product_id}/edit");

    match products_service::update_product(repo.get_ref(), product_id, &form) {
        Ok(_) => {
            FlashMessage::success("Product updated.").send();
            redirect("/")
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(format!("Invalid product form: {msg}")).send();
            redirect(&edit_url)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Product not found.").send();
            redirect("/")
        }
        Err(_) => {
            FlashMessage::error("Failed to update the product.").send();
            redirect(&edit_url)
        }
    }
}
