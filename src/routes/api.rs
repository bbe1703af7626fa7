use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::domain::filter::FilterCriteria;
use crate::forms::products::ProductFilterQuery;
use crate::repository::DieselRepository;
use crate::services::api as api_service;

#[get("/v1/products")]
pub async fn api_v1_products(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let criteria = FilterCriteria::from(ProductFilterQuery::from_query_string(req.query_string()));

    match api_service::list_products(repo.get_ref(), &criteria) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
