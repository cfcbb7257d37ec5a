use actix_web::{get, HttpResponse, Responder};

pub const WELCOME_MESSAGE: &str = "Welcome to my movie club!";

/// Public landing route.
#[get("/")]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}
