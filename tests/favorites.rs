mod common;

use actix_web::{http::StatusCode, test};
use myflix::models::{Movie, User};
use myflix::store::Catalog;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use common::{bearer, demo_catalog, init_app, register, register_and_login};

#[actix_rt::test]
async fn test_add_then_remove_favorite_restores_list() {
    let catalog = demo_catalog();
    let app = init_app(catalog.clone()).await;
    let token = register_and_login(&app, "moviefan", "popcorn").await;

    let movies = catalog.movies().await.unwrap();
    let kept: &Movie = &movies[0];
    let toggled: &Movie = &movies[1];

    let req = test::TestRequest::post()
        .uri(&format!("/user/moviefan/movies/{}", kept.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let before: User = test::read_body_json(resp).await;
    assert_eq!(before.favorites, vec![kept.id]);

    let req = test::TestRequest::post()
        .uri(&format!("/user/moviefan/movies/{}", toggled.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let added: User = test::read_body_json(resp).await;
    assert_eq!(added.favorites, vec![kept.id, toggled.id]);

    let req = test::TestRequest::delete()
        .uri(&format!("/user/moviefan/movies/{}", toggled.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let after: User = test::read_body_json(resp).await;
    assert_eq!(after.favorites, before.favorites);
}

#[actix_rt::test]
async fn test_favorites_are_not_checked_or_deduplicated() {
    let app = init_app(demo_catalog()).await;
    let token = register_and_login(&app, "moviefan", "popcorn").await;
    let unknown_movie = Uuid::new_v4();

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&format!("/user/moviefan/movies/{}", unknown_movie))
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/user/moviefan/movies")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<Uuid> = test::read_body_json(resp).await;
    assert_eq!(favorites, vec![unknown_movie, unknown_movie]);
}

#[actix_rt::test]
async fn test_cannot_change_another_users_favorites() {
    let catalog = demo_catalog();
    let app = init_app(catalog.clone()).await;
    let token = register_and_login(&app, "moviefan", "popcorn").await;
    register(&app, "cinephile", "nachos").await;

    let req = test::TestRequest::post()
        .uri(&format!("/user/cinephile/movies/{}", Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let cinephile = catalog.user_by_username("cinephile").await.unwrap().unwrap();
    assert!(cinephile.favorites.is_empty());
}

#[actix_rt::test]
async fn test_malformed_movie_id_is_bad_request() {
    let app = init_app(demo_catalog()).await;
    let token = register_and_login(&app, "moviefan", "popcorn").await;

    let req = test::TestRequest::post()
        .uri("/user/moviefan/movies/not-a-uuid")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_favorites_of_unknown_user() {
    let app = init_app(demo_catalog()).await;
    let token = register_and_login(&app, "moviefan", "popcorn").await;

    let req = test::TestRequest::get()
        .uri("/user/nobodyhere/movies")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
