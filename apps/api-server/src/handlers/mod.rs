//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod users;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/login", web::post().to(auth::login))
        .service(
            web::resource("/users")
                .route(web::get().to(users::list))
                .route(web::post().to(users::create)),
        )
        .service(
            web::resource("/users/{id}")
                .route(web::get().to(users::get))
                .route(web::put().to(users::update))
                .route(web::post().to(users::update))
                .route(web::delete().to(users::delete)),
        )
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list))
                .route(web::post().to(posts::create)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get))
                .route(web::put().to(posts::update))
                .route(web::post().to(posts::update))
                .route(web::delete().to(posts::delete)),
        );
}
