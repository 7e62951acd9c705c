use actix_web::web;

pub mod db;
pub mod handlers;
pub mod models;
pub mod pricing;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rooms")
            .route("", web::get().to(handlers::rooms::get_rooms))
            .route("/{id}", web::get().to(handlers::rooms::get_room_by_id)),
    )
    .service(
        web::scope("/reservations")
            .route("", web::get().to(handlers::reservations::get_reservations))
            .route("", web::post().to(handlers::reservations::create_reservation))
            .route("/{id}", web::get().to(handlers::reservations::get_reservation))
            .route(
                "/{id}",
                web::delete().to(handlers::reservations::delete_reservation),
            )
            .route(
                "/{id}/status",
                web::patch().to(handlers::reservations::update_reservation_status),
            ),
    );
}
