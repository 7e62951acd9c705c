use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;

use crate::handlers::ErrorResponse;
use crate::models::room::Room;

pub async fn get_rooms(pool: web::Data<SqlitePool>) -> impl Responder {
    let rooms = sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY id")
        .fetch_all(pool.get_ref())
        .await;

    match rooms {
        Ok(rooms) => HttpResponse::Ok().json(rooms),
        Err(e) => {
            log::error!("Error fetching rooms: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Error fetching rooms"))
        }
    }
}

pub async fn get_room_by_id(pool: web::Data<SqlitePool>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(&id)
        .fetch_optional(pool.get_ref())
        .await;

    match room {
        Ok(Some(room)) => HttpResponse::Ok().json(room),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new("Room not found")),
        Err(e) => {
            log::error!("Error fetching room {id}: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Error fetching room"))
        }
    }
}
