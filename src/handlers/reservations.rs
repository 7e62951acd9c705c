use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sqlx::SqlitePool;
use validator::Validate;

use crate::handlers::ErrorResponse;
use crate::models::reservation::{CreateReservation, Reservation, ReservationStatus, UpdateStatus};
use crate::models::room::Room;
use crate::pricing;

/// Booking identifier in the form `RES-<millis>-<9 uppercase alphanumerics>`.
fn new_reservation_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!(
        "RES-{}-{}",
        Utc::now().timestamp_millis(),
        suffix.to_uppercase()
    )
}

pub async fn create_reservation(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateReservation>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    let nights = pricing::nights(body.check_in, body.check_out);
    if nights <= 0 {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("Check-out must be after check-in"));
    }

    let room = match sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(&body.room_id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(room)) => room,
        Ok(None) => return HttpResponse::NotFound().json(ErrorResponse::new("Room not found")),
        Err(e) => {
            log::error!("Error fetching room {}: {e}", body.room_id);
            return HttpResponse::InternalServerError().json(ErrorResponse::new("Database error"));
        }
    };

    if body.guests > room.capacity {
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Maximum {} guests for this room",
            room.capacity
        )));
    }

    // No overlap check against existing reservations for the same room; two
    // bookings over the same dates are both accepted.
    let reservation = Reservation {
        id: new_reservation_id(),
        room_id: room.id,
        guest_name: body.guest_name.clone(),
        email: body.email.clone(),
        phone: body.phone.clone(),
        check_in: body.check_in,
        check_out: body.check_out,
        guests: body.guests,
        special_requests: body.special_requests.clone().unwrap_or_default(),
        status: ReservationStatus::Confirmed,
        created_at: Utc::now(),
        total_price: pricing::total_price(room.price, nights),
    };

    let inserted = sqlx::query(
        r#"
        INSERT INTO reservations
            (id, room_id, guest_name, email, phone, check_in, check_out,
             guests, special_requests, status, created_at, total_price)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&reservation.id)
    .bind(&reservation.room_id)
    .bind(&reservation.guest_name)
    .bind(&reservation.email)
    .bind(&reservation.phone)
    .bind(reservation.check_in)
    .bind(reservation.check_out)
    .bind(reservation.guests)
    .bind(&reservation.special_requests)
    .bind(reservation.status)
    .bind(reservation.created_at)
    .bind(reservation.total_price)
    .execute(pool.get_ref())
    .await;

    if let Err(e) = inserted {
        log::error!("Failed to insert reservation: {e}");
        return HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Failed to create reservation"));
    }

    log::info!("New reservation created: {}", reservation.id);
    HttpResponse::Created().json(reservation)
}

pub async fn get_reservations(pool: web::Data<SqlitePool>) -> impl Responder {
    let reservations =
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations ORDER BY created_at")
            .fetch_all(pool.get_ref())
            .await;

    match reservations {
        Ok(reservations) => HttpResponse::Ok().json(reservations),
        Err(e) => {
            log::error!("Error fetching reservations: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Error fetching reservations"))
        }
    }
}

pub async fn get_reservation(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?")
        .bind(&id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(reservation)) => HttpResponse::Ok().json(reservation),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::new("Reservation not found")),
        Err(e) => {
            log::error!("Error fetching reservation {id}: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Database error"))
        }
    }
}

pub async fn delete_reservation(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match sqlx::query("DELETE FROM reservations WHERE id = ?")
        .bind(&id)
        .execute(pool.get_ref())
        .await
    {
        Ok(result) if result.rows_affected() == 0 => {
            HttpResponse::NotFound().json(ErrorResponse::new("Reservation not found"))
        }
        Ok(_) => {
            log::info!("Reservation deleted: {id}");
            HttpResponse::Ok().json(serde_json::json!({ "message": "Reservation deleted" }))
        }
        Err(e) => {
            log::error!("Failed to delete reservation {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to delete reservation"))
        }
    }
}

pub async fn update_reservation_status(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    body: web::Json<UpdateStatus>,
) -> impl Responder {
    let id = path.into_inner();

    let status = match body.status.parse::<ReservationStatus>() {
        Ok(status) => status,
        Err(e) => return HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())),
    };

    let updated = sqlx::query("UPDATE reservations SET status = ? WHERE id = ?")
        .bind(status)
        .bind(&id)
        .execute(pool.get_ref())
        .await;

    match updated {
        Ok(result) if result.rows_affected() == 0 => {
            return HttpResponse::NotFound().json(ErrorResponse::new("Reservation not found"))
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("Failed to update reservation {id}: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to update reservation"));
        }
    }

    match sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = ?")
        .bind(&id)
        .fetch_one(pool.get_ref())
        .await
    {
        Ok(reservation) => {
            log::info!("Reservation {id} status updated to {status}");
            HttpResponse::Ok().json(reservation)
        }
        Err(e) => {
            log::error!("Error fetching reservation {id} after update: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Database error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::new_reservation_id;

    #[test]
    fn reservation_id_format() {
        let id = new_reservation_id();
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts[0], "RES");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn reservation_ids_are_unique() {
        let a = new_reservation_id();
        let b = new_reservation_id();
        assert_ne!(a, b);
    }
}
