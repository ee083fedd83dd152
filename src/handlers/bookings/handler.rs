//! Booking handler implementations

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::BookingService,
    state::AppState,
};

use super::{
    request::{CreateBookingRequest, SearchBookingsQuery},
    response::{
        BookingResponse, CreateBookingResponse, OwnerBookingResponse, SearchBookingResponse,
    },
};

/// List the authenticated user's bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let bookings = BookingService::list_for_user(state.db(), auth_user.id).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

/// Create a booking
pub async fn create_booking(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<CreateBookingResponse>> {
    payload.validate()?;

    let time_slots = payload.time_slots.clone();
    let (booking, facility_name) =
        BookingService::create(state.db(), auth_user.id, payload).await?;

    Ok(Json(CreateBookingResponse {
        message: "Đặt sân thành công!".to_string(),
        booking_id: booking.id,
        facility_name,
        total_price: booking.total_price,
        booking_date: booking.booking_date,
        time_slots,
    }))
}

/// Public search: bookings for a facility on a date
pub async fn search_bookings(
    State(state): State<AppState>,
    Query(query): Query<SearchBookingsQuery>,
) -> AppResult<Json<Vec<SearchBookingResponse>>> {
    let bookings = BookingService::search(
        state.db(),
        query.facility_id,
        query.date,
        query.sport_type.as_deref(),
    )
    .await?;

    Ok(Json(
        bookings.into_iter().map(SearchBookingResponse::from).collect(),
    ))
}

/// Bookings on the caller's facilities (host dashboard)
pub async fn list_owner_bookings(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<OwnerBookingResponse>>> {
    let rows = BookingService::list_for_owner(state.db(), auth_user.id).await?;
    Ok(Json(rows.into_iter().map(OwnerBookingResponse::from).collect()))
}
