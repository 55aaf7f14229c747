//! Reservation endpoints

use shared::client::{MessageResponse, StatusUpdate};
use shared::models::{Availability, Reservation, ReservationCreate, ReservationStatus};

use crate::client::common::api_path;
use crate::{ClientResult, DineDashClient, HttpClient, path_with_query};

impl<H: HttpClient> DineDashClient<H> {
    /// `GET /restaurants/{id}/availability?date&time`
    pub async fn check_availability(
        &self,
        restaurant_id: &str,
        date: &str,
        time: &str,
    ) -> ClientResult<Availability> {
        let path = path_with_query(
            &api_path(&format!("/restaurants/{}/availability", restaurant_id)),
            &[("date", date.to_string()), ("time", time.to_string())],
        )?;
        self.http.get(&path).await
    }

    /// `POST /reservations`
    pub async fn create_reservation(&self, data: &ReservationCreate) -> ClientResult<Reservation> {
        self.http.post(&api_path("/reservations"), data).await
    }

    /// `GET /reservations` - the caller's reservations
    pub async fn list_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.http.get(&api_path("/reservations")).await
    }

    /// `GET /reservations/{id}`
    pub async fn get_reservation(&self, reservation_id: &str) -> ClientResult<Reservation> {
        self.http
            .get(&api_path(&format!("/reservations/{}", reservation_id)))
            .await
    }

    /// `PUT /reservations/{id}/status` (restaurant owner)
    pub async fn update_reservation_status(
        &self,
        reservation_id: &str,
        status: &ReservationStatus,
    ) -> ClientResult<MessageResponse> {
        let body = StatusUpdate {
            status: status.clone(),
        };
        self.http
            .put(
                &api_path(&format!("/reservations/{}/status", reservation_id)),
                &body,
            )
            .await
    }

    /// `GET /restaurant/reservations` - reservations of the caller's restaurants
    pub async fn restaurant_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.http.get(&api_path("/restaurant/reservations")).await
    }
}
