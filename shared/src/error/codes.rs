//! Error codes for DineDash
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Restaurant / menu errors
//! - 4xxx: Order / cart errors
//! - 6xxx: Reservation errors
//! - 9xxx: System errors

use std::fmt;

/// Error code enum, shown as `E0000` in logs and CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 3001,
    /// Menu item is not available
    MenuItemUnavailable = 3003,

    // ==================== 4xxx: Order ====================
    /// Cart is empty
    CartEmpty = 4002,
    /// Delivery address or phone missing
    DeliveryDetailsMissing = 4004,

    // ==================== 6xxx: Reservation ====================
    /// Not enough seats for the slot
    NoSeatsAvailable = 6002,
    /// Availability has not been confirmed for the slot
    AvailabilityNotChecked = 6003,
    /// Date and time are required
    ReservationSlotRequired = 6004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Request timed out
    TimeoutError = 9003,
    /// Local storage error
    StorageError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Unexpected response body
    InvalidResponse = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the English message shown for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Restaurant
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::MenuItemUnavailable => "Menu item is not available",

            // Order
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::DeliveryDetailsMissing => "Please fill in delivery details",

            // Reservation
            ErrorCode::NoSeatsAvailable => "No seats available for this slot",
            ErrorCode::AvailabilityNotChecked => "Please check availability first",
            ErrorCode::ReservationSlotRequired => "Please select date and time",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
            ErrorCode::StorageError => "Local storage error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::InvalidResponse => "Unexpected response from server",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
