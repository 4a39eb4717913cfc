// Messages received from the gateway

pub mod models;
pub mod services;

pub use models::{
    AccessTokenResponse, ErrorResponse, MerchantOrderResult, MerchantOrderStatusResponse,
    Notification, OrderAnnounceResponse, OrderStatus, ReturnParameters,
};
pub use services::verify_message;
