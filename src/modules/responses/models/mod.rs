pub mod announcement;
pub mod notification;
pub mod order_status;
pub mod return_parameters;

pub use announcement::{AccessTokenResponse, ErrorResponse, OrderAnnounceResponse};
pub use notification::Notification;
pub use order_status::{MerchantOrderResult, MerchantOrderStatusResponse, OrderStatus};
pub use return_parameters::ReturnParameters;
