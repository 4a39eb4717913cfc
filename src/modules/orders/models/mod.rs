pub mod address;
pub mod customer_information;
pub mod order;
pub mod order_item;
pub mod payment_brand;
pub mod product_category;

pub use address::Address;
pub use customer_information::CustomerInformation;
pub use order::{Order, OrderRequest};
pub use order_item::{OrderItem, OrderItems};
pub use payment_brand::{PaymentBrand, PaymentBrandForce, PaymentMethod};
pub use product_category::{LineItemType, ProductCategory, VatCategory};
