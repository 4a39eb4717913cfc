// Orders module

pub mod models;
pub mod services;

pub use models::{
    Address, CustomerInformation, LineItemType, Order, OrderItem, OrderItems, OrderRequest,
    PaymentBrand, PaymentBrandForce, PaymentMethod, ProductCategory, VatCategory,
};
pub use services::{DataHelper, OrderFactory, PaymentBrands, ProductCategories};
