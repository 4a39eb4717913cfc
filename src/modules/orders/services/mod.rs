pub mod data_helper;
pub mod order_factory;
pub mod payment_brands;
pub mod product_categories;

pub use data_helper::DataHelper;
pub use order_factory::OrderFactory;
pub use payment_brands::PaymentBrands;
pub use product_categories::ProductCategories;
