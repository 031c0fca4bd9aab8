pub mod home;
pub mod products;

pub use home::home_page;
pub use products::{products_page, ProductsVm};
