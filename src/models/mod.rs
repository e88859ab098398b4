pub mod app_state;
pub mod cart;
pub mod current_user;
pub mod flash;
pub mod product;

pub use app_state::AppState;
pub use cart::{Cart, CartItem};
pub use current_user::CurrentUser;
pub use flash::{Flash, Severity};
pub use product::{find_product, Product, PRODUCTS};
