//! UI Components
//!
//! One component per view, plus the small pieces they share.

mod delete_confirm_button;
mod log_panel;
mod login_form;
mod navbar;
mod pagination_bar;
mod product_form;
mod product_list;
mod register_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use log_panel::LogPanel;
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use pagination_bar::PaginationBar;
pub use product_form::ProductForm;
pub use product_list::ProductList;
pub use register_form::RegisterForm;
