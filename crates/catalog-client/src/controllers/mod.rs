//! View Controllers
//!
//! Each view owns one controller. Controllers never perform I/O themselves:
//! an operation returns the request to send, and the response is handed back
//! through an `apply_*` method. This keeps them usable from reactive UI code
//! without holding a borrow across an await.

mod login;
mod product_form;
mod product_list;
mod register;


pub use login::{LoginController, LoginField};
pub use product_form::{FormMode, LoadRequest, ProductField, ProductFormController, SaveRequest};
pub use product_list::{ListStatus, PageRequest, PageUpdate, ProductListController, DEFAULT_PAGE_SIZE};
pub use register::{Redirect, RegisterController, RegisterField, REDIRECT_DELAY};
