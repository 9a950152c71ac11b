pub mod session;

pub use session::{session_form, CheckoutClient};
