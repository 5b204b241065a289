pub mod cookie_set;
pub mod email;
pub mod user_id;

pub use cookie_set::CookieSet;
pub use email::Email;
pub use user_id::UserId;
