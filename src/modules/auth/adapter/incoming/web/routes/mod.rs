pub mod assign_user_group;
pub mod create_user;
pub mod fetch_profile;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;

pub use assign_user_group::*;
pub use create_user::*;
pub use fetch_profile::*;
pub use login_user::*;
pub use refresh_token::*;
pub use register_user::*;
