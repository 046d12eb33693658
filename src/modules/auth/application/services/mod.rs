mod assign_user_group;
mod create_user;
mod fetch_profile;
mod login_user;
mod refresh_token;
mod register_user;

pub use assign_user_group::AssignUserGroupService;
pub use create_user::CreateUserService;
pub use fetch_profile::FetchProfileService;
pub use login_user::LoginUserService;
pub use refresh_token::RefreshTokenService;
pub use register_user::RegisterUserService;
