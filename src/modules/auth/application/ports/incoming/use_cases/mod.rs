mod assign_user_group;
mod create_user;
mod fetch_profile;
mod login_user;
mod refresh_token;
mod register_user;
mod user_input;

pub use assign_user_group::{AssignUserGroupError, AssignUserGroupUseCase};
pub use create_user::{CreateUserCommand, CreateUserError, CreateUserUseCase};
pub use fetch_profile::{FetchProfileError, FetchProfileUseCase, UserProfile};
pub use login_user::{
    LoginCommand, LoginCommandError, LoginError, LoginResult, LoginUserInfo, LoginUserUseCase,
};
pub use refresh_token::{RefreshTokenError, RefreshTokenResult, RefreshTokenUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase};
pub use user_input::UserInputError;
