mod current_user_resolver;

pub use current_user_resolver::{CurrentUserResolver, ResolveCurrentUserError};
