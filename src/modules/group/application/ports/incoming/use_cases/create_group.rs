use async_trait::async_trait;

use crate::group::application::ports::outgoing::GroupView;

pub const MAX_GROUP_NAME_LENGTH: usize = 100;
pub const MAX_GROUP_CODE_LENGTH: usize = 32;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateGroupCommand {
    name: String,
    code: String,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateGroupCommandError {
    #[error("Group name cannot be empty")]
    EmptyName,

    #[error("Group name must not exceed 100 characters")]
    NameTooLong,

    #[error("Group code cannot be empty")]
    EmptyCode,

    #[error("Group code must not exceed 32 characters")]
    CodeTooLong,

    #[error("Group code may only contain A-Z, 0-9, '-' and '_'")]
    InvalidCode,
}

impl CreateGroupCommand {
    pub fn new(
        name: String,
        code: String,
        description: Option<String>,
    ) -> Result<Self, CreateGroupCommandError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CreateGroupCommandError::EmptyName);
        }
        if name.chars().count() > MAX_GROUP_NAME_LENGTH {
            return Err(CreateGroupCommandError::NameTooLong);
        }

        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(CreateGroupCommandError::EmptyCode);
        }
        if code.chars().count() > MAX_GROUP_CODE_LENGTH {
            return Err(CreateGroupCommandError::CodeTooLong);
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(CreateGroupCommandError::InvalidCode);
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            name,
            code,
            description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateGroupError {
    #[error("Group code already exists")]
    CodeAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateGroupUseCase: Send + Sync {
    async fn execute(&self, command: CreateGroupCommand) -> Result<GroupView, CreateGroupError>;
}
