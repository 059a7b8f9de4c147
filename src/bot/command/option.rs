//! Typed access to slash command options by name.

use serenity::all::{CommandDataOption, CommandDataOptionValue};

use crate::error::AppError;

pub struct CommandOptions<'a> {
    options: &'a [CommandDataOption],
}

impl<'a> CommandOptions<'a> {
    pub fn new(options: &'a [CommandDataOption]) -> Self {
        Self { options }
    }

    fn value(&self, name: &str) -> Result<&'a CommandDataOptionValue, AppError> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
            .ok_or_else(|| AppError::MissingOption(name.to_string()))
    }

    pub fn string(&self, name: &str) -> Result<&'a str, AppError> {
        match self.value(name)? {
            CommandDataOptionValue::String(value) => Ok(value.as_str()),
            _ => Err(AppError::MissingOption(name.to_string())),
        }
    }

    pub fn integer(&self, name: &str) -> Result<i64, AppError> {
        match self.value(name)? {
            CommandDataOptionValue::Integer(value) => Ok(*value),
            _ => Err(AppError::MissingOption(name.to_string())),
        }
    }

    /// Role option as a raw role id.
    pub fn role(&self, name: &str) -> Result<u64, AppError> {
        match self.value(name)? {
            CommandDataOptionValue::Role(role_id) => Ok(role_id.get()),
            _ => Err(AppError::MissingOption(name.to_string())),
        }
    }
}
