use crate::models::command::Command;

pub mod user;

pub fn get_command_list() -> Vec<Box<dyn Command>> {
    user::get_user_commands()
}
