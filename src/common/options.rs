use serenity::all::{ResolvedOption, ResolvedValue, Role, User};

#[derive(Debug, Clone)]
pub struct Options<'a> {
    pub options: Vec<ResolvedOption<'a>>,
}

impl<'a> Options<'a> {
    fn find(&self, name: &str) -> Option<&ResolvedValue<'a>> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn get_user(&self, name: &str) -> Option<User> {
        match self.find(name) {
            Some(ResolvedValue::User(user, _)) => Some((*user).clone()),
            _ => None,
        }
    }

    pub fn get_role(&self, name: &str) -> Option<Role> {
        match self.find(name) {
            Some(ResolvedValue::Role(role)) => Some((*role).clone()),
            _ => None,
        }
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        match self.find(name) {
            Some(ResolvedValue::String(string)) => Some((*string).to_string()),
            _ => None,
        }
    }

    pub fn get_integer(&self, name: &str) -> Option<i64> {
        match self.find(name) {
            Some(ResolvedValue::Integer(integer)) => Some(*integer),
            _ => None,
        }
    }
}
