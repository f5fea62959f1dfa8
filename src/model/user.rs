use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::{serialized_fields, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Teacher,
    Accountant,
    Student,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Teacher, Role::Accountant, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Accountant => "accountant",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Accountant => "Accountant",
            Role::Student => "Student",
        };
        f.write_str(label)
    }
}

/// A portal login account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Record for SystemUser {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<String> {
        let mut fields = serialized_fields(self);
        fields.push(self.role.to_string());
        fields
    }
}
