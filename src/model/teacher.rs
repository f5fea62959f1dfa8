use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::{serialized_fields, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeacherStatus {
    Active,
    OnLeave,
    Inactive,
}

impl TeacherStatus {
    pub const ALL: [TeacherStatus; 3] = [
        TeacherStatus::Active,
        TeacherStatus::OnLeave,
        TeacherStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeacherStatus::Active => "active",
            TeacherStatus::OnLeave => "on_leave",
            TeacherStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for TeacherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TeacherStatus::Active => "Active",
            TeacherStatus::OnLeave => "On leave",
            TeacherStatus::Inactive => "Inactive",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub hired_on: NaiveDate,
    pub status: TeacherStatus,
}

impl Record for Teacher {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<String> {
        let mut fields = serialized_fields(self);
        fields.push(self.status.to_string());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_and_optional_phone() {
        let t: Teacher = serde_json::from_str(
            r#"{"id":"t1","name":"Grace","email":"g@school.test","subject":"Physics",
                "hired_on":"2019-08-26","status":"on_leave"}"#,
        )
        .unwrap();
        assert_eq!(t.hired_on, NaiveDate::from_ymd_opt(2019, 8, 26).unwrap());
        assert_eq!(t.phone, None);
        assert_eq!(t.status.to_string(), "On leave");
    }

    #[test]
    fn search_fields_include_status_and_date() {
        let t = Teacher {
            id: "t2".into(),
            name: "Alan".into(),
            email: "a@school.test".into(),
            subject: "Computing".into(),
            phone: None,
            hired_on: NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
            status: TeacherStatus::Active,
        };
        let fields = t.search_fields();
        assert!(fields.contains(&"2021-01-04".to_string()));
        assert!(fields.contains(&"active".to_string()));
        assert!(fields.contains(&"Active".to_string()));
    }
}
