use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::{serialized_fields, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
}

impl ExamStatus {
    pub const ALL: [ExamStatus; 4] = [
        ExamStatus::Draft,
        ExamStatus::PendingApproval,
        ExamStatus::Approved,
        ExamStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamStatus::Draft => "draft",
            ExamStatus::PendingApproval => "pending_approval",
            ExamStatus::Approved => "approved",
            ExamStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExamStatus::Draft => "Draft",
            ExamStatus::PendingApproval => "Pending approval",
            ExamStatus::Approved => "Approved",
            ExamStatus::Rejected => "Rejected",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub course: String,
    pub teacher: String,
    pub scheduled_on: NaiveDate,
    pub status: ExamStatus,
    #[serde(default)]
    pub question_count: u32,
}

impl Record for Exam {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn search_fields(&self) -> Vec<String> {
        let mut fields = serialized_fields(self);
        fields.push(self.status.to_string());
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    ShortAnswer,
    Essay,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::MultipleChoice,
        QuestionKind::ShortAnswer,
        QuestionKind::Essay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::ShortAnswer => "short_answer",
            QuestionKind::Essay => "essay",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionKind::MultipleChoice => "Multiple choice",
            QuestionKind::ShortAnswer => "Short answer",
            QuestionKind::Essay => "Essay",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Pending,
    Approved,
    Rejected,
}

impl QuestionStatus {
    pub const ALL: [QuestionStatus; 3] = [
        QuestionStatus::Pending,
        QuestionStatus::Approved,
        QuestionStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Pending => "pending",
            QuestionStatus::Approved => "approved",
            QuestionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionStatus::Pending => "Pending",
            QuestionStatus::Approved => "Approved",
            QuestionStatus::Rejected => "Rejected",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("question {id} is already {status}")]
pub struct ApprovalError {
    pub id: String,
    pub status: QuestionStatus,
}

/// An exam question awaiting admin review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub exam_id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub points: u32,
    pub status: QuestionStatus,
}

impl Question {
    pub fn approve(&mut self) -> Result<(), ApprovalError> {
        self.review(QuestionStatus::Approved)
    }

    pub fn reject(&mut self) -> Result<(), ApprovalError> {
        self.review(QuestionStatus::Rejected)
    }

    /// Only pending questions can be reviewed.
    fn review(&mut self, outcome: QuestionStatus) -> Result<(), ApprovalError> {
        if self.status != QuestionStatus::Pending {
            return Err(ApprovalError {
                id: self.id.clone(),
                status: self.status,
            });
        }
        self.status = outcome;
        Ok(())
    }
}

impl Record for Question {
    fn key(&self) -> String {
        self.id.clone()
    }

    /// Adds the kind and status labels shown in the table.
    fn search_fields(&self) -> Vec<String> {
        let mut fields = serialized_fields(self);
        fields.push(self.kind.to_string());
        fields.push(self.status.to_string());
        fields
    }
}
