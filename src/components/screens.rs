use std::fmt::Display;

use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::Line;

use crate::model::{
    format_cents, Exam, ExamStatus, Invoice, InvoiceStatus, Question, QuestionKind,
    QuestionStatus, Role, SystemUser, Teacher, TeacherStatus,
};
use crate::table::{Column, DataTable, FilterDescriptor, FilterOption, TableError};
use crate::ui::theme::Theme;

const DATE_WIDTH: Constraint = Constraint::Length(12);

fn badge(text: impl Display, style: Style) -> Line<'static> {
    Line::styled(text.to_string(), style)
}

fn options<E: Copy + Display>(all: &[E], value: impl Fn(E) -> &'static str) -> Vec<FilterOption> {
    all.iter()
        .map(|&e| FilterOption::new(e.to_string(), value(e)))
        .collect()
}

fn yes_no() -> Vec<FilterOption> {
    vec![FilterOption::new("Yes", "yes"), FilterOption::new("No", "no")]
}

fn yes_no_matches(flag: bool, value: &str) -> bool {
    (value == "yes") == flag
}

pub fn users_table(page_size: usize) -> Result<DataTable<SystemUser>, TableError> {
    let columns = vec![
        Column::new("name", "Name", |u: &SystemUser| u.name.clone())
            .sort_by_key(|u| u.name.to_lowercase()),
        Column::new("email", "Email", |u: &SystemUser| u.email.clone())
            .sort_by_key(|u| u.email.clone()),
        Column::new("role", "Role", |u: &SystemUser| u.role.to_string())
            .cell(|u| {
                let style = match u.role {
                    Role::Admin => Theme::badge_bad(),
                    Role::Teacher => Theme::badge_good(),
                    Role::Accountant => Theme::badge_warn(),
                    Role::Student => Theme::badge_neutral(),
                };
                badge(u.role, style)
            })
            .sort_by_key(|u| u.role)
            .width(Constraint::Length(12)),
        Column::new("active", "Active", |u: &SystemUser| {
            let label = if u.active { "Yes" } else { "No" };
            label.to_string()
        })
        .sort_by_key(|u| u.active)
        .width(Constraint::Length(8)),
    ];

    let filters = vec![
        FilterDescriptor::new(
            "role",
            "Role",
            options(&Role::ALL, |r| r.as_str()),
            |u: &SystemUser, v| u.role.as_str() == v,
        )?,
        FilterDescriptor::new("active", "Active", yes_no(), |u: &SystemUser, v| {
            yes_no_matches(u.active, v)
        })?,
    ];

    Ok(DataTable::new("Users", columns)
        .with_filters(filters)
        .with_pagination(page_size)
        .search_placeholder("Search users")
        .with_actions(vec![("Enter", "details")]))
}

pub fn teachers_table(page_size: usize) -> Result<DataTable<Teacher>, TableError> {
    let columns = vec![
        Column::new("name", "Name", |t: &Teacher| t.name.clone())
            .sort_by_key(|t| t.name.to_lowercase()),
        Column::new("subject", "Subject", |t: &Teacher| t.subject.clone())
            .sort_by_key(|t| t.subject.clone()),
        Column::new("email", "Email", |t: &Teacher| t.email.clone()),
        Column::new("phone", "Phone", |t: &Teacher| {
            t.phone.clone().unwrap_or_else(|| "—".to_string())
        })
        .width(Constraint::Length(14)),
        Column::new("hired_on", "Hired", |t: &Teacher| t.hired_on.to_string())
            .sort_by_key(|t| t.hired_on)
            .width(DATE_WIDTH),
        Column::new("status", "Status", |t: &Teacher| t.status.to_string())
            .cell(|t| {
                let style = match t.status {
                    TeacherStatus::Active => Theme::badge_good(),
                    TeacherStatus::OnLeave => Theme::badge_warn(),
                    TeacherStatus::Inactive => Theme::badge_neutral(),
                };
                badge(t.status, style)
            })
            .sort_by_key(|t| t.status)
            .width(Constraint::Length(10)),
    ];

    let filters = vec![
        FilterDescriptor::new(
            "status",
            "Status",
            options(&TeacherStatus::ALL, |s| s.as_str()),
            |t: &Teacher, v| t.status.as_str() == v,
        )?,
        FilterDescriptor::new("phone", "Phone", yes_no(), |t: &Teacher, v| {
            yes_no_matches(t.phone.is_some(), v)
        })?,
    ];

    Ok(DataTable::new("Teachers", columns)
        .with_filters(filters)
        .with_pagination(page_size)
        .search_placeholder("Search teachers")
        .with_actions(vec![("Enter", "details")]))
}

pub fn invoices_table(page_size: usize) -> Result<DataTable<Invoice>, TableError> {
    let columns = vec![
        Column::new("number", "Invoice", |i: &Invoice| i.number.clone())
            .sort_by_key(|i| i.number.clone())
            .width(Constraint::Length(15)),
        Column::new("customer", "Customer", |i: &Invoice| i.customer.clone())
            .sort_by_key(|i| i.customer.to_lowercase()),
        Column::new("issued_on", "Issued", |i: &Invoice| i.issued_on.to_string())
            .sort_by_key(|i| i.issued_on)
            .width(DATE_WIDTH),
        Column::new("due_on", "Due", |i: &Invoice| i.due_on.to_string())
            .sort_by_key(|i| i.due_on)
            .width(DATE_WIDTH),
        Column::new("status", "Status", |i: &Invoice| i.status.to_string())
            .cell(|i| {
                let style = match i.status {
                    InvoiceStatus::Paid => Theme::badge_good(),
                    InvoiceStatus::Sent => Theme::badge_warn(),
                    InvoiceStatus::Overdue => Theme::badge_bad(),
                    InvoiceStatus::Draft => Theme::badge_neutral(),
                };
                badge(i.status, style)
            })
            .sort_by_key(|i| i.status)
            .width(Constraint::Length(9)),
        Column::new("total", "Total", |i: &Invoice| format_cents(i.total_cents()))
            .cell(|i| Line::raw(format_cents(i.total_cents())).right_aligned())
            .sort_by_key(|i| i.total_cents())
            .width(Constraint::Length(14)),
    ];

    let filters = vec![FilterDescriptor::new(
        "status",
        "Status",
        options(&InvoiceStatus::ALL, |s| s.as_str()),
        |i: &Invoice, v| i.status.as_str() == v,
    )?];

    Ok(DataTable::new("Invoices", columns)
        .with_filters(filters)
        .with_pagination(page_size)
        .search_placeholder("Search invoices")
        .with_actions(vec![("Enter", "details")]))
}

fn exam_status_style(status: ExamStatus) -> Style {
    match status {
        ExamStatus::Approved => Theme::badge_good(),
        ExamStatus::PendingApproval => Theme::badge_warn(),
        ExamStatus::Rejected => Theme::badge_bad(),
        ExamStatus::Draft => Theme::badge_neutral(),
    }
}

pub fn exams_table(page_size: usize) -> Result<DataTable<Exam>, TableError> {
    let columns = vec![
        Column::new("title", "Title", |e: &Exam| e.title.clone())
            .sort_by_key(|e| e.title.to_lowercase()),
        Column::new("course", "Course", |e: &Exam| e.course.clone())
            .sort_by_key(|e| e.course.clone()),
        Column::new("teacher", "Teacher", |e: &Exam| e.teacher.clone())
            .sort_by_key(|e| e.teacher.clone()),
        Column::new("scheduled_on", "Date", |e: &Exam| e.scheduled_on.to_string())
            .sort_by_key(|e| e.scheduled_on)
            .width(DATE_WIDTH),
        Column::new("question_count", "Qs", |e: &Exam| e.question_count.to_string())
            .sort_by_key(|e| e.question_count)
            .width(Constraint::Length(5)),
        Column::new("status", "Status", |e: &Exam| e.status.to_string())
            .cell(|e| badge(e.status, exam_status_style(e.status)))
            .sort_by_key(|e| e.status)
            .width(Constraint::Length(18)),
    ];

    let filters = vec![FilterDescriptor::new(
        "status",
        "Status",
        options(&ExamStatus::ALL, |s| s.as_str()),
        |e: &Exam, v| e.status.as_str() == v,
    )?];

    Ok(DataTable::new("Exams", columns)
        .with_filters(filters)
        .with_pagination(page_size)
        .search_placeholder("Search exams")
        .with_actions(vec![("Enter", "details")]))
}

pub fn questions_table(page_size: usize) -> Result<DataTable<Question>, TableError> {
    let columns = vec![
        Column::new("exam_id", "Exam", |q: &Question| q.exam_id.clone())
            .sort_by_key(|q| q.exam_id.clone())
            .width(Constraint::Length(6)),
        Column::new("prompt", "Prompt", |q: &Question| q.prompt.clone()),
        Column::new("kind", "Kind", |q: &Question| q.kind.to_string())
            .sort_by_key(|q| q.kind)
            .width(Constraint::Length(16)),
        Column::new("points", "Pts", |q: &Question| q.points.to_string())
            .sort_by_key(|q| q.points)
            .width(Constraint::Length(5)),
        Column::new("status", "Status", |q: &Question| q.status.to_string())
            .cell(|q| {
                let style = match q.status {
                    QuestionStatus::Approved => Theme::badge_good(),
                    QuestionStatus::Pending => Theme::badge_warn(),
                    QuestionStatus::Rejected => Theme::badge_bad(),
                };
                badge(q.status, style)
            })
            .sort_by_key(|q| q.status)
            .width(Constraint::Length(10)),
    ];

    let filters = vec![
        FilterDescriptor::new(
            "status",
            "Status",
            options(&QuestionStatus::ALL, |s| s.as_str()),
            |q: &Question, v| q.status.as_str() == v,
        )?,
        FilterDescriptor::new(
            "kind",
            "Kind",
            options(&QuestionKind::ALL, |k| k.as_str()),
            |q: &Question, v| q.kind.as_str() == v,
        )?,
    ];

    Ok(DataTable::new("Question approvals", columns)
        .with_filters(filters)
        .with_pagination(page_size)
        .search_placeholder("Search questions")
        .with_actions(vec![("a", "approve"), ("x", "reject"), ("Enter", "details")]))
}
