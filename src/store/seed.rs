use std::path::Path;

use chrono::{NaiveDate, TimeDelta};
use tracing::info;

use super::{Store, StoreError};
use crate::model::{
    Exam, ExamStatus, Invoice, InvoiceStatus, LineItem, Question, QuestionKind, QuestionStatus,
    Role, SystemUser, Teacher, TeacherStatus,
};

const FIRST_NAMES: [&str; 12] = [
    "Amy", "Bob", "Chen", "Dara", "Eli", "Fatima", "Grace", "Hugo", "Ines", "Jonas", "Kemi",
    "Liam",
];
const LAST_NAMES: [&str; 8] = [
    "Parker", "Okafor", "Nakamura", "Silva", "Novak", "Haddad", "Larsen", "Mensah",
];
const SUBJECTS: [&str; 6] = [
    "Mathematics",
    "Physics",
    "Biology",
    "History",
    "Literature",
    "Computing",
];

const INVOICE_COUNT: usize = 23;
const QUESTIONS_PER_EXAM: usize = 4;

fn day(offset: i64) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default();
    base + TimeDelta::days(offset)
}

fn full_name(i: usize) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[i % FIRST_NAMES.len()],
        LAST_NAMES[(i * 3) % LAST_NAMES.len()]
    )
}

fn email(name: &str) -> String {
    format!("{}@school.test", name.to_lowercase().replace(' ', "."))
}

pub fn sample_store() -> Store {
    let users = (0..14)
        .map(|i| {
            let name = full_name(i);
            SystemUser {
                id: format!("u{:03}", i + 1),
                email: email(&name),
                name,
                role: Role::ALL[i % Role::ALL.len()],
                active: i % 5 != 4,
            }
        })
        .collect();

    let teachers: Vec<Teacher> = (0..9)
        .map(|i| {
            let name = full_name(i + 3);
            Teacher {
                id: format!("t{:03}", i + 1),
                email: email(&name),
                name,
                subject: SUBJECTS[i % SUBJECTS.len()].to_string(),
                phone: (i % 3 != 2).then(|| format!("+1 555 01{:02}", i)),
                hired_on: day(-(i as i64) * 211),
                status: TeacherStatus::ALL[(i * 2) % TeacherStatus::ALL.len()],
            }
        })
        .collect();

    let invoices = (0..INVOICE_COUNT)
        .map(|i| {
            let mut items = vec![LineItem {
                description: "Tuition".into(),
                quantity: 1,
                unit_price_cents: 125_000 + (i as i64 % 4) * 10_000,
            }];
            if i % 3 == 0 {
                items.push(LineItem {
                    description: "Lab materials".into(),
                    quantity: 2 + i as u32 % 3,
                    unit_price_cents: 1_850,
                });
            }
            if i % 4 == 1 {
                items.push(LineItem {
                    description: "School trip".into(),
                    quantity: 1,
                    unit_price_cents: 7_500,
                });
            }
            Invoice {
                id: format!("i{:03}", i + 1),
                number: format!("INV-2026-{:04}", i + 1),
                customer: format!("{} family", LAST_NAMES[i % LAST_NAMES.len()]),
                issued_on: day(i as i64 * 3),
                due_on: day(i as i64 * 3 + 30),
                status: InvoiceStatus::ALL[i % InvoiceStatus::ALL.len()],
                items,
                tax_rate_bps: if i % 2 == 0 { 825 } else { 0 },
                discount_cents: if i % 5 == 0 { 5_000 } else { 0 },
            }
        })
        .collect();

    let exams: Vec<Exam> = (0..7)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            Exam {
                id: format!("e{:03}", i + 1),
                title: format!("{} midterm", subject),
                course: subject.to_string(),
                teacher: teachers[i % teachers.len()].name.clone(),
                scheduled_on: day(40 + i as i64 * 5),
                status: ExamStatus::ALL[i % ExamStatus::ALL.len()],
                question_count: QUESTIONS_PER_EXAM as u32,
            }
        })
        .collect();

    let questions = exams
        .iter()
        .enumerate()
        .flat_map(|(e, exam)| {
            (0..QUESTIONS_PER_EXAM).map(move |q| {
                let n = e * QUESTIONS_PER_EXAM + q;
                let kind = QuestionKind::ALL[n % QuestionKind::ALL.len()];
                Question {
                    id: format!("q{:03}", n + 1),
                    exam_id: exam.id.clone(),
                    prompt: format!("{} question {}: {}", exam.course, q + 1, prompt_for(kind)),
                    kind,
                    points: match kind {
                        QuestionKind::MultipleChoice => 2,
                        QuestionKind::ShortAnswer => 5,
                        QuestionKind::Essay => 15,
                    },
                    status: if n % 3 == 0 {
                        QuestionStatus::ALL[(n / 3) % QuestionStatus::ALL.len()]
                    } else {
                        QuestionStatus::Pending
                    },
                }
            })
        })
        .collect();

    Store {
        users,
        teachers,
        invoices,
        exams,
        questions,
        ..Store::default()
    }
}

fn prompt_for(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::MultipleChoice => "pick the correct statement",
        QuestionKind::ShortAnswer => "define the key term in one sentence",
        QuestionKind::Essay => "discuss the main causes and effects",
    }
}

/// Write the sample store to `path`, refusing to overwrite unless `force`.
pub async fn write_sample(path: &Path, force: bool) -> Result<Store, StoreError> {
    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    if exists && !force {
        return Err(StoreError::AlreadyExists(path.to_path_buf()));
    }

    let store = sample_store();
    store.save(path).await?;
    info!(path = %path.display(), force, "sample store written");
    Ok(store)
}
