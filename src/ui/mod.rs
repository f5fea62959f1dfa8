pub mod layout;
pub mod theme;

/// Which tab is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Tab {
    Users,
    Teachers,
    Invoices,
    Exams,
    Questions,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Users,
        Tab::Teachers,
        Tab::Invoices,
        Tab::Exams,
        Tab::Questions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Users => "1:Users",
            Tab::Teachers => "2:Teachers",
            Tab::Invoices => "3:Invoices",
            Tab::Exams => "4:Exams",
            Tab::Questions => "5:Questions",
        }
    }

    pub fn from_index(i: usize) -> Option<Tab> {
        Tab::ALL.get(i).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Users => 0,
            Tab::Teachers => 1,
            Tab::Invoices => 2,
            Tab::Exams => 3,
            Tab::Questions => 4,
        }
    }
}
