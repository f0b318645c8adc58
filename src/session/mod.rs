//! Interactive expense tracking session
//!
//! Asks for an initial batch of expenses, then runs the main menu until the
//! user saves and exits. All state lives in the session's [`AppState`].

pub mod collector;
pub mod console;
pub mod menu;
pub mod selector;

pub use collector::{collect_expense, ExpenseInput};
pub use console::Console;
pub use menu::MenuOption;

use std::io::{BufRead, Write};

use chrono::Local;
use serde_json::json;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::export::Exporter;
use crate::opener::{describe_outcome, FolderOpener};
use crate::reports::{CategoryTotalsReport, ExpenseListReport, GrandTotalReport};
use crate::storage::{AppState, Recorded};

/// One run of the tracker over a console
pub struct Session<R, W> {
    console: Console<R, W>,
    state: AppState,
    exporter: Exporter,
    opener: Option<Box<dyn FolderOpener>>,
    audit: Option<AuditLogger>,
    currency_symbol: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session that reads from `input`, writes to `output` and
    /// saves through `exporter`
    pub fn new(input: R, output: W, exporter: Exporter) -> Self {
        Self {
            console: Console::new(input, output),
            state: AppState::new(),
            exporter,
            opener: None,
            audit: None,
            currency_symbol: "$".to_string(),
        }
    }

    /// Show the export folder after saving
    pub fn with_opener(mut self, opener: Box<dyn FolderOpener>) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Record changes in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run until the user chooses "Exit and save"
    pub fn run(&mut self) -> TrackerResult<()> {
        let count = self
            .console
            .prompt_positive_int("How many expenses would you like to add to your list? ")?;

        for i in 1..=count {
            let force_new_category = i == 1 && self.state.categories.is_empty();
            self.add_expense(i, force_new_category)?;
        }

        loop {
            self.print_menu()?;
            let answer = self.console.prompt("Choose an option (1-5): ")?;

            match MenuOption::parse(&answer) {
                Some(MenuOption::AddExpenses) => {
                    let count = self
                        .console
                        .prompt_positive_int("How many more expenses would you like to add? ")?;
                    for i in 1..=count {
                        self.add_expense(i, false)?;
                    }
                }
                Some(MenuOption::ViewExpenses) => {
                    let report = ExpenseListReport::generate(&self.state.expenses);
                    self.print_report(&report.format_terminal(&self.currency_symbol))?;
                }
                Some(MenuOption::ViewCategoryTotals) => {
                    let report = CategoryTotalsReport::generate(&self.state.expenses);
                    self.print_report(&report.format_terminal(&self.currency_symbol))?;
                }
                Some(MenuOption::ViewGrandTotal) => {
                    let report = GrandTotalReport::generate(&self.state.expenses);
                    self.print_report(&report.format_terminal(&self.currency_symbol))?;
                }
                Some(MenuOption::SaveAndExit) => {
                    self.save_and_exit()?;
                    return Ok(());
                }
                None => self.console.say("Invalid option, please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        self.console.say("")?;
        self.console.say("Expense Tracker Menu:")?;
        for option in MenuOption::ALL {
            self.console
                .say(format!("{}. {}", option.number(), option.label()))?;
        }
        Ok(())
    }

    fn print_report(&mut self, text: &str) -> TrackerResult<()> {
        self.console.say("")?;
        self.console.write_block(text)
    }

    fn add_expense(&mut self, number: u32, force_new_category: bool) -> TrackerResult<()> {
        self.console.say("")?;
        self.console.say(format!("Expense #{}", number))?;

        let input = collect_expense(
            &mut self.console,
            &self.state.categories,
            force_new_category,
        )?;

        let recorded = match self.state.expenses.record(
            input.description.as_str(),
            input.category.as_str(),
            input.amount,
        ) {
            Ok(recorded) => recorded,
            Err(TrackerError::Validation(message)) => {
                return self.console.say(format!("Expense not added: {}.", message));
            }
            Err(err) => return Err(err),
        };
        let new_category = self.state.categories.insert(input.category.as_str());

        self.audit_recorded(recorded, &input, new_category);
        self.console.say("Expense added successfully!")
    }

    fn save_and_exit(&mut self) -> TrackerResult<()> {
        let base_name = self
            .console
            .prompt("Enter a name for the file (without extension): ")?;

        match self
            .exporter
            .save(&mut self.state, &base_name, Local::now().naive_local())
        {
            Ok(path) => {
                self.console
                    .say(format!("Expenses saved to {}", path.display()))?;
                self.audit_log(AuditEntry::export(
                    path.display().to_string(),
                    self.state.expenses.len(),
                ));
            }
            Err(err) => {
                warn!(error = %err, "save failed");
                self.console.say(err.to_string())?;
            }
        }

        if let Some(opener) = &self.opener {
            let dir = self.exporter.export_dir();
            let outcome = opener.open(dir);
            debug!(?outcome, "open export folder");
            let message = describe_outcome(&outcome, dir);
            self.console.say(message)?;
        }

        self.console.say("Goodbye!")
    }

    fn audit_recorded(&self, recorded: Recorded, input: &ExpenseInput, new_category: bool) {
        if self.audit.is_none() {
            return;
        }

        let key = format!("{} ({})", input.description, input.category);
        let entry = match recorded {
            Recorded::Created(id) => match self.state.expenses.get(id) {
                Ok(expense) => {
                    AuditEntry::create(EntityType::Expense, id.to_string(), Some(key), expense)
                }
                Err(err) => {
                    warn!(error = %err, "recorded expense missing from store");
                    return;
                }
            },
            Recorded::Replaced { id, previous } => AuditEntry::update(
                EntityType::Expense,
                id.to_string(),
                Some(key),
                &json!({ "amount": previous }),
                &json!({ "amount": input.amount }),
                Some(format!(
                    "amount: {} -> {}",
                    previous.format_with_symbol(&self.currency_symbol),
                    input.amount.format_with_symbol(&self.currency_symbol)
                )),
            ),
        };
        self.audit_log(entry);

        if new_category {
            self.audit_log(AuditEntry::create(
                EntityType::Category,
                input.category.as_str(),
                None,
                &json!({ "name": input.category }),
            ));
        }
    }

    /// Audit failures never interrupt the session
    fn audit_log(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(&entry) {
                warn!(
                    error = %err,
                    path = %logger.path().display(),
                    "failed to write audit entry"
                );
            }
        }
    }
}
