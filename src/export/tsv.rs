//! Tab-delimited export
//!
//! Writes one header line followed by one line per expense, ready to paste
//! into a spreadsheet. Fields are written verbatim without quoting.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{TrackerError, TrackerResult};
use crate::storage::ExpenseStore;

/// Header line of every export file
pub const HEADER: [&str; 3] = ["Description", "Category", "Amount"];

/// Export all expenses as tab-delimited text
pub fn export_expenses_tsv<W: Write>(store: &ExpenseStore, writer: &mut W) -> TrackerResult<()> {
    let mut tsv = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    tsv.write_record(HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in store.all() {
        tsv.write_record([
            expense.description.as_str(),
            expense.category.as_str(),
            expense.amount.to_decimal_string().as_str(),
        ])
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    tsv.flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use csv::ReaderBuilder;

    #[test]
    fn test_header_only_for_empty_store() {
        let mut output = Vec::new();
        export_expenses_tsv(&ExpenseStore::new(), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Description\tCategory\tAmount\n"
        );
    }

    #[test]
    fn test_rows_in_recorded_order() {
        let mut store = ExpenseStore::new();
        store.record("Coffee", "Food", Money::from_cents(350)).unwrap();
        store.record("Train", "Travel", Money::from_cents(1250)).unwrap();

        let mut output = Vec::new();
        export_expenses_tsv(&store, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Description\tCategory\tAmount\nCoffee\tFood\t3.50\nTrain\tTravel\t12.50\n"
        );
    }

    #[test]
    fn test_parsed_back_reproduces_every_expense() {
        let mut store = ExpenseStore::new();
        store.record("Coffee", "Food", Money::from_cents(350)).unwrap();
        store
            .record("Dinner (with friends)", "Food", Money::from_cents(4000))
            .unwrap();
        store.record("", "Misc", Money::zero()).unwrap();
        store.record("Coffee", "Food", Money::from_cents(400)).unwrap();

        let mut output = Vec::new();
        export_expenses_tsv(&store, &mut output).unwrap();

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .from_reader(output.as_slice());

        let rows: Vec<(String, String, Money)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (
                    r[0].to_string(),
                    r[1].to_string(),
                    Money::parse(&r[2]).unwrap(),
                )
            })
            .collect();

        let expected: Vec<(String, String, Money)> = store
            .all()
            .iter()
            .map(|e| (e.description.clone(), e.category.clone(), e.amount))
            .collect();

        assert_eq!(rows, expected);
        assert_eq!(rows.len(), 3);
    }
}
