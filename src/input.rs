//! Console input sources
//!
//! Interactive reads live behind the [`RecordSource`] trait so the ingest
//! workflow can be driven from tests without a console.

use crate::roster::RawStudent;
use std::io::{self, BufRead, Write};

/// Source of raw student records for one ingest session.
///
/// Returns `None` when the session has no more input.
pub trait RecordSource {
    fn next_record(&mut self) -> Option<RawStudent>;
}

/// In-memory source for tests and scripted runs.
pub struct VecSource {
    records: std::vec::IntoIter<RawStudent>,
}

impl VecSource {
    pub fn new(records: Vec<RawStudent>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl RecordSource for VecSource {
    fn next_record(&mut self) -> Option<RawStudent> {
        self.records.next()
    }
}

/// Interactive stdin source with a Y/N continue prompt after each record.
pub struct ConsoleSource {
    done: bool,
}

impl ConsoleSource {
    pub fn new() -> Self {
        println!("# Insert Student Data into Table");
        Self { done: false }
    }
}

impl Default for ConsoleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for ConsoleSource {
    fn next_record(&mut self) -> Option<RawStudent> {
        if self.done {
            return None;
        }

        let name = prompt("Enter Student's Name: ")?;
        let age = prompt("Enter Student's Age: ")?;
        let score = prompt("Enter Student's Score: ")?;

        loop {
            match prompt("Want to Enter More Students to Database ? (Y/N): ")?
                .trim()
                .to_uppercase()
                .as_str()
            {
                "Y" => break,
                "N" => {
                    self.done = true;
                    break;
                }
                _ => println!("Enter Either 'Y' or 'N' only"),
            }
        }

        Some(RawStudent { name, age, score })
    }
}

/// Raw console fields for a transfer, prior to validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTransfer {
    pub amount: String,
    pub debit_account: String,
    pub credit_account: String,
}

/// Prompt for the three transfer fields. `None` on end of input.
pub fn prompt_transfer_input() -> Option<RawTransfer> {
    let amount = prompt("Enter Amount to make Transaction: ")?;
    let debit_account = prompt("Enter Account Number to Debit: ")?;
    let credit_account = prompt("Enter Account Number to Credit: ")?;

    Some(RawTransfer {
        amount,
        debit_account,
        credit_account,
    })
}

/// Print a prompt and read one line. `None` on EOF.
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_source_yields_in_order() {
        let raws = vec![
            RawStudent {
                name: "Asha".to_string(),
                age: "20".to_string(),
                score: "81.5".to_string(),
            },
            RawStudent {
                name: "Ravi".to_string(),
                age: "22".to_string(),
                score: "74.0".to_string(),
            },
        ];
        let mut source = VecSource::new(raws.clone());

        assert_eq!(source.next_record(), Some(raws[0].clone()));
        assert_eq!(source.next_record(), Some(raws[1].clone()));
        assert_eq!(source.next_record(), None, "Exhausted source yields None");
        assert_eq!(source.next_record(), None, "Stays exhausted");
    }
}
