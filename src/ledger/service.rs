//! Transfer session

use super::error::TransferError;
use super::types::TransferRequest;
use crate::db::Database;
use rust_decimal::Decimal;
use sqlx::Row;

const BALANCE_QUERY: &str = "SELECT balance FROM accounts WHERE account_number = $1";
const DEBIT_QUERY: &str =
    "UPDATE accounts SET balance = balance - $1 WHERE account_number = $2";
const CREDIT_QUERY: &str =
    "UPDATE accounts SET balance = balance + $1 WHERE account_number = $2";

pub struct TransferService;

impl TransferService {
    /// Execute one debit/credit transfer.
    ///
    /// Precondition, debit and credit all run in a single transaction; an
    /// error return before commit rolls everything back. The balance read
    /// takes no row lock, so a concurrent session can pass the check before
    /// our debit lands (known limitation, see DESIGN.md).
    pub async fn execute(db: &Database, request: &TransferRequest) -> Result<(), TransferError> {
        let mut tx = db.pool().begin().await?;

        let balance_row = sqlx::query(BALANCE_QUERY)
            .bind(request.debit_account.get())
            .fetch_optional(&mut *tx)
            .await?;

        // Missing account reads as zero: fail closed.
        let balance = balance_row
            .as_ref()
            .map(|row| row.get::<Decimal, _>("balance"))
            .unwrap_or(Decimal::ZERO);

        if balance < request.amount {
            return Err(TransferError::InsufficientBalance);
        }

        let debited = sqlx::query(DEBIT_QUERY)
            .bind(request.amount)
            .bind(request.debit_account.get())
            .execute(&mut *tx)
            .await?;

        let credited = sqlx::query(CREDIT_QUERY)
            .bind(request.amount)
            .bind(request.credit_account.get())
            .execute(&mut *tx)
            .await?;

        if debited.rows_affected() == 0 || credited.rows_affected() == 0 {
            return Err(TransferError::InvalidAccount);
        }

        tx.commit().await?;

        tracing::info!(
            amount = %request.amount,
            from = %request.debit_account,
            to = %request.credit_account,
            "Transfer committed"
        );
        Ok(())
    }
}
