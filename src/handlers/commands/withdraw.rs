//! Withdrawal command handler

use crate::utils::errors::Result;
use crate::utils::helpers::format_timestamp;
use crate::utils::logging::log_user_action;
use crate::services::{ServiceFactory, WithdrawalOutcome};
use super::Reply;

/// Handle /retirer command
pub async fn handle_withdraw(services: &ServiceFactory, chat_id: i64) -> Result<Reply> {
    match services.account_service.request_withdrawal(chat_id).await? {
        WithdrawalOutcome::BelowMinimum { minimum, .. } => Ok(Reply::plain(format!(
            "❌ Montant minimum de retrait : {} FC",
            minimum
        ))),
        WithdrawalOutcome::Requested(request) => {
            let details = format!("{} FC on {}", request.montant, format_timestamp(request.date));
            log_user_action(chat_id, "withdrawal_requested", Some(&details));

            Ok(Reply::plain(format!(
                "✅ Retrait de {} FC enregistré. Tu recevras ton argent via {} bientôt.",
                request.montant, services.settings.payments.method
            )))
        }
    }
}
