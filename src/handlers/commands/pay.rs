//! Pay command handler

use crate::services::ServiceFactory;
use super::Reply;

/// Handle /payer command; static instructions, no account access
pub fn handle_pay(services: &ServiceFactory) -> Reply {
    let payments = &services.settings.payments;
    Reply::plain(format!(
        "💸 Pour acheter des likes ou abonnés TikTok, contacte {} avec ta demande et preuve de paiement {}.",
        payments.contact, payments.method
    ))
}
