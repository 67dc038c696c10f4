//! Account service implementation
//!
//! This service owns the ledger rules: lazy account creation, task rewards,
//! referral bonuses and withdrawals. Each operation runs a full
//! load, locate-or-create, mutate, save cycle against the record store.

use std::sync::Arc;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use crate::config::RewardsConfig;
use crate::database::RecordStore;
use crate::models::{LedgerKind, PayoutRequest, StoreDocument, TaskIssuance, User};
use crate::utils::errors::Result;
use crate::utils::helpers::{generate_referral_code, generate_uuid};
use crate::utils::logging::{log_ledger_event, log_withdrawal_rejected};

/// Result of trying to attach a referrer to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferralOutcome {
    /// `parrain` was set and the referrer credited
    Applied { referrer_chat_id: i64 },
    /// The account already has a referrer
    AlreadyReferred,
    /// No account uses this code
    UnknownCode,
    /// The code is the account's own and self-referral is disabled
    SelfReferral,
}

/// A task that was just granted along with the resulting balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGrant {
    pub task: TaskIssuance,
    pub balance: u64,
}

/// Result of a withdrawal request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalOutcome {
    Requested(PayoutRequest),
    BelowMinimum { balance: u64, minimum: u64 },
}

/// Account service for ledger operations
#[derive(Clone)]
pub struct AccountService {
    store: RecordStore,
    rewards: RewardsConfig,
    /// Serializes read-modify-write cycles across clones
    write_lock: Arc<Mutex<()>>,
}

impl AccountService {
    /// Create a new AccountService instance
    pub fn new(store: RecordStore, rewards: RewardsConfig) -> Self {
        Self {
            store,
            rewards,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Get the account for `chat_id`, creating it on first use
    pub async fn ensure_user(&self, chat_id: i64) -> Result<User> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let (index, created) = locate_or_create(&mut document, chat_id);
        if created {
            self.store.save(&document).await?;
        }

        Ok(document.users[index].clone())
    }

    /// Current balance in FC
    pub async fn balance(&self, chat_id: i64) -> Result<u64> {
        Ok(self.ensure_user(chat_id).await?.solde)
    }

    /// The account's own referral code
    pub async fn referral_code(&self, chat_id: i64) -> Result<String> {
        Ok(self.ensure_user(chat_id).await?.id)
    }

    /// Attach the referrer identified by `code` and pay them the referral bonus
    pub async fn apply_referral(&self, chat_id: i64, code: &str) -> Result<ReferralOutcome> {
        let code = code.trim();
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let (index, created) = locate_or_create(&mut document, chat_id);

        let outcome = if document.users[index].parrain.is_some() {
            ReferralOutcome::AlreadyReferred
        } else {
            match document.user_index_by_code(code) {
                None => ReferralOutcome::UnknownCode,
                Some(referrer) if referrer == index && !self.rewards.allow_self_referral => {
                    ReferralOutcome::SelfReferral
                }
                Some(referrer) => {
                    document.users[index].parrain = Some(code.to_string());
                    let referrer_user = &mut document.users[referrer];
                    let balance = referrer_user.credit(self.rewards.referral_bonus);
                    log_ledger_event(referrer_user.chat_id, "parrainage", self.rewards.referral_bonus, balance);
                    ReferralOutcome::Applied { referrer_chat_id: referrer_user.chat_id }
                }
            }
        };

        if created || matches!(outcome, ReferralOutcome::Applied { .. }) {
            self.store.save(&document).await?;
        }

        debug!(chat_id = chat_id, outcome = ?outcome, "Referral processed");
        Ok(outcome)
    }

    /// Hand out a task and credit its reward immediately
    pub async fn grant_task(&self, chat_id: i64) -> Result<TaskGrant> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let (index, _) = locate_or_create(&mut document, chat_id);

        let task = TaskIssuance {
            id: generate_uuid(),
            lien: self.rewards.task_link.clone(),
            recompense: self.rewards.task_reward,
        };

        let user = &mut document.users[index];
        user.historique.push(task.ledger_entry());
        let balance = user.credit(task.recompense);

        self.store.save(&document).await?;
        log_ledger_event(chat_id, LedgerKind::Task.as_str(), task.recompense, balance);

        Ok(TaskGrant { task, balance })
    }

    /// Record a payout request for the whole balance and reset it to zero
    pub async fn request_withdrawal(&self, chat_id: i64) -> Result<WithdrawalOutcome> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let (index, created) = locate_or_create(&mut document, chat_id);
        let balance = document.users[index].solde;

        if balance < self.rewards.min_withdrawal {
            if created {
                self.store.save(&document).await?;
            }
            log_withdrawal_rejected(chat_id, balance, self.rewards.min_withdrawal);
            return Ok(WithdrawalOutcome::BelowMinimum {
                balance,
                minimum: self.rewards.min_withdrawal,
            });
        }

        let request = PayoutRequest {
            id: generate_uuid(),
            chat_id,
            montant: balance,
            date: Utc::now(),
        };

        document.paiements.push(request.clone());
        document.users[index].solde = 0;
        self.store.save(&document).await?;

        info!(chat_id = chat_id, payout_id = %request.id, montant = request.montant, "Payout request recorded");
        Ok(WithdrawalOutcome::Requested(request))
    }
}

/// Index of the account for `chat_id`, pushing a fresh one when absent.
/// The flag tells whether the document changed.
fn locate_or_create(document: &mut StoreDocument, chat_id: i64) -> (usize, bool) {
    if let Some(index) = document.user_index_by_chat_id(chat_id) {
        return (index, false);
    }

    let mut code = generate_referral_code();
    while document.user_index_by_code(&code).is_some() {
        code = generate_referral_code();
    }

    document.users.push(User::new(chat_id, code));
    info!(chat_id = chat_id, "New user registered");
    (document.users.len() - 1, true)
}
