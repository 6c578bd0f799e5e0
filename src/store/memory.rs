use super::Store;

use crate::models::{Account, KindWord};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

/// Ephemeral Store keeping everything behind one mutex. The test suite runs
/// against this backend; nothing survives a restart.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    kind_words: Vec<KindWord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        return MemoryStore {
            inner: Mutex::new(Inner::default()),
        };
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        return self.inner.lock().unwrap_or_else(PoisonError::into_inner);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        return MemoryStore::new();
    }
}

#[cfg(test)]
impl MemoryStore {
    pub fn push_kind_word(&self, word: KindWord) {
        self.lock().kind_words.push(word);
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_account(&self, account_id: &str) -> Result<Option<Account>> {
        return Ok(self.lock().accounts.get(account_id).cloned());
    }

    async fn insert_account(&self, account_id: &str, points: u64) -> Result<Account> {
        let account = Account {
            account_id: account_id.to_string(),
            points: i64::try_from(points)?,
            last_game_played: None,
        };

        self.lock()
            .accounts
            .insert(account_id.to_string(), account.clone());

        return Ok(account);
    }

    async fn credit_points(
        &self,
        account_id: &str,
        amount: u64,
        played_at: DateTime<Utc>,
    ) -> Result<u64> {
        let mut inner = self.lock();

        let account = inner
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| anyhow!("account not found: {account_id}"))?;

        account.points = account
            .points
            .checked_add(i64::try_from(amount)?)
            .ok_or_else(|| anyhow!("balance overflow"))?;
        account.last_game_played = Some(played_at);

        return Ok(u64::try_from(account.points)?);
    }

    async fn debit_points(&self, account_id: &str, amount: u64) -> Result<Option<u64>> {
        let mut inner = self.lock();

        let Some(account) = inner.accounts.get_mut(account_id) else {
            return Ok(None);
        };

        let amount = i64::try_from(amount)?;
        if account.points < amount {
            return Ok(None);
        }

        account.points -= amount;

        return Ok(Some(u64::try_from(account.points)?));
    }

    async fn count_kind_words(&self) -> Result<u64> {
        return Ok(self.lock().kind_words.len() as u64);
    }

    async fn insert_kind_word(&self, message: &str) -> Result<KindWord> {
        let mut inner = self.lock();

        let word = KindWord {
            kind_word_id: inner.kind_words.len() as i64 + 1,
            message: message.to_string(),
            created_at: Utc::now(),
            likes: 0,
            is_active: true,
        };

        inner.kind_words.push(word.clone());

        return Ok(word);
    }

    async fn random_kind_word(&self) -> Result<Option<KindWord>> {
        let inner = self.lock();

        let active: Vec<&KindWord> = inner.kind_words.iter().filter(|w| w.is_active).collect();

        return Ok(active
            .choose(&mut rand::thread_rng())
            .map(|word| (*word).clone()));
    }
}
