use crate::error::{AliasError, AliasResult};
use crate::exec::Executor;
use log::{debug, info};
use std::num::NonZeroU32;

pub const CREATE_NEW: &str = "Create New";

/// How many times a failing "Create New" callback is invoked before the
/// menu gives up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Keep asking until creation succeeds or input is closed.
    #[default]
    Unbounded,
    Limited(NonZeroU32),
}

impl RetryPolicy {
    fn allows_another(&self, attempts: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => attempts < max.get(),
        }
    }
}

impl From<Option<NonZeroU32>> for RetryPolicy {
    fn from(max: Option<NonZeroU32>) -> Self {
        max.map_or(RetryPolicy::Unbounded, RetryPolicy::Limited)
    }
}

pub type Create<'c> = &'c mut dyn FnMut() -> AliasResult<String>;

/// Numbered "pick one, or create a new one" menu.
///
/// Blank items are never shown. Out-of-range or non-numeric replies print a
/// validation message and show the menu again; a failed create is reported
/// and retried under the [`RetryPolicy`]. Input-stream failures abort at once.
#[derive(Clone, Copy)]
pub struct Menu<'a> {
    exec: &'a dyn Executor,
    retry: RetryPolicy,
}

impl<'a> Menu<'a> {
    pub fn new(exec: &'a dyn Executor) -> Self {
        Self {
            exec,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Selects one of `items`. Fails with [`AliasError::EmptyList`] when
    /// there is nothing to choose from.
    pub fn select(&self, items: &[String], description: &str) -> AliasResult<String> {
        self.run(items, description, None)
    }

    /// Selects one of `items`, with an extra trailing "Create New" entry
    /// that hands over to `create`.
    pub fn select_or_create(
        &self,
        items: &[String],
        description: &str,
        create: Create<'_>,
    ) -> AliasResult<String> {
        self.run(items, description, Some(create))
    }

    fn run(
        &self,
        items: &[String],
        description: &str,
        mut create: Option<Create<'_>>,
    ) -> AliasResult<String> {
        let entries: Vec<&str> = items
            .iter()
            .map(String::as_str)
            .filter(|item| !item.is_empty())
            .collect();

        if entries.is_empty() && create.is_none() {
            return Err(AliasError::EmptyList {
                description: description.to_string(),
            });
        }

        let max = entries.len() + usize::from(create.is_some());

        loop {
            for (idx, entry) in entries.iter().enumerate() {
                self.exec.say(&format!("{}. {entry}", idx + 1));
            }
            if create.is_some() {
                self.exec.say(&format!("{max}. {CREATE_NEW}"));
            }

            let reply = self
                .exec
                .prompt(&format!("\nSelect {description} [1-{max}]: "))?;

            match (parse_choice(&reply, max), create.as_deref_mut()) {
                (Some(choice), _) if choice <= entries.len() => {
                    let selected = entries[choice - 1].to_string();
                    info!("selected {description} '{selected}'");
                    return Ok(selected);
                }
                (Some(_), Some(create)) => return self.create(description, create),
                _ => {
                    debug!("rejected {description} selection '{reply}'");
                    self.exec
                        .warn(&format!("invalid input -- valid selections: 1-{max}"));
                }
            }
        }
    }

    fn create(
        &self,
        description: &str,
        create: &mut dyn FnMut() -> AliasResult<String>,
    ) -> AliasResult<String> {
        let mut attempts = 0;

        loop {
            attempts += 1;

            match create() {
                Ok(created) => {
                    info!("created {description} '{created}'");
                    return Ok(created);
                }
                Err(err) if err.is_input() => return Err(err),
                Err(err) => {
                    self.exec.warn(&err.to_string());

                    if !self.retry.allows_another(attempts) {
                        return Err(AliasError::CreateAttemptsExhausted {
                            description: description.to_string(),
                            attempts,
                            last: Box::new(err),
                        });
                    }
                }
            }
        }
    }
}

fn parse_choice(reply: &str, max: usize) -> Option<usize> {
    reply
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=max).contains(choice))
}
