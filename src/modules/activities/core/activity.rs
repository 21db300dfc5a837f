use serde::Serialize;

use crate::modules::activities::core::errors::ActivityError;

/// One extracurricular activity and the emails signed up for it.
///
/// `participants` keeps signup order and holds each email at most once.
/// `max_participants` is informational; nothing enforces it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(description: impl Into<String>, schedule: impl Into<String>, max: u32) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants: max,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in emails {
            let email = email.into();
            if !self.is_registered(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn enroll(&mut self, email: &str) -> Result<(), ActivityError> {
        if self.is_registered(email) {
            return Err(ActivityError::AlreadyRegistered {
                email: email.to_string(),
            });
        }
        self.participants.push(email.to_string());
        Ok(())
    }

    pub fn withdraw(&mut self, email: &str) -> Result<(), ActivityError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ActivityError::NotRegistered {
                email: email.to_string(),
            })?;
        self.participants.remove(position);
        Ok(())
    }
}
