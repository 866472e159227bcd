//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A book was borrowed
    Borrow,
    /// A book was returned
    Return,
    /// A user logged in
    Login,
    /// A login attempt was rejected
    LoginFailed,
    /// A store file was created from its defaults
    Bootstrap,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Borrow => write!(f, "BORROW"),
            Operation::Return => write!(f, "RETURN"),
            Operation::Login => write!(f, "LOGIN"),
            Operation::LoginFailed => write!(f, "LOGIN_FAILED"),
            Operation::Bootstrap => write!(f, "BOOTSTRAP"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    User,
    Transaction,
    Store,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::User => write!(f, "User"),
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Store => write!(f, "Store"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// ID of the affected entity
    pub entity_id: String,

    /// User acting, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// JSON snapshot of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            username: None,
            details: None,
        }
    }

    /// Entry for a borrow or return row
    pub fn loan(transaction: &Transaction) -> Self {
        let operation = match transaction.kind() {
            TransactionKind::Borrow => Operation::Borrow,
            TransactionKind::Return => Operation::Return,
        };
        Self {
            username: Some(transaction.username.clone()),
            details: serde_json::to_value(transaction).ok(),
            ..Self::new(operation, EntityType::Transaction, transaction.id.to_string())
        }
    }

    /// Entry for a successful login
    pub fn login(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            username: Some(username.clone()),
            ..Self::new(Operation::Login, EntityType::User, username)
        }
    }

    /// Entry for a rejected login attempt
    pub fn login_failed(username: impl Into<String>, attempts_left: u32) -> Self {
        let username = username.into();
        Self {
            username: Some(username.clone()),
            details: Some(serde_json::json!({ "attempts_left": attempts_left })),
            ..Self::new(Operation::LoginFailed, EntityType::User, username)
        }
    }

    /// Entry for a store file created from defaults
    pub fn bootstrap(file_name: impl Into<String>) -> Self {
        Self::new(Operation::Bootstrap, EntityType::Store, file_name)
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        let mut line = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type,
            self.entity_id
        );
        if let Some(username) = &self.username {
            line.push_str(&format!(" by {}", username));
        }
        line
    }
}
