//! The backend endpoints, one variant per operation.

use std::fmt;

/// A single request/response exchange against one backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateUser,
    GetUser,
    InitiateConnection,
    CheckConnectionStatus,
    SendMessage,
    GetMessageResponse,
    GetUserMemory,
    HealthCheck,
    GetUserConversations,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::CreateUser,
        Operation::GetUser,
        Operation::InitiateConnection,
        Operation::CheckConnectionStatus,
        Operation::SendMessage,
        Operation::GetMessageResponse,
        Operation::GetUserMemory,
        Operation::HealthCheck,
        Operation::GetUserConversations,
    ];

    /// Prefix of the `ApiError::Request` message for this operation.
    pub fn failure_label(&self) -> &'static str {
        match self {
            Operation::CreateUser => "Failed to create user",
            Operation::GetUser => "Failed to get user",
            Operation::InitiateConnection => "Failed to initiate connection",
            Operation::CheckConnectionStatus => "Failed to check connection status",
            Operation::SendMessage => "Failed to send message",
            Operation::GetMessageResponse => "Failed to get message response",
            Operation::GetUserMemory => "Failed to get user memory",
            Operation::HealthCheck => "Health check failed",
            Operation::GetUserConversations => "Failed to get conversations",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateUser => "create_user",
            Operation::GetUser => "get_user",
            Operation::InitiateConnection => "initiate_connection",
            Operation::CheckConnectionStatus => "check_connection_status",
            Operation::SendMessage => "send_message",
            Operation::GetMessageResponse => "get_message_response",
            Operation::GetUserMemory => "get_user_memory",
            Operation::HealthCheck => "health_check",
            Operation::GetUserConversations => "get_user_conversations",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_is_distinct() {
        let mut labels: Vec<_> = Operation::ALL.iter().map(|op| op.failure_label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Operation::ALL.len());
    }

    #[test]
    fn display_uses_snake_case_name() {
        assert_eq!(Operation::CheckConnectionStatus.to_string(), "check_connection_status");
    }
}
