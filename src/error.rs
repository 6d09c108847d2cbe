//! Error Types
//!
//! Display strings are the messages shown to the user.

use thiserror::Error;

/// Input rejected before any network activity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Введите номер дела или VIN номер")]
    EmptyRequest,
    #[error("Такая заявка уже добавлена!")]
    Duplicate,
    #[error("Очередь пуста. Добавьте заявки перед отправкой.")]
    EmptyQueue,
    #[error("Дождитесь окончания отправки заявок")]
    SubmissionInProgress,
    #[error("Введите корректный IP адрес")]
    InvalidIp,
    #[error("Укажите время в формате ЧЧ:ММ")]
    InvalidTime,
}

/// Transport-level failure talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Ошибка соединения с сервером")]
    Network(String),
    #[error("Сервер вернул статус {0}")]
    Status(u16),
    #[error("Некорректный ответ сервера")]
    Decode(String),
    #[error("Требуется авторизация")]
    Unauthorized,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Outcome of a batch submission that did not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// `index` is 1-based, as shown to the user
    #[error("Ошибка добавления заявки {index}: {reason}")]
    Rejected { index: usize, reason: String },
    #[error("Ошибка соединения с сервером")]
    Transport(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_names_item() {
        let err = BatchError::Rejected { index: 3, reason: "нет доступа".into() };
        assert_eq!(err.to_string(), "Ошибка добавления заявки 3: нет доступа");
    }

    #[test]
    fn test_transport_message_is_generic() {
        let err: BatchError = ApiError::Decode("eof".into()).into();
        assert_eq!(err.to_string(), "Ошибка соединения с сервером");
    }
}
